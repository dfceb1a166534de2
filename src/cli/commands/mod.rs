//! Subcommands of the tictree binary

pub mod play;
pub mod solve;
pub mod stats;

use anyhow::{Context, Result};
use tracing::warn;

use crate::tictactoe::{Board, Player};

/// Parse a `--board` argument and settle who moves next.
///
/// Implausible positions are solved anyway, with a warning.
pub(crate) fn parse_position(board: &str, to_move: Option<Player>) -> Result<(Board, Player)> {
    let board =
        Board::from_string(board).with_context(|| format!("could not parse board '{board}'"))?;
    let to_move = to_move.unwrap_or_else(|| board.inferred_to_move());
    if let Err(reason) = board.check_plausible(to_move) {
        warn!(board = %board.encode(), %to_move, ?reason, "position cannot arise in play");
    }
    Ok((board, to_move))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_the_mover_when_not_given() {
        let (board, to_move) = parse_position("X...O...X", None).unwrap();
        assert_eq!(board.occupied_count(), 3);
        assert_eq!(to_move, Player::O);
    }

    #[test]
    fn explicit_mover_wins_over_inference() {
        let (_, to_move) = parse_position(".........", Some(Player::O)).unwrap();
        assert_eq!(to_move, Player::O);
    }

    #[test]
    fn bad_board_is_reported_with_context() {
        let err = parse_position("XO?......", None).unwrap_err();
        assert!(err.to_string().contains("could not parse board"));
    }
}
