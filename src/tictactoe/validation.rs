//! Plausibility checks for boards supplied from outside the solver
//!
//! The solver itself accepts any board. These checks only flag positions that
//! cannot arise from alternating play, so callers can warn before solving them.

use super::{Board, Player, WINNING_LINES, lines::LineAnalyzer};

/// Why a board could not have been reached by alternating moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Implausibility {
    /// One side has placed two or more marks more than the other
    PieceCounts { x: usize, o: usize },
    /// The side to move would be moving twice in a row
    TurnOrder { to_move: Player },
    /// Both sides have a completed line
    BothWin,
    /// Several completed lines that no single move could have formed
    DisjointLines { player: Player },
}

impl Board {
    /// Whose turn it is judging by the marks on the board, assuming X opened
    /// unless O is ahead.
    pub fn inferred_to_move(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Check whether this board with `to_move` acting next can occur in play.
    ///
    /// Either player may have opened the game.
    pub fn check_plausible(&self, to_move: Player) -> Result<(), Implausibility> {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        if x.abs_diff(o) > 1 {
            return Err(Implausibility::PieceCounts { x, o });
        }

        // The side with more marks has just moved.
        let ahead = match x.cmp(&o) {
            std::cmp::Ordering::Greater => Some(Player::X),
            std::cmp::Ordering::Less => Some(Player::O),
            std::cmp::Ordering::Equal => None,
        };
        if ahead == Some(to_move) {
            return Err(Implausibility::TurnOrder { to_move });
        }

        let x_wins = self.has_won(Player::X);
        let o_wins = self.has_won(Player::O);
        if x_wins && o_wins {
            return Err(Implausibility::BothWin);
        }

        for player in [Player::X, Player::O] {
            if !self.winning_lines_share_cell(player) {
                return Err(Implausibility::DisjointLines { player });
            }
        }

        Ok(())
    }

    /// Check if all winning lines for a player share at least one cell.
    /// This is necessary for multiple lines to be formed in a single move.
    pub fn winning_lines_share_cell(&self, player: Player) -> bool {
        if LineAnalyzer::completed_lines_for(self.cells(), player) < 2 {
            return true;
        }

        let target = player.to_cell();
        let lines: Vec<_> = WINNING_LINES
            .iter()
            .filter(|line| line.iter().all(|&idx| self.get(idx) == target))
            .collect();

        (0..9).any(|pos| lines.iter().all(|line| line.contains(&pos)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        Board::from_string(s).unwrap()
    }

    #[test]
    fn empty_board_is_plausible_for_either_opener() {
        assert!(Board::new().check_plausible(Player::X).is_ok());
        assert!(Board::new().check_plausible(Player::O).is_ok());
    }

    #[test]
    fn rejects_lopsided_piece_counts() {
        assert_eq!(
            board("XXX......").check_plausible(Player::O),
            Err(Implausibility::PieceCounts { x: 3, o: 0 })
        );
    }

    #[test]
    fn rejects_side_moving_twice() {
        assert_eq!(
            board("X........").check_plausible(Player::X),
            Err(Implausibility::TurnOrder { to_move: Player::X })
        );
    }

    #[test]
    fn rejects_both_sides_winning() {
        assert_eq!(
            board("XXXOOO...").check_plausible(Player::X),
            Err(Implausibility::BothWin)
        );
    }

    #[test]
    fn double_line_through_shared_cell_is_plausible() {
        // X X X
        // X O O
        // X O O
        assert!(board("XXXXOOXOO").check_plausible(Player::O).is_ok());
    }

    #[test]
    fn rejects_parallel_double_line() {
        // X X X
        // O O .
        // X X X
        let cells = board("XXXOO.XXX");
        assert!(!cells.winning_lines_share_cell(Player::X));
    }

    #[test]
    fn infers_turn_from_counts() {
        assert_eq!(Board::new().inferred_to_move(), Player::X);
        assert_eq!(board("X........").inferred_to_move(), Player::O);
        assert_eq!(board("XO.......").inferred_to_move(), Player::X);
        assert_eq!(board("O........").inferred_to_move(), Player::X);
    }

    #[test]
    fn diagonal_scenario_board_is_plausible() {
        assert!(board("X...OO..X").check_plausible(Player::X).is_ok());
    }
}
