//! Observer port - watching a game as it is played

use crate::{
    Result,
    tictactoe::{Board, GameRecord, Player},
};

/// Receives session events in order: `on_game_start`, then `on_move` for
/// every ply, then `on_game_end`.
pub trait Observer {
    /// Called once with the starting position
    fn on_game_start(&mut self, _board: &Board, _first: Player) -> Result<()> {
        Ok(())
    }

    /// Called after a move has been applied
    fn on_move(&mut self, player: Player, position: usize, board: &Board) -> Result<()>;

    /// Called once the game has a result
    fn on_game_end(&mut self, _record: &GameRecord) -> Result<()> {
        Ok(())
    }
}
