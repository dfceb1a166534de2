//! Controller port - who picks the next move

use crate::{
    Result,
    tictactoe::{Board, Player},
};

/// Source of moves for one side of a game.
///
/// Implemented by the human console prompt and by the exhaustive solver, so a
/// session can pit any two against each other.
///
/// # Examples
///
/// ```no_run
/// use tictree::{
///     adapters::SolverController,
///     ports::Controller,
///     tictactoe::{Board, Player},
/// };
///
/// let mut solver = SolverController::new("Solver");
/// let pos = solver.select_move(&Board::new(), Player::X).unwrap();
/// assert!(pos < 9);
/// ```
pub trait Controller {
    /// Select a move for `to_move` on `board`.
    ///
    /// The returned position must be an empty cell in 0..9.
    ///
    /// # Errors
    ///
    /// Returns an error if no move can be produced, e.g. the board is
    /// already decided or the input source is exhausted.
    fn select_move(&mut self, board: &Board, to_move: Player) -> Result<usize>;

    /// Name used in announcements and logs
    fn name(&self) -> &str;

    /// Whether a person is behind this controller.
    ///
    /// Sessions only apply their announcement delay to automated
    /// controllers.
    fn is_interactive(&self) -> bool {
        false
    }
}
