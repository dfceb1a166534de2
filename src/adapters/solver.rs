//! Solver controller: exhaustive tree plus backward induction on every turn

use tracing::{debug, instrument};

use crate::{
    Error, Result,
    ports::Controller,
    tictactoe::{Board, Player, Verdict, solve},
};

/// Plays the first move of the resolved best continuation.
///
/// The tree is rebuilt from scratch for each decision; nothing is cached
/// between turns.
pub struct SolverController {
    name: String,
    last_verdict: Option<Verdict>,
}

impl SolverController {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            last_verdict: None,
        }
    }

    /// How the solver judged its position at its most recent decision
    pub fn last_verdict(&self) -> Option<Verdict> {
        self.last_verdict
    }
}

impl Controller for SolverController {
    #[instrument(level = "debug", skip_all, fields(solver = %self.name, board = %board.encode()))]
    fn select_move(&mut self, board: &Board, to_move: Player) -> Result<usize> {
        if board.is_terminal() {
            return Err(Error::GameOver);
        }

        let tree = solve(*board, to_move);
        let pos = tree
            .best_continuation()
            .first()
            .copied()
            .ok_or(Error::NoValidMoves)?;

        self.last_verdict = tree.verdict();
        debug!(
            pos,
            outcome = %tree.outcome(),
            plies = tree.plies_remaining(),
            "solver chose move"
        );
        Ok(pos)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
