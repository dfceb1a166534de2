//! Game records: a starting position plus the moves played from it

use serde::{Deserialize, Serialize};

use super::{
    Board, Player,
    outcome::{Outcome, evaluate},
};

/// A move in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// A game with its full history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub initial: Board,
    pub first_player: Player,
    pub moves: Vec<Move>,
    pub outcome: Outcome,
}

impl GameRecord {
    /// Start recording from `initial` with `first_player` to act
    pub fn new(initial: Board, first_player: Player) -> Self {
        Self {
            initial,
            first_player,
            moves: Vec::new(),
            outcome: evaluate(&initial),
        }
    }

    /// Whose turn it is after the recorded moves
    pub fn to_move(&self) -> Player {
        match self.moves.last() {
            Some(last) => last.player.opponent(),
            None => self.first_player,
        }
    }

    pub fn is_over(&self) -> bool {
        self.outcome.is_decided()
    }

    /// Play a move for the player whose turn it is
    ///
    /// # Errors
    ///
    /// [`crate::Error::GameOver`] once the game has a result, or the board's
    /// error for an occupied or out-of-range cell. Nothing is recorded on
    /// failure.
    pub fn play(&mut self, position: usize) -> Result<Board, crate::Error> {
        if self.is_over() {
            return Err(crate::Error::GameOver);
        }

        let player = self.to_move();
        let next = self.current_board()?.with_move(position, player)?;
        self.moves.push(Move { position, player });
        self.outcome = evaluate(&next);
        Ok(next)
    }

    /// Replay moves up to a given index (exclusive)
    ///
    /// # Errors
    ///
    /// Returns error if any move in the history is invalid for the board it
    /// was played on. This indicates corrupted game data.
    fn replay_moves_until(&self, end_index: usize) -> Result<Board, crate::Error> {
        self.moves
            .iter()
            .take(end_index)
            .try_fold(self.initial, |board, m| board.with_move(m.position, m.player))
    }

    /// Get current board
    ///
    /// # Errors
    ///
    /// Returns error if the history contains an illegal move.
    pub fn current_board(&self) -> Result<Board, crate::Error> {
        self.replay_moves_until(self.moves.len())
    }

    /// Every board from the initial one to the current one
    ///
    /// # Errors
    ///
    /// Returns error if the history contains an illegal move.
    pub fn board_sequence(&self) -> Result<Vec<Board>, crate::Error> {
        (0..=self.moves.len())
            .map(|i| self.replay_moves_until(i))
            .collect()
    }

    /// The positions played, in order
    pub fn positions(&self) -> Vec<usize> {
        self.moves.iter().map(|m| m.position).collect()
    }
}
