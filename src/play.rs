//! Interactive play: alternate two controllers until the game is decided

use std::{thread, time::Duration};

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::{
    Result,
    ports::{Controller, Observer},
    tictactoe::{Board, GameRecord, Player},
};

/// Settings for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub initial: Board,
    pub first_player: Player,
    /// Pause before an automated controller's move is applied and announced
    pub delay: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial: Board::new(),
            first_player: Player::X,
            delay: Duration::ZERO,
        }
    }
}

/// Runs a single game between two controllers
#[derive(Debug, Clone, Default)]
pub struct PlaySession {
    config: SessionConfig,
}

impl PlaySession {
    pub fn new(config: SessionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Play until a line is completed or the board is full.
    ///
    /// # Errors
    ///
    /// Propagates controller and observer failures. A controller returning an
    /// occupied or off-board cell yields the board's move error; the game
    /// record is never given an illegal move.
    #[instrument(level = "info", skip_all, fields(x = x.name(), o = o.name()))]
    pub fn run(
        &self,
        x: &mut dyn Controller,
        o: &mut dyn Controller,
        observer: &mut dyn Observer,
    ) -> Result<GameRecord> {
        let mut record = GameRecord::new(self.config.initial, self.config.first_player);
        observer.on_game_start(&self.config.initial, self.config.first_player)?;

        while !record.is_over() {
            let to_move = record.to_move();
            let board = record.current_board()?;
            let controller: &mut dyn Controller = match to_move {
                Player::X => &mut *x,
                Player::O => &mut *o,
            };

            let position = controller.select_move(&board, to_move)?;
            if !controller.is_interactive() && !self.config.delay.is_zero() {
                thread::sleep(self.config.delay);
            }

            let next = record.play(position)?;
            info!(player = %to_move, position, "move played");
            observer.on_move(to_move, position, &next)?;
        }

        info!(outcome = %record.outcome, moves = record.moves.len(), "game finished");
        observer.on_game_end(&record)?;
        Ok(record)
    }
}
