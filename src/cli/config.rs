//! Shared configuration types for CLI commands

use std::time::Duration;

use clap::ValueEnum;
use indicatif::ProgressBar;
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

use crate::{
    cli::output::create_spinner,
    play::SessionConfig,
    tictactoe::{Board, Player},
};

/// Common configuration shared across commands
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Whether to show spinners while trees are built
    pub progress: bool,

    /// Verbose output
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            progress: true,
            verbose: false,
        }
    }
}

impl CommonConfig {
    /// Default tracing directive when `RUST_LOG` is unset
    pub fn log_directive(&self) -> &'static str {
        if self.verbose { "tictree=debug" } else { "warn" }
    }

    /// Spinner for a long computation, or `None` when progress is turned off
    pub fn spinner(&self, message: &str) -> Option<ProgressBar> {
        self.progress.then(|| create_spinner(message))
    }
}

/// Which side the person at the keyboard controls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HumanSide {
    X,
    O,
    Random,
}

/// Interactive game configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Side controlled by the human
    pub human: HumanSide,

    /// Player making the first move
    pub first_player: Player,

    /// Pause before the solver's move is shown, in milliseconds
    pub delay_ms: u64,

    /// Seed for choosing a random side
    pub seed: Option<u64>,

    /// Starting position
    pub initial: Board,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            human: HumanSide::X,
            first_player: Player::X,
            delay_ms: 600,
            seed: None,
            initial: Board::new(),
        }
    }
}

impl PlayConfig {
    /// Settle which player the human controls, drawing a side when asked to
    pub fn human_player(&self) -> Player {
        match self.human {
            HumanSide::X => Player::X,
            HumanSide::O => Player::O,
            HumanSide::Random => {
                let mut rng = match self.seed {
                    Some(seed) => StdRng::seed_from_u64(seed),
                    None => StdRng::from_os_rng(),
                };
                if rng.random_bool(0.5) {
                    Player::X
                } else {
                    Player::O
                }
            }
        }
    }

    pub fn session(&self) -> SessionConfig {
        SessionConfig {
            initial: self.initial,
            first_player: self.first_player,
            delay: Duration::from_millis(self.delay_ms),
        }
    }
}
