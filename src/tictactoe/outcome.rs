//! Position evaluation and outcome perspectives

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{Board, Player, lines::LineAnalyzer};

/// Status of a board, independent of whose turn it is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    InProgress,
    Draw,
    Win(Player),
}

/// An outcome seen from one player's side.
///
/// Ordered by preference: `Losing < Drawing < Winning`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Losing,
    Drawing,
    Winning,
}

impl Outcome {
    /// Translate into `player`'s perspective. `None` while still in progress.
    pub fn verdict_for(self, player: Player) -> Option<Verdict> {
        match self {
            Outcome::InProgress => None,
            Outcome::Draw => Some(Verdict::Drawing),
            Outcome::Win(winner) if winner == player => Some(Verdict::Winning),
            Outcome::Win(_) => Some(Verdict::Losing),
        }
    }

    pub fn is_decided(self) -> bool {
        self != Outcome::InProgress
    }

    /// The player with a completed line, if any
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::Win(player) => Some(player),
            _ => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "in progress"),
            Outcome::Draw => write!(f, "draw"),
            Outcome::Win(player) => write!(f, "{player} wins"),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Losing => "losing",
            Verdict::Drawing => "drawing",
            Verdict::Winning => "winning",
        };
        f.write_str(label)
    }
}

/// Classify a board: a completed line wins, otherwise an empty cell means the
/// game goes on, otherwise it is a draw.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((_, owner)) = LineAnalyzer::completed_line(board.cells()) {
        return Outcome::Win(owner);
    }
    if board.has_empty_cell() {
        Outcome::InProgress
    } else {
        Outcome::Draw
    }
}
