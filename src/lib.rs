//! Exhaustive tic-tac-toe game trees with backward-induction solving
//!
//! This crate provides:
//! - An immutable board with line detection and outcome evaluation
//! - Construction of the complete game tree below any position
//! - Minimax resolution that labels every node with its outcome under
//!   perfect play and the line that reaches it
//! - A controller/observer game loop for playing against the solver

pub mod adapters;
pub mod cli;
pub mod error;
pub mod play;
pub mod ports;
pub mod tictactoe;

pub use error::{Error, Result};
pub use tictactoe::{
    Board, Cell, GameRecord, Move, Outcome, Player, TreeNode, TreeStats, Verdict, build_tree,
    build_tree_from_empty, evaluate, resolve, solve,
};
