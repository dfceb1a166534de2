//! Tic-Tac-Toe game model and exhaustive solver

pub mod board;
pub mod game;
pub mod game_tree;
pub mod lines;
pub mod outcome;
pub mod resolve;
pub mod validation;

pub use board::{Board, Cell, Player};
pub use game::{GameRecord, Move};
pub use game_tree::{TreeNode, TreeStats, build_tree, build_tree_from_empty};
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use outcome::{Outcome, Verdict, evaluate};
pub use resolve::{resolve, solve};
