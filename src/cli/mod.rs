//! CLI infrastructure for the tictree binary
//!
//! Subcommands solve a position, summarize the size of its game tree, or play
//! an interactive game against the solver.

pub mod commands;
pub mod config;
pub mod output;
