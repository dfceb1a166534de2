//! Adapters implementing domain ports.
//!
//! Controllers decide moves (a console prompt or the exhaustive solver) and
//! observers present a game as it unfolds.

pub mod console;
pub mod human;
pub mod solver;

pub use console::ConsoleObserver;
pub use human::HumanController;
pub use solver::SolverController;
