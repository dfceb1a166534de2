//! Ports (trait boundaries) for the interactive layer.
//!
//! The solver core is pure. Who chooses a move and where a game is shown are
//! decided behind these traits and implemented by the adapters module.

pub mod controller;
pub mod observer;

pub use controller::Controller;
pub use observer::Observer;
