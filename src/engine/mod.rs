//! Engine module - grid state and the run/pause lifecycle.

mod controller;
mod grid;

pub use controller::*;
pub use grid::*;
