//! Conway's Game of Life on a bounded 2-D grid.
//!
//! This crate provides a simulation engine decoupled from any rendering or
//! input surface: a double-buffered cell grid, the Life transition rule,
//! and a cooperative run/pause/restart tick lifecycle. Renderers, cell
//! editors, and settings panels are external collaborators that call in
//! through a small interface.
//!
//! # Architecture
//!
//! The crate is split into two main modules:
//!
//! - `schema`: Configuration types and raw-parameter sanitization
//! - `engine`: Grid state, neighbor counting, stepping, and the
//!   run/pause lifecycle
//!
//! # Example
//!
//! ```rust,no_run
//! use std::time::Instant;
//!
//! use gol_engine::{Grid, Renderer, SimulationConfig, SimulationController};
//!
//! struct Population;
//!
//! impl Renderer for Population {
//!     fn render(&mut self, grid: &Grid) {
//!         println!("generation {}: {} live", grid.generation(), grid.population());
//!     }
//! }
//!
//! let config = SimulationConfig::default();
//! let mut sim = SimulationController::new(&config).expect("valid dimensions");
//! let mut renderer = Population;
//!
//! sim.start(Instant::now());
//! while sim.grid().generation() < 10 {
//!     if let Some(deadline) = sim.next_wake() {
//!         std::thread::sleep(deadline.saturating_duration_since(Instant::now()));
//!     }
//!     sim.tick(Instant::now(), &mut renderer);
//! }
//! ```

pub mod engine;
pub mod schema;

// Re-export commonly used types
pub use engine::{Grid, GridError, Renderer, RunState, SimulationController, Tick};
pub use schema::{ConfigError, RawParams, SimulationConfig};
