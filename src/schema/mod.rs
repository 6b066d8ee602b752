//! Schema module - configuration and parameter sanitization.

mod config;
mod params;

pub use config::*;
pub use params::*;
