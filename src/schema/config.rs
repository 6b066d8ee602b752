//! Configuration types for the simulation engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level simulation configuration.
///
/// Missing fields deserialize to the defaults, so a partial JSON config is
/// enough to override a single knob.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Grid width in cells.
    pub width: usize,
    /// Grid height in cells.
    pub height: usize,
    /// Tick period in milliseconds.
    pub interval_ms: u64,
    /// Probability in [0, 1] that a cell starts alive.
    pub life_probability: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            interval_ms: 500,
            life_probability: 0.5,
        }
    }
}

impl SimulationConfig {
    /// Tick period as a [`Duration`].
    #[inline]
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Total cell count (width * height).
    #[inline]
    pub fn grid_size(&self) -> usize {
        self.width * self.height
    }

    /// Validate configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions);
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::InvalidInterval);
        }
        if !(0.0..=1.0).contains(&self.life_probability) {
            return Err(ConfigError::InvalidProbability);
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("grid dimensions (width, height) must be non-zero")]
    InvalidDimensions,
    #[error("tick interval must be non-zero")]
    InvalidInterval,
    #[error("life probability must be within [0, 1]")]
    InvalidProbability,
}
