//! Raw parameter sanitization for settings collaborators.
//!
//! The engine assumes validated input; whatever collects user parameters
//! (a settings panel, CLI flags) is responsible for clamping them first.
//! [`RawParams`] captures the possibly-garbage numeric values and
//! [`RawParams::sanitize`] turns them into a config the engine accepts.

use super::config::SimulationConfig;

/// Unvalidated numeric parameters as a settings collaborator collects them.
/// Signed and wide on purpose: negative and zero values are representable
/// and get clamped, not rejected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawParams {
    pub width: i64,
    pub height: i64,
    pub interval_ms: i64,
    pub life_probability: f64,
}

impl Default for RawParams {
    fn default() -> Self {
        let defaults = SimulationConfig::default();
        Self {
            width: defaults.width as i64,
            height: defaults.height as i64,
            interval_ms: defaults.interval_ms as i64,
            life_probability: defaults.life_probability,
        }
    }
}

impl RawParams {
    /// Clamp into a valid [`SimulationConfig`].
    ///
    /// Width, height and interval are clamped to at least 1; the
    /// probability is clamped into [0, 1], with NaN falling back to the
    /// default. The result always passes `SimulationConfig::validate`.
    pub fn sanitize(&self) -> SimulationConfig {
        let life_probability = if self.life_probability.is_nan() {
            SimulationConfig::default().life_probability
        } else {
            self.life_probability.clamp(0.0, 1.0)
        };

        SimulationConfig {
            width: self.width.max(1) as usize,
            height: self.height.max(1) as usize,
            interval_ms: self.interval_ms.max(1) as u64,
            life_probability,
        }
    }
}
