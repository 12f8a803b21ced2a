use serde::Deserialize;

use crate::error::SimError;

// ---------------------------------------------------------------------------
// Simulation configuration
// ---------------------------------------------------------------------------

/// Initial conditions and run length.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    pub x0: f64,              // rad, inner rod
    pub y0: f64,              // rad, outer rod
    pub x_dot0: f64,          // rad/s
    pub y_dot0: f64,          // rad/s
    pub dt: f64,              // integration timestep
    pub steps: usize,
    pub drift_tolerance: f64, // relative energy drift per unit time
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            x0: 1.5,
            y0: 2.25,
            x_dot0: 0.0,
            y_dot0: 0.0,
            dt: 0.005,
            steps: 6280 * 3,    // ~94 time units, about 15 small-swing periods
            drift_tolerance: 1e-3,
        }
    }
}

impl SimConfig {
    /// Simulated time covered by the configured run.
    pub fn duration(&self) -> f64 {
        self.steps as f64 * self.dt
    }
}

/// Parse a config from TOML text.
pub fn from_str(text: &str) -> Result<SimConfig, SimError> {
    Ok(toml::from_str(text)?)
}

/// Load a config file.
pub fn load<P: AsRef<std::path::Path>>(filename: P) -> Result<SimConfig, SimError> {
    let buffer = std::fs::read_to_string(filename.as_ref())?;
    from_str(&buffer)
}
