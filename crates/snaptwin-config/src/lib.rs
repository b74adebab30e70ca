//! Configuration management for snaptwin hosts
//!
//! The kernel itself never reads files. Hosts such as the `snaptwin` CLI use
//! this crate to assemble simulation and output settings from, in order of
//! precedence:
//! 1. CLI arguments (highest precedence, applied by the host)
//! 2. Environment variables (`SNAPTWIN_*` prefix, `__` between levels)
//! 3. snaptwin.local.toml (gitignored, local overrides)
//! 4. snaptwin.toml (project config)
//! 5. ~/.config/snaptwin/config.toml (user defaults)
//! 6. Built-in defaults (lowest precedence)

use serde::{Deserialize, Serialize};
use snaptwin_kernel::SimulationConfig;

mod error;
mod loader;
mod paths;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use paths::Paths;

/// Main snaptwin host configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnaptwinConfig {
    pub simulation: SimulationConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub color: bool,
    pub export_format: ExportFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: true,
            export_format: ExportFormat::Pretty,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ExportFormat {
    Pretty,
    Compact,
}

impl SnaptwinConfig {
    /// Checks values the type system cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let sim = &self.simulation;

        if sim.driving_property.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "simulation.driving_property must not be empty".to_string(),
            ));
        }

        if !sim.amplitude.is_finite() || !(0.0..=1.0).contains(&sim.amplitude) {
            return Err(ConfigError::ValidationError(format!(
                "simulation.amplitude must be between 0 and 1, got {}",
                sim.amplitude
            )));
        }

        Ok(())
    }
}
