//! Simulate command - step the live telemetry simulation.

use std::path::Path;

use anyhow::Result;
use snaptwin_config::SnaptwinConfig;
use snaptwin_kernel::{SimulationConfig, format_value};

use crate::style::{self, colors::SemanticStyle};

/// Command-line values that take precedence over the loaded config.
#[derive(Debug, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub amplitude: Option<f64>,
    pub property: Option<String>,
}

impl Overrides {
    fn apply(self, mut simulation: SimulationConfig) -> Result<SimulationConfig> {
        if let Some(seed) = self.seed {
            simulation.noise_seed = seed;
        }
        if let Some(amplitude) = self.amplitude {
            if !amplitude.is_finite() || !(0.0..=1.0).contains(&amplitude) {
                anyhow::bail!("--amplitude must be between 0 and 1, got {amplitude}");
            }
            simulation.amplitude = amplitude;
        }
        if let Some(property) = self.property {
            simulation.driving_property = property;
        }
        Ok(simulation)
    }
}

pub fn run(
    file: &Path,
    ticks: u64,
    reset: bool,
    overrides: Overrides,
    config: &SnaptwinConfig,
) -> Result<()> {
    let simulation = overrides.apply(config.simulation.clone())?;
    let mut twin = super::load_twin(file, simulation)?;

    if twin.simulation().is_neutral() {
        style::print_warn(&format!(
            "{} has no numeric {} property, readings are neutral",
            twin.get_id(),
            twin.simulation().label()
        ));
    }

    for _ in 0..ticks {
        println!("{}", twin.tick_simulation().info());
    }

    if let Some((low, high)) = twin.simulation().bounds() {
        println!(
            "{}",
            format!(
                "{ticks} ticks, band [{}, {}]",
                format_value(low),
                format_value(high)
            )
            .muted()
        );
    }

    if reset {
        twin.reset_simulation();
        style::print_success(&format!(
            "Simulation reset to {} (tick: {})",
            format_value(twin.simulation_value()),
            twin.tick_count()
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_config_values() {
        let overrides = Overrides {
            seed: Some(9),
            amplitude: Some(0.5),
            property: Some("Speed".to_string()),
        };
        let sim = overrides.apply(SimulationConfig::default()).unwrap();
        assert_eq!(sim.noise_seed, 9);
        assert!((sim.amplitude - 0.5).abs() < f64::EPSILON);
        assert_eq!(sim.driving_property, "Speed");
    }

    #[test]
    fn empty_overrides_keep_config() {
        let sim = Overrides::default()
            .apply(SimulationConfig::default())
            .unwrap();
        assert_eq!(sim, SimulationConfig::default());
    }

    #[test]
    fn out_of_range_amplitude_rejected() {
        let overrides = Overrides {
            amplitude: Some(2.0),
            ..Default::default()
        };
        assert!(overrides.apply(SimulationConfig::default()).is_err());
    }
}
