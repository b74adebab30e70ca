//! Configuration management commands.

use anyhow::Result;
use snaptwin_config::SnaptwinConfig;

/// Show the effective configuration.
pub fn show(config: &SnaptwinConfig, format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
        "toml" => {
            println!("{}", toml::to_string_pretty(config)?);
        }
        "text" => {
            println!("snaptwin Configuration");
            println!("======================\n");

            println!("Simulation:");
            println!(
                "  Driving property: {}",
                config.simulation.driving_property
            );
            println!("  Amplitude: {}", config.simulation.amplitude);
            println!("  Noise seed: {}", config.simulation.noise_seed);
            println!();

            println!("Output:");
            println!("  Color: {}", config.output.color);
            println!("  Export format: {:?}", config.output.export_format);
        }
        other => anyhow::bail!("unknown format '{other}' (expected text, json or toml)"),
    }

    Ok(())
}
