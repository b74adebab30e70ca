//! snaptwin command-line host.
//!
//! Loads an AAS nameplate document from disk and drives a digital twin.
//!
//! # Quick Start
//!
//! ```bash
//! # Check a generated document before using it
//! snaptwin validate twin_config.json
//!
//! # Look around
//! snaptwin inspect twin_config.json
//! snaptwin get twin_config.json Voltage
//!
//! # Run the live telemetry simulation
//! snaptwin simulate twin_config.json --ticks 20 --reset
//! ```

mod commands;
mod style;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use snaptwin_config::{ConfigLoader, SnaptwinConfig};

/// snaptwin - executable digital twins from machine nameplates.
#[derive(Parser)]
#[command(name = "snaptwin")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Disable colored output.
    #[arg(long, global = true)]
    no_color: bool,

    /// Directory searched for snaptwin.toml and snaptwin.local.toml.
    #[arg(long, global = true, default_value = ".")]
    project: PathBuf,

    /// Ignore ~/.config/snaptwin/config.toml.
    #[arg(long, global = true)]
    no_user_config: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show version information.
    Version,

    /// Check whether a document would load, without loading it.
    Validate {
        /// Path to the AAS JSON document.
        file: PathBuf,
    },

    /// Show the asset summary and every nameplate property.
    Inspect {
        /// Path to the AAS JSON document.
        file: PathBuf,
    },

    /// Print one nameplate property.
    Get {
        /// Path to the AAS JSON document.
        file: PathBuf,

        /// Property name (id_short), case-sensitive.
        name: String,
    },

    /// List nameplate property names in document order.
    List {
        /// Path to the AAS JSON document.
        file: PathBuf,
    },

    /// Re-render the loaded document as AAS JSON.
    Export {
        /// Path to the AAS JSON document.
        file: PathBuf,

        /// Single-line output instead of pretty-printed.
        #[arg(long)]
        compact: bool,

        /// Write to this file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Step the live telemetry simulation.
    Simulate {
        /// Path to the AAS JSON document.
        file: PathBuf,

        /// Number of ticks to run.
        #[arg(short, long, default_value = "10")]
        ticks: u64,

        /// Noise seed (overrides config).
        #[arg(short, long)]
        seed: Option<u64>,

        /// Band half-width as a fraction of the seed value (overrides config).
        #[arg(short, long)]
        amplitude: Option<f64>,

        /// Nameplate property driving the simulation (overrides config).
        #[arg(short, long)]
        property: Option<String>,

        /// Reset the simulation after the last tick.
        #[arg(long)]
        reset: bool,
    },

    /// Configuration commands.
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Show the effective configuration.
    Show {
        /// Output format (text, json, toml).
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so command output stays pipeable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    style::set_no_color(cli.no_color);

    let mut loader = ConfigLoader::new().with_project_dir(&cli.project);
    if cli.no_user_config {
        loader = loader.without_user_config();
    }

    run(cli.command, loader)
}

/// Loads the layered configuration. Only commands that read settings call
/// this, so a broken snaptwin.toml never blocks `version` or `validate`.
fn load_config(loader: ConfigLoader) -> Result<SnaptwinConfig> {
    let config = loader.load()?;
    if !config.output.color {
        style::set_no_color(true);
    }
    Ok(config)
}

fn run(command: Commands, loader: ConfigLoader) -> Result<()> {
    match command {
        Commands::Version => {
            commands::version::run();
            Ok(())
        }
        Commands::Validate { file } => commands::validate::run(&file),
        Commands::Inspect { file } => commands::inspect::run(&file, &load_config(loader)?),
        Commands::Get { file, name } => {
            commands::get::run(&file, &name, &load_config(loader)?)
        }
        Commands::List { file } => commands::get::list(&file, &load_config(loader)?),
        Commands::Export {
            file,
            compact,
            output,
        } => commands::export::run(&file, compact, output.as_deref(), &load_config(loader)?),
        Commands::Simulate {
            file,
            ticks,
            seed,
            amplitude,
            property,
            reset,
        } => {
            let overrides = commands::simulate::Overrides {
                seed,
                amplitude,
                property,
            };
            commands::simulate::run(&file, ticks, reset, overrides, &load_config(loader)?)
        }
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show { format } => {
                commands::config::show(&load_config(loader)?, &format)
            }
        },
    }
}
