//! CLI command implementations.

pub mod config;
pub mod export;
pub mod get;
pub mod inspect;
pub mod simulate;
pub mod validate;
pub mod version;

use std::path::Path;

use anyhow::{Context, Result};
use snaptwin_kernel::{DigitalTwin, SimulationConfig};

/// Reads a document from disk. The kernel never touches the filesystem.
pub fn read_document(file: &Path) -> Result<String> {
    std::fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))
}

/// Reads and loads a twin, reporting rejected documents as load failures.
pub fn load_twin(file: &Path, simulation: SimulationConfig) -> Result<DigitalTwin> {
    let document = read_document(file)?;
    tracing::debug!(file = %file.display(), bytes = document.len(), "loading twin");
    DigitalTwin::with_simulation(&document, simulation)
        .with_context(|| format!("could not load this configuration ({})", file.display()))
}
