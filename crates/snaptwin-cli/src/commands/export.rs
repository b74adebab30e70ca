//! Export command - re-render the loaded document.

use std::path::Path;

use anyhow::{Context, Result};
use snaptwin_config::{ExportFormat, SnaptwinConfig};

use crate::style::{self, colors::SemanticStyle};

pub fn run(
    file: &Path,
    compact: bool,
    output: Option<&Path>,
    config: &SnaptwinConfig,
) -> Result<()> {
    let twin = super::load_twin(file, config.simulation.clone())?;

    let json = if compact || config.output.export_format == ExportFormat::Compact {
        twin.get_aas_json_compact()
    } else {
        twin.get_aas_json()
    };

    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write {}", path.display()))?;
            style::print_success(&format!(
                "Exported {} to {}",
                twin.get_id(),
                path.display().to_string().code()
            ));
        }
        None => println!("{json}"),
    }

    Ok(())
}
