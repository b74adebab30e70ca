//! Inspect command - summary and nameplate table.

use std::path::Path;

use anyhow::Result;
use snaptwin_config::SnaptwinConfig;

use crate::style::{self, colors::SemanticStyle};

pub fn run(file: &Path, config: &SnaptwinConfig) -> Result<()> {
    let twin = super::load_twin(file, config.simulation.clone())?;
    let shell = twin.shell();

    let simulation = match twin.simulation_seed() {
        Some(seed) => format!("{} = {seed}", twin.simulation().label()),
        None => format!("neutral (no numeric {})", twin.simulation().label()),
    };
    let count = shell.property_count().to_string();

    println!("{}", "Asset".header());
    style::print_info_table(&[
        ("Id", shell.id.as_str()),
        ("Type", shell.asset_type.as_str()),
        ("Properties", &count),
        ("Simulation", &simulation),
    ]);
    println!();

    println!("{}", "Nameplate".header());
    style::print_property_table(&shell.nameplate);

    Ok(())
}
