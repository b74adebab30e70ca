//! Property query commands.

use std::path::Path;

use anyhow::Result;
use snaptwin_config::SnaptwinConfig;

/// Prints one property as `value unit`.
pub fn run(file: &Path, name: &str, config: &SnaptwinConfig) -> Result<()> {
    let twin = super::load_twin(file, config.simulation.clone())?;

    match twin.get_property(name) {
        Ok(rendered) => {
            println!("{rendered}");
            Ok(())
        }
        Err(not_found) => Err(not_found.into()),
    }
}

/// Prints property names, one per line, in nameplate order.
pub fn list(file: &Path, config: &SnaptwinConfig) -> Result<()> {
    let twin = super::load_twin(file, config.simulation.clone())?;

    for name in twin.list_properties() {
        println!("{name}");
    }

    Ok(())
}
