//! Validate command - pre-flight check of a document.

use std::path::Path;

use anyhow::Result;

use crate::style::{self, colors::SemanticStyle};

pub fn run(file: &Path) -> Result<()> {
    let document = super::read_document(file)?;

    match snaptwin_kernel::parse(&document) {
        Ok(shell) => {
            style::print_success(&format!(
                "{} is valid ({} {}, {} properties)",
                file.display().to_string().code(),
                shell.id,
                shell.asset_type,
                shell.property_count()
            ));
            Ok(())
        }
        Err(e) => {
            style::print_error(&format!("{} is invalid", file.display()));
            anyhow::bail!("could not load this configuration: {e}")
        }
    }
}
