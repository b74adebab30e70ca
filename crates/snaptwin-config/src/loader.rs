//! Configuration loader with multi-source merging

use crate::{ConfigError, Paths, SnaptwinConfig};
use anyhow::{Context, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    project_dir: PathBuf,
    env_prefix: String,
    user_config: bool,
}

impl ConfigLoader {
    /// Create a new config loader with default project directory (current dir)
    pub fn new() -> Self {
        Self {
            project_dir: env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            env_prefix: "SNAPTWIN".to_string(),
            user_config: true,
        }
    }

    /// Set the project directory
    pub fn with_project_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.project_dir = dir.as_ref().to_path_buf();
        self
    }

    /// Skip ~/.config/snaptwin/config.toml
    pub fn without_user_config(mut self) -> Self {
        self.user_config = false;
        self
    }

    /// Load configuration from all sources with proper precedence
    pub fn load(self) -> Result<SnaptwinConfig> {
        let mut builder = config::Config::builder();

        // 1. Start with built-in defaults
        let defaults = SnaptwinConfig::default();
        builder = builder.add_source(config::Config::try_from(&defaults)?);

        // 2. User config (~/.config/snaptwin/config.toml)
        if self.user_config {
            if let Ok(user_config_file) = Paths::new().user_config_file() {
                if user_config_file.exists() {
                    builder = builder.add_source(toml_source(user_config_file)?);
                }
            }
        }

        // 3. Project config (snaptwin.toml)
        let project_config_file = Paths::project_config_file(&self.project_dir);
        if project_config_file.exists() {
            builder = builder.add_source(toml_source(project_config_file)?);
        }

        // 4. Local config (snaptwin.local.toml, gitignored)
        let local_config_file = Paths::local_config_file(&self.project_dir);
        if local_config_file.exists() {
            builder = builder.add_source(toml_source(local_config_file)?);
        }

        // 5. Environment variables (SNAPTWIN_SIMULATION__AMPLITUDE=0.05)
        builder = builder.add_source(
            config::Environment::with_prefix(&self.env_prefix)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        // Build and deserialize
        let config = builder.build().context("Failed to build configuration")?;

        let snaptwin_config: SnaptwinConfig = config
            .try_deserialize()
            .context("Failed to deserialize configuration")?;

        snaptwin_config.validate()?;

        Ok(snaptwin_config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads and parses a TOML file up front so failures name the file.
fn toml_source(
    path: PathBuf,
) -> Result<config::File<config::FileSourceFile, config::FileFormat>, ConfigError> {
    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
        path: path.clone(),
        source,
    })?;

    if let Err(source) = text.parse::<toml::Table>() {
        return Err(ConfigError::ParseError { path, source });
    }

    Ok(config::File::from(path)
        .required(false)
        .format(config::FileFormat::Toml))
}
