//! Configuration error types

use std::path::PathBuf;
use thiserror::Error;

/// Reasons a host configuration cannot be assembled.
///
/// File errors carry the offending path so a user can tell which layer
/// (user, project or local) is broken.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read snaptwin config {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("snaptwin config {path} is not valid TOML: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid snaptwin config: {0}")]
    ValidationError(String),

    #[error("cannot locate the user config directory: {0}")]
    XdgError(String),
}
