//! Error types for loading role bindings
//!
//! Resolution itself never fails; only reading and parsing the host
//! configuration can.

use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The configuration document is not valid YAML for the settings model
    #[error("Invalid configuration: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

impl ConfigError {
    /// Get error code for diagnostics.
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_IO",
            ConfigError::Parse(_) => "CONFIG_PARSE",
        }
    }
}
