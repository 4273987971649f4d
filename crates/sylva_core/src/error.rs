//! Error types for sylva_core.
//!
//! The lifecycle engine itself never fails; errors only arise while loading
//! and validating configuration.

use thiserror::Error;

/// Main error type for configuration handling.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing errors
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization errors
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A parameter is out of range
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

impl ConfigError {
    /// Creates a new validation error.
    #[must_use]
    pub fn invalid<S: Into<String>>(msg: S) -> Self {
        Self::Invalid(msg.into())
    }

    /// Creates a new read error for `path`.
    #[must_use]
    pub fn read<S: Into<String>>(path: S, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }
}
