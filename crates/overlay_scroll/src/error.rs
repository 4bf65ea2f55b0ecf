//! Configuration error types

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a scroll area configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read a config file
    #[error("Failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid TOML for this schema
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A field holds a value the layout cannot use
    #[error("Invalid config value for {field}: {value}")]
    Invalid { field: String, value: f32 },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
