//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Unknown configuration key.
    #[error("Unknown configuration key: {0}. Run `wellsriley config list` for valid keys.")]
    UnknownConfigKey(String),

    /// Configuration value out of range or malformed.
    #[error("Invalid value '{value}' for {key}: expected {expected}")]
    InvalidConfigValue {
        /// Configuration key.
        key: String,
        /// Rejected value.
        value: String,
        /// Accepted values.
        expected: &'static str,
    },

    /// Configuration file could not be located.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
