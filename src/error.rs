//! Error types for VyuhaMaze

use thiserror::Error;

/// VyuhaMaze error type
#[derive(Error, Debug)]
pub enum VyuhaError {
    /// Invalid or unparseable configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, VyuhaError>;

impl From<toml::de::Error> for VyuhaError {
    fn from(e: toml::de::Error) -> Self {
        VyuhaError::Config(e.to_string())
    }
}
