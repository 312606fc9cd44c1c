//! Error types for ganttgen

use thiserror::Error;

/// Result type alias for ganttgen operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for ganttgen operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Schedule validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Chart rendering error
    #[error("Render error: {0}")]
    Render(String),
}
