//! Error type definitions

use thiserror::Error;

/// Result type alias for the policy engine
pub type Result<T> = std::result::Result<T, RbacError>;

/// Main error type for the policy engine
#[derive(Error, Debug)]
pub enum RbacError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Policy table violations found at load time
    #[error("Validation error: {0}")]
    Validation(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
