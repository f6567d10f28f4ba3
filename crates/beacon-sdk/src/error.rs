//! SDK error types

use thiserror::Error;

/// SDK error type
#[derive(Error, Debug)]
pub enum SdkError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// A required collaborator was not supplied to the builder
    #[error("Missing component: {0}")]
    MissingComponent(&'static str),

    /// Runtime error, including sink dispatch failures
    #[error("Runtime error: {0}")]
    RuntimeError(#[from] beacon_runtime::RuntimeError),

    /// Core error
    #[error("Core error: {0}")]
    CoreError(#[from] beacon_core::CoreError),
}

/// Result type for SDK operations
pub type Result<T> = std::result::Result<T, SdkError>;
