//! Runtime error types

use thiserror::Error;

/// Runtime error
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// A sink rejected a batch
    #[error("Sink error [{plugin}]: {message}")]
    Sink { plugin: String, message: String },

    /// No sink registered under the plugin name
    #[error("Metrics plugin not found: {0}")]
    PluginNotFound(String),

    /// Record serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] beacon_core::CoreError),
}

impl RuntimeError {
    pub fn sink(plugin: impl Into<String>, message: impl Into<String>) -> Self {
        RuntimeError::Sink {
            plugin: plugin.into(),
            message: message.into(),
        }
    }
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
