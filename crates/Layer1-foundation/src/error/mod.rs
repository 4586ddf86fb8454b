//! Error types for vmagent
//!
//! Shared error taxonomy for every layer above the foundation.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// vmagent error type
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // Tasks
    // ========================================================================
    #[error("Task error: {0}")]
    Task(String),

    #[error("Id generation failed: {0}")]
    IdGeneration(String),

    // ========================================================================
    // Conversions from external errors
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Helper for task-layer errors
    pub fn task(message: impl Into<String>) -> Self {
        Error::Task(message.into())
    }
}
