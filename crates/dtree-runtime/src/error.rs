//! Runtime error types

use thiserror::Error;

/// Runtime error
///
/// Evaluation never fails; these errors come only from rendering.
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// Document serialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Rendered output was not valid text
    #[error("Render error: {0}")]
    Render(String),
}

/// Result type for runtime operations
pub type Result<T> = std::result::Result<T, RuntimeError>;
