//! Error handling for katexify
//!
//! The rendering pipeline itself never fails; errors come from the edges
//! (file and stream I/O, JSON, bad arguments).

use thiserror::Error;

/// Result type for katexify operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for everything outside the pure pipeline
#[derive(Error, Debug)]
pub enum Error {
    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report or options (de)serialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid caller-supplied input
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl Error {
    pub fn invalid(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }
}
