//! Settings errors

use thiserror::Error;

pub type Result<T> = std::result::Result<T, SettingsError>;

#[derive(Error, Debug)]
pub enum SettingsError {
    /// The backend could not read or write the stored value
    #[error("settings backend error: {message}")]
    Backend { message: String },

    /// A stored value could not be encoded or decoded as JSON
    #[error("settings encoding error: {0}")]
    Encode(#[from] serde_json::Error),

    /// A feedback payload without a question or a boolean `liked`
    #[error("invalid feedback payload")]
    InvalidPayload,
}

impl SettingsError {
    pub fn backend(message: impl Into<String>) -> Self {
        SettingsError::Backend {
            message: message.into(),
        }
    }
}
