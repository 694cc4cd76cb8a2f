//! Error types for the Wikimedia client.

use thiserror::Error;

/// Result type for Wikimedia client operations.
pub type Result<T> = std::result::Result<T, WikiError>;

/// Wikimedia client errors.
#[derive(Debug, Error)]
pub enum WikiError {
    /// Configuration error (invalid endpoint, bad settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response)
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Parse error (invalid JSON, unexpected response shape)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl WikiError {
    /// Build an API error from a response status and body text.
    pub(crate) fn api(status: u16, message: impl Into<String>) -> Self {
        WikiError::Api {
            status,
            message: message.into(),
        }
    }
}
