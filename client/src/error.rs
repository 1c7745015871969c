//! Client error types

use thiserror::Error;

/// Errors returned by [`crate::ApiClient`] and the token stores
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server rejected the credentials or the stored token (HTTP 401)
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Any other non-success answer from the API
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Session storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ClientError::Unauthorized { .. })
    }
}
