//! Client error types

use shared::ValidationError;
use thiserror::Error;

/// Client error type
///
/// Cancellation never shows up here: a cancelled call resolves to its
/// fallback value instead.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure (connect, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Body was not a JSON envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// `error` field reported by the backend, whatever the status code
    #[error("{0}")]
    Api(String),

    /// Rules checked before any request was sent
    #[error("{0}")]
    Validation(#[from] ValidationError),

    /// `data` did not decode into the expected type
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// Human-readable message for display
    pub fn message(&self) -> String {
        self.to_string()
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
