//! Error types for the ClickUp plugin
//!
//! Transport failures are surfaced as-is to the caller; nothing here retries.

use thiserror::Error;

/// Result type alias for ClickUp operations
pub type Result<T> = std::result::Result<T, ClickUpError>;

/// ClickUp plugin error types
#[derive(Debug, Error)]
pub enum ClickUpError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Missing required setting
    #[error("Missing required setting: {0}")]
    MissingSetting(String),

    /// Invalid action input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Token rejected by ClickUp
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Rate limited by the ClickUp API
    #[error("Rate limited by ClickUp API, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds until the rate limit window resets
        retry_after_secs: u64,
    },

    /// Non-success response from ClickUp
    #[error("ClickUp API error ({status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Network error
    #[error("Network error: {0}")]
    Network(String),

    /// Request timed out
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ClickUpError {
    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Whether a caller could reasonably try the request again.
    ///
    /// The plugin itself never acts on this.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClickUpError::RateLimited { .. } | ClickUpError::Network(_) | ClickUpError::Timeout(_) => {
                true
            }
            ClickUpError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }
}

impl From<serde_json::Error> for ClickUpError {
    fn from(err: serde_json::Error) -> Self {
        ClickUpError::Serialization(err.to_string())
    }
}

impl From<reqwest::Error> for ClickUpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClickUpError::Timeout(err.to_string())
        } else if err.is_decode() {
            ClickUpError::Serialization(err.to_string())
        } else {
            ClickUpError::Network(err.to_string())
        }
    }
}
