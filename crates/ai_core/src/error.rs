//! Inference errors

use thiserror::Error;

/// Errors that can occur while invoking the assistant
#[derive(Debug, Error)]
pub enum InferenceError {
    /// Failed to connect to the platform
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the platform failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Token missing, expired or rejected
    #[error("Not authenticated: {0}")]
    NotAuthenticated(String),

    /// Response parsing failed
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during inference
    #[error("Inference timed out")]
    Timeout,

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Server error
    #[error("Server error: {0}")]
    ServerError(String),
}

impl From<reqwest::Error> for InferenceError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else if err.is_decode() {
            Self::InvalidResponse(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
