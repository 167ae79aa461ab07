//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// No authenticated session, or the session was rejected
    #[error("Not authenticated: {0}")]
    NotAuthenticated(String),

    /// Entity store read or write failed
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// Assistant invocation failed
    #[error("Inference error: {0}")]
    Inference(String),

    /// Requested record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if this error means the user has to sign in again
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::NotAuthenticated(_))
    }
}
