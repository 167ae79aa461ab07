//! Session port - Access to the authenticated user

use async_trait::async_trait;
use domain::CurrentUser;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the current-user accessor of the hosted store
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SessionPort: Send + Sync {
    /// The signed-in user
    ///
    /// Fails with [`ApplicationError::NotAuthenticated`] without a session.
    async fn me(&self) -> Result<CurrentUser, ApplicationError>;
}
