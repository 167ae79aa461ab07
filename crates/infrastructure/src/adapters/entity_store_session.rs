//! Entity store session - Implements SessionPort with the `User/me` accessor

use std::{fmt, sync::Arc};

use application::{ApplicationError, ports::SessionPort};
use async_trait::async_trait;
use domain::{CurrentUser, EmailAddress};
use integration_entity_store::EntityStoreClient;
use tracing::instrument;

use super::map_store_error;

/// Session backed by the platform's current-user endpoint
#[derive(Clone)]
pub struct EntityStoreSession {
    client: Arc<dyn EntityStoreClient>,
}

impl fmt::Debug for EntityStoreSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityStoreSession").finish_non_exhaustive()
    }
}

impl EntityStoreSession {
    pub fn new(client: Arc<dyn EntityStoreClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SessionPort for EntityStoreSession {
    #[instrument(skip(self))]
    async fn me(&self) -> Result<CurrentUser, ApplicationError> {
        let user = self.client.me().await.map_err(map_store_error)?;
        let email = EmailAddress::new(&user.email).map_err(|e| {
            ApplicationError::NotAuthenticated(format!("Session user has no usable email: {e}"))
        })?;
        Ok(CurrentUser {
            email,
            full_name: user.full_name,
        })
    }
}
