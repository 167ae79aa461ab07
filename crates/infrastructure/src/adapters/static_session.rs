//! Static session - a fixed signed-in user, for demo mode and tests

use application::{ApplicationError, ports::SessionPort};
use async_trait::async_trait;
use domain::CurrentUser;

/// Session that always returns the same user, or none
#[derive(Debug, Clone)]
pub struct StaticSession {
    user: Option<CurrentUser>,
}

impl StaticSession {
    pub const fn signed_in(user: CurrentUser) -> Self {
        Self { user: Some(user) }
    }

    pub const fn signed_out() -> Self {
        Self { user: None }
    }
}

#[async_trait]
impl SessionPort for StaticSession {
    async fn me(&self) -> Result<CurrentUser, ApplicationError> {
        self.user
            .clone()
            .ok_or_else(|| ApplicationError::NotAuthenticated("No active session".to_string()))
    }
}
