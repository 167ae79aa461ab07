//! Authenticated user as returned by the store's `me()` accessor

use serde::{Deserialize, Serialize};

use crate::value_objects::EmailAddress;

/// Current user of the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub email: EmailAddress,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
}

impl CurrentUser {
    #[must_use]
    pub const fn new(email: EmailAddress) -> Self {
        Self {
            email,
            full_name: None,
        }
    }

    /// Name to greet the user with
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        self.full_name
            .as_deref()
            .and_then(|n| n.split_whitespace().next())
            .unwrap_or_else(|| self.email.local_part())
    }
}
