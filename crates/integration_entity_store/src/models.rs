//! Wire models for the entity API

use serde::{Deserialize, Serialize};

/// The signed-in user as returned by `entities/User/me`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub email: String,
    #[serde(default)]
    pub full_name: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}
