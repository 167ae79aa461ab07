//! Legal update and warning entities (read-only)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::record::{Record, empty_as_none, null_as_empty};
use crate::value_objects::{AustralianState, RecordId, RiskLevel, Urgency};

/// A regulatory change the business should know about
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalUpdate {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub urgency: Urgency,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub effective_date: Option<NaiveDate>,
    #[serde(default)]
    pub action_required: bool,
    /// Raw jurisdiction codes (states or `FEDERAL`)
    #[serde(default, deserialize_with = "null_as_empty")]
    pub affected_jurisdictions: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub affected_industries: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}

impl LegalUpdate {
    /// Check whether the update names the given state
    #[must_use]
    pub fn affects(&self, state: AustralianState) -> bool {
        self.affected_jurisdictions
            .iter()
            .any(|code| code.eq_ignore_ascii_case(state.code()))
    }
}

impl Record for LegalUpdate {
    const ENTITY_NAME: &'static str = "LegalUpdate";

    fn id(&self) -> Option<&RecordId> {
        Some(&self.id)
    }
}

/// A "things to avoid" risk warning
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WarningItem {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub risk_level: RiskLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details_link: Option<String>,
}

impl Record for WarningItem {
    const ENTITY_NAME: &'static str = "WarningItem";

    fn id(&self) -> Option<&RecordId> {
        Some(&self.id)
    }
}
