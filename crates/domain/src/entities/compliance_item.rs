//! Compliance item (task) entity

use serde::{Deserialize, Serialize};

use super::record::{Record, null_as_empty};
use crate::value_objects::{
    AustralianState, ComplianceCategory, Jurisdiction, Priority, RecordId, StateScope, TaskStatus,
};

/// Registration guide used for ABN tasks that carry no link of their own
pub const ABN_APPLICATION_URL: &str =
    "https://www.abr.gov.au/business-super-funds-charities/applying-abn";

/// A regulatory obligation the business has to meet
///
/// Read-mostly: `status` is the only field changed from the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplianceItem {
    pub id: RecordId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: ComplianceCategory,
    #[serde(default)]
    pub jurisdiction: Jurisdiction,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub applicable_states: Vec<StateScope>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost_estimate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
}

impl ComplianceItem {
    /// Create a pending item with default classification
    pub fn new(id: impl Into<RecordId>, title: impl Into<String>, priority: Priority) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            status: TaskStatus::Pending,
            priority,
            category: ComplianceCategory::default(),
            jurisdiction: Jurisdiction::Federal,
            applicable_states: vec![StateScope::All],
            cost_estimate: None,
            external_link: None,
        }
    }

    /// Builder-style status setter
    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.status.is_completed()
    }

    #[must_use]
    pub fn is_critical(&self) -> bool {
        self.priority == Priority::Critical
    }

    /// Check whether the item applies in the given state
    #[must_use]
    pub fn applies_in(&self, state: AustralianState) -> bool {
        self.applicable_states.iter().any(|s| s.covers(state))
    }

    /// Link to follow for this item
    ///
    /// ABN registration items always point at the official application guide.
    #[must_use]
    pub fn resolved_link(&self) -> Option<&str> {
        if self.title.contains("ABN") {
            return Some(ABN_APPLICATION_URL);
        }
        self.external_link.as_deref()
    }
}

impl Record for ComplianceItem {
    const ENTITY_NAME: &'static str = "ComplianceItem";

    fn id(&self) -> Option<&RecordId> {
        Some(&self.id)
    }
}
