//! Business profile entity
//!
//! One profile per user, found by creator identity. Created during
//! onboarding and edited from the profile page; never deleted.

use serde::{Deserialize, Serialize};

use super::record::{Record, empty_as_none, null_as_empty};
use crate::value_objects::{
    AnnualTurnover, AustralianState, BusinessActivity, BusinessStructure, EmailAddress,
    EmployeeCount, IndustrySector, RecordId,
};

/// Street location of the business
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessLocation {
    #[serde(default)]
    pub street_address: String,
    #[serde(default)]
    pub suburb: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub state: Option<AustralianState>,
    #[serde(default)]
    pub postcode: String,
    #[serde(default)]
    pub council: String,
}

/// Structured description of a business
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default)]
    pub business_name: String,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub business_structure: Option<BusinessStructure>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub industry_sector: Option<IndustrySector>,
    #[serde(default)]
    pub location: BusinessLocation,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub employee_count: Option<EmployeeCount>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub annual_turnover: Option<AnnualTurnover>,
    /// Ordered set: no duplicates, insertion order kept
    #[serde(default, deserialize_with = "null_as_empty")]
    pub business_activities: Vec<BusinessActivity>,
    /// Missing on the wire means not completed
    #[serde(default)]
    pub onboarding_completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by: Option<EmailAddress>,
}

impl BusinessProfile {
    /// Check whether the user still has to go through onboarding
    #[must_use]
    pub const fn needs_onboarding(&self) -> bool {
        !self.onboarding_completed
    }

    /// Display name, falling back to a generic phrase when unnamed
    #[must_use]
    pub fn display_name(&self) -> &str {
        let name = self.business_name.trim();
        if name.is_empty() { "my business" } else { name }
    }

    #[must_use]
    pub fn has_activity(&self, activity: BusinessActivity) -> bool {
        self.business_activities.contains(&activity)
    }
}

impl Record for BusinessProfile {
    const ENTITY_NAME: &'static str = "BusinessProfile";

    fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialises_store_record() {
        let json = r#"{
            "id": "bp_1",
            "business_name": "Darwin Auto Repairs",
            "business_structure": "sole_trader",
            "industry_sector": "automotive",
            "location": {"street_address": "123 Stuart Highway", "suburb": "Darwin",
                         "state": "NT", "postcode": "0800", "council": "City of Darwin"},
            "employee_count": "1-4",
            "annual_turnover": "75k_2m",
            "business_activities": ["hazardous_materials", "data_collection"],
            "onboarding_completed": true,
            "created_by": "owner@example.com",
            "created_date": "2025-01-01T00:00:00Z"
        }"#;
        let profile: BusinessProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.id, Some(RecordId::from("bp_1")));
        assert_eq!(profile.location.state, Some(AustralianState::Nt));
        assert_eq!(profile.employee_count, Some(EmployeeCount::OneToFour));
        assert_eq!(profile.business_activities.len(), 2);
        assert!(!profile.needs_onboarding());
    }

    #[test]
    fn missing_completion_flag_means_not_completed() {
        let profile: BusinessProfile =
            serde_json::from_str(r#"{"business_name": "Shop"}"#).unwrap();
        assert!(profile.needs_onboarding());
        assert!(profile.business_activities.is_empty());
    }

    #[test]
    fn empty_selects_are_absent() {
        let json = r#"{"business_structure": "", "location": {"state": ""},
                       "business_activities": null}"#;
        let profile: BusinessProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.business_structure, None);
        assert_eq!(profile.location.state, None);
        assert!(profile.business_activities.is_empty());
    }

    #[test]
    fn display_name_falls_back() {
        let profile = BusinessProfile::default();
        assert_eq!(profile.display_name(), "my business");
    }

    #[test]
    fn serialisation_skips_missing_id() {
        let json = serde_json::to_value(BusinessProfile::default()).unwrap();
        assert!(json.get("id").is_none());
        assert_eq!(json["onboarding_completed"], false);
    }
}
