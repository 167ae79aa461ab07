//! Profile service - Finding, creating and editing a user's business profile

use std::{fmt, sync::Arc};

use domain::{BusinessProfile, CurrentUser, EmailAddress, RecordId};
use tracing::{debug, instrument};

use crate::{
    error::ApplicationError,
    ports::{EntityGatewayPort, FilterPredicate, RecordPatch},
};

/// Service for the single business profile owned by a user
#[derive(Clone)]
pub struct ProfileService {
    gateway: Arc<dyn EntityGatewayPort<BusinessProfile>>,
}

impl fmt::Debug for ProfileService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProfileService").finish_non_exhaustive()
    }
}

impl ProfileService {
    pub fn new(gateway: Arc<dyn EntityGatewayPort<BusinessProfile>>) -> Self {
        Self { gateway }
    }

    /// First profile created by the user, if any
    #[instrument(skip(self), fields(user = %email))]
    pub async fn find_for_user(
        &self,
        email: &EmailAddress,
    ) -> Result<Option<BusinessProfile>, ApplicationError> {
        let profiles = self
            .gateway
            .filter(&FilterPredicate::created_by(email))
            .await?;
        if profiles.len() > 1 {
            debug!(count = profiles.len(), "User owns several profiles, using the first");
        }
        Ok(profiles.into_iter().next())
    }

    /// Write the profile as the user's one profile
    ///
    /// Updates `known` when given. Otherwise the store is searched by creator
    /// right before writing, so a profile created elsewhere in the meantime
    /// is updated instead of duplicated.
    #[instrument(skip(self, user, profile), fields(user = %user.email))]
    pub async fn upsert_for_user(
        &self,
        user: &CurrentUser,
        known: Option<&RecordId>,
        profile: &BusinessProfile,
    ) -> Result<BusinessProfile, ApplicationError> {
        let target = match known {
            Some(id) => Some(id.clone()),
            None => self
                .find_for_user(&user.email)
                .await?
                .and_then(|existing| existing.id),
        };

        let patch = RecordPatch::from_record(profile)?;

        match target {
            Some(id) => {
                debug!(%id, "Updating existing profile");
                self.gateway.update(&id, &patch).await
            },
            None => {
                debug!("Creating profile");
                self.gateway.create(&patch).await
            },
        }
    }

    /// Save an edited profile wholesale
    #[instrument(skip(self, profile))]
    pub async fn save(&self, profile: &BusinessProfile) -> Result<BusinessProfile, ApplicationError> {
        let id = require_id(profile)?;
        let patch = RecordPatch::from_record(profile)?;
        self.gateway.update(id, &patch).await
    }

    /// Send the user back through onboarding on their next visit
    #[instrument(skip(self, profile))]
    pub async fn reset_onboarding(
        &self,
        profile: &BusinessProfile,
    ) -> Result<BusinessProfile, ApplicationError> {
        let id = require_id(profile)?;
        let patch = RecordPatch::new().set("onboarding_completed", false);
        self.gateway.update(id, &patch).await
    }
}

fn require_id(profile: &BusinessProfile) -> Result<&RecordId, ApplicationError> {
    profile
        .id
        .as_ref()
        .ok_or_else(|| ApplicationError::NotFound("business profile has not been saved".into()))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::FakeGateway;

    fn user(email: &str) -> CurrentUser {
        CurrentUser::new(EmailAddress::new(email).unwrap())
    }

    fn stored(id: &str, owner: &str, name: &str) -> BusinessProfile {
        BusinessProfile {
            id: Some(RecordId::from(id)),
            business_name: name.to_string(),
            created_by: Some(EmailAddress::new(owner).unwrap()),
            ..BusinessProfile::default()
        }
    }

    #[tokio::test]
    async fn find_returns_first_match_for_creator() {
        let gateway = Arc::new(FakeGateway::new(vec![
            stored("a", "other@example.com", "Other"),
            stored("b", "owner@example.com", "First"),
            stored("c", "owner@example.com", "Second"),
        ]));
        let service = ProfileService::new(gateway);

        let found = service
            .find_for_user(&EmailAddress::new("owner@example.com").unwrap())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.business_name, "First");
    }

    #[tokio::test]
    async fn find_matches_creator_case_exactly() {
        let gateway = Arc::new(FakeGateway::new(vec![stored(
            "p1",
            "Olive.Owner@Example.com",
            "Olive's Bakery",
        )]));
        let service = ProfileService::new(gateway.clone());
        let olive = user("Olive.Owner@Example.com");

        let found = service.find_for_user(&olive.email).await.unwrap();
        assert_eq!(found.and_then(|p| p.id), Some(RecordId::from("p1")));

        let saved = service
            .upsert_for_user(&olive, None, &BusinessProfile::default())
            .await
            .unwrap();
        assert_eq!(saved.id, Some(RecordId::from("p1")));
        assert!(gateway.creates().is_empty());
        assert_eq!(gateway.records().len(), 1);
    }

    #[tokio::test]
    async fn upsert_creates_when_user_has_no_profile() {
        let gateway = Arc::new(FakeGateway::new(Vec::new()));
        let service = ProfileService::new(gateway.clone());

        let profile = BusinessProfile {
            business_name: "New Shop".to_string(),
            ..BusinessProfile::default()
        };
        let saved = service
            .upsert_for_user(&user("owner@example.com"), None, &profile)
            .await
            .unwrap();

        assert!(saved.id.is_some());
        assert_eq!(gateway.creates().len(), 1);
        assert!(gateway.creates()[0].get("created_by").is_none());
    }

    #[tokio::test]
    async fn upsert_rereads_before_creating() {
        let gateway = Arc::new(FakeGateway::new(vec![stored(
            "existing",
            "owner@example.com",
            "Old",
        )]));
        let service = ProfileService::new(gateway.clone());

        let profile = BusinessProfile {
            business_name: "Renamed".to_string(),
            ..BusinessProfile::default()
        };
        let saved = service
            .upsert_for_user(&user("owner@example.com"), None, &profile)
            .await
            .unwrap();

        assert_eq!(saved.id, Some(RecordId::from("existing")));
        assert!(gateway.creates().is_empty());
        assert_eq!(gateway.records().len(), 1);
        assert_eq!(gateway.records()[0].business_name, "Renamed");
    }

    #[tokio::test]
    async fn reset_sends_only_the_flag() {
        let mut profile = stored("p1", "owner@example.com", "Shop");
        profile.onboarding_completed = true;
        let gateway = Arc::new(FakeGateway::new(vec![profile.clone()]));
        let service = ProfileService::new(gateway.clone());

        let reset = service.reset_onboarding(&profile).await.unwrap();

        assert!(!reset.onboarding_completed);
        assert_eq!(reset.business_name, "Shop");
        let (id, patch) = &gateway.updates()[0];
        assert_eq!(id.as_str(), "p1");
        assert_eq!(patch.clone().into_value(), json!({"onboarding_completed": false}));
    }

    #[tokio::test]
    async fn save_requires_persisted_profile() {
        let service = ProfileService::new(Arc::new(FakeGateway::new(Vec::new())));
        let result = service.save(&BusinessProfile::default()).await;
        assert!(matches!(result, Err(ApplicationError::NotFound(_))));
    }
}
