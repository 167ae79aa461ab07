//! Session context - the signed-in user and their profile, loaded once per page
//!
//! Pages load a [`SessionContext`] up front and hand it to the flows that
//! need it, instead of each flow asking the store who is signed in.

use std::{fmt, sync::Arc};

use domain::{BusinessProfile, CurrentUser};
use tracing::{error, instrument, warn};

use super::profile_service::ProfileService;
use crate::{error::ApplicationError, ports::SessionPort};

/// Where a page load should send the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Landing {
    Onboarding,
    Dashboard,
}

/// Outcome of loading a page's data
#[derive(Debug, Clone, PartialEq)]
pub enum PageState<T> {
    /// No authenticated session
    Unauthenticated,
    /// Loading failed for another reason; the page renders empty
    Empty,
    Ready(T),
}

impl<T> PageState<T> {
    pub const fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }
}

/// Signed-in user plus their business profile, if they have one
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    user: CurrentUser,
    profile: Option<BusinessProfile>,
}

impl SessionContext {
    pub const fn new(user: CurrentUser, profile: Option<BusinessProfile>) -> Self {
        Self { user, profile }
    }

    pub const fn user(&self) -> &CurrentUser {
        &self.user
    }

    pub const fn profile(&self) -> Option<&BusinessProfile> {
        self.profile.as_ref()
    }

    /// No profile yet, or a profile without the completion flag set
    pub fn needs_onboarding(&self) -> bool {
        self.profile
            .as_ref()
            .is_none_or(BusinessProfile::needs_onboarding)
    }

    pub fn landing(&self) -> Landing {
        if self.needs_onboarding() {
            Landing::Onboarding
        } else {
            Landing::Dashboard
        }
    }

    /// Replace the cached profile after it was written
    #[must_use]
    pub fn with_profile(self, profile: BusinessProfile) -> Self {
        Self {
            profile: Some(profile),
            ..self
        }
    }
}

/// Loads the session context from the store
#[derive(Clone)]
pub struct SessionLoader {
    session: Arc<dyn SessionPort>,
    profiles: ProfileService,
}

impl fmt::Debug for SessionLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionLoader")
            .field("profiles", &self.profiles)
            .finish_non_exhaustive()
    }
}

impl SessionLoader {
    pub fn new(session: Arc<dyn SessionPort>, profiles: ProfileService) -> Self {
        Self { session, profiles }
    }

    /// Fetch the current user, then their first profile
    #[instrument(skip(self))]
    pub async fn load(&self) -> Result<SessionContext, ApplicationError> {
        let user = self.session.me().await?;
        let profile = self.profiles.find_for_user(&user.email).await?;
        Ok(SessionContext::new(user, profile))
    }

    /// Load for a page, logging and folding failures into the page state
    pub async fn load_page(&self) -> PageState<SessionContext> {
        match self.load().await {
            Ok(context) => PageState::Ready(context),
            Err(e) if e.is_auth_failure() => {
                warn!(error = %e, "No authenticated session");
                PageState::Unauthenticated
            },
            Err(e) => {
                error!(error = %e, "Failed to load session");
                PageState::Empty
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use domain::{EmailAddress, RecordId};

    use super::*;
    use crate::ports::MockSessionPort;
    use crate::testing::FakeGateway;

    fn owner() -> CurrentUser {
        CurrentUser::new(EmailAddress::new("owner@example.com").unwrap())
    }

    fn loader(session: MockSessionPort, profiles: Vec<BusinessProfile>) -> SessionLoader {
        SessionLoader::new(
            Arc::new(session),
            ProfileService::new(Arc::new(FakeGateway::new(profiles))),
        )
    }

    #[test]
    fn landing_depends_on_completion_flag() {
        let ctx = SessionContext::new(owner(), None);
        assert_eq!(ctx.landing(), Landing::Onboarding);

        let mut profile = BusinessProfile::default();
        let ctx = ctx.with_profile(profile.clone());
        assert_eq!(ctx.landing(), Landing::Onboarding);

        profile.onboarding_completed = true;
        let ctx = ctx.with_profile(profile);
        assert_eq!(ctx.landing(), Landing::Dashboard);
    }

    #[tokio::test]
    async fn load_finds_profile_by_creator() {
        let mut session = MockSessionPort::new();
        session.expect_me().times(1).returning(|| Ok(owner()));
        let profile = BusinessProfile {
            id: Some(RecordId::from("p1")),
            created_by: Some(owner().email),
            onboarding_completed: true,
            ..BusinessProfile::default()
        };

        let ctx = loader(session, vec![profile]).load().await.unwrap();

        assert_eq!(ctx.user().email.as_str(), "owner@example.com");
        assert_eq!(ctx.profile().and_then(|p| p.id.clone()), Some(RecordId::from("p1")));
        assert_eq!(ctx.landing(), Landing::Dashboard);
    }

    #[tokio::test]
    async fn auth_failure_yields_unauthenticated_page() {
        let mut session = MockSessionPort::new();
        session
            .expect_me()
            .returning(|| Err(ApplicationError::NotAuthenticated("no session".into())));

        let state = loader(session, Vec::new()).load_page().await;
        assert_eq!(state, PageState::Unauthenticated);
    }

    #[tokio::test]
    async fn gateway_failure_yields_empty_page() {
        let mut session = MockSessionPort::new();
        session.expect_me().returning(|| Ok(owner()));
        let loader = SessionLoader::new(
            Arc::new(session),
            ProfileService::new(Arc::new(FakeGateway::<BusinessProfile>::failing())),
        );

        assert_eq!(loader.load_page().await, PageState::Empty);
    }
}
