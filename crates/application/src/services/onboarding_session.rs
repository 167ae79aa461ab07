//! Onboarding session - drives the onboarding form and commits the profile

use domain::{
    BusinessActivity, BusinessProfile, DomainError, FieldSuggestion, OnboardingForm,
    OnboardingStep, Suburb, Transition,
};
use tracing::{error, info, instrument};

use super::{profile_service::ProfileService, session::SessionContext};
use crate::error::ApplicationError;

/// Result of pressing "Next"
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepOutcome {
    Advanced(OnboardingStep),
    /// Profile committed; the session no longer accepts input
    Completed(BusinessProfile),
}

/// One run through the onboarding flow for the signed-in user
#[derive(Debug)]
pub struct OnboardingSession {
    form: OnboardingForm,
    context: SessionContext,
    profiles: ProfileService,
    completed: bool,
}

impl OnboardingSession {
    /// Start with an empty form
    pub fn new(context: SessionContext, profiles: ProfileService) -> Self {
        Self {
            form: OnboardingForm::new(),
            context,
            profiles,
            completed: false,
        }
    }

    /// Start with the form seeded from the user's existing profile
    pub fn resume(context: SessionContext, profiles: ProfileService) -> Self {
        let form = context
            .profile()
            .cloned()
            .map_or_else(OnboardingForm::new, OnboardingForm::from_profile);
        Self {
            form,
            context,
            profiles,
            completed: false,
        }
    }

    pub const fn form(&self) -> &OnboardingForm {
        &self.form
    }

    pub const fn step(&self) -> OnboardingStep {
        self.form.step()
    }

    pub const fn is_completed(&self) -> bool {
        self.completed
    }

    pub const fn context(&self) -> &SessionContext {
        &self.context
    }

    fn ensure_open(&self) -> Result<(), ApplicationError> {
        if self.completed {
            return Err(DomainError::InvalidTransition(
                "onboarding has already been completed".to_string(),
            )
            .into());
        }
        Ok(())
    }

    /// Advance, or commit the profile when on the last step
    ///
    /// A failed commit is logged and returned; the session stays open on the
    /// last step so the user can retry.
    pub async fn next(&mut self) -> Result<StepOutcome, ApplicationError> {
        self.ensure_open()?;
        match self.form.next() {
            Transition::Advanced(step) => Ok(StepOutcome::Advanced(step)),
            Transition::Commit => self.commit().await,
        }
    }

    pub fn back(&mut self) -> Result<OnboardingStep, ApplicationError> {
        self.ensure_open()?;
        Ok(self.form.back())
    }

    pub fn update_field(&mut self, path: &str, value: &str) -> Result<(), ApplicationError> {
        self.ensure_open()?;
        self.form.update_field(path, value)?;
        Ok(())
    }

    pub fn toggle_activity(&mut self, activity: BusinessActivity) -> Result<(), ApplicationError> {
        self.ensure_open()?;
        self.form.toggle_activity(activity);
        Ok(())
    }

    pub fn select_suburb(&mut self, name: &str) -> Result<Suburb, ApplicationError> {
        self.ensure_open()?;
        Ok(self.form.select_suburb(name)?)
    }

    pub fn prefill_sample(&mut self) -> Result<(), ApplicationError> {
        self.ensure_open()?;
        self.form.prefill_sample();
        Ok(())
    }

    /// Write an accepted assistant suggestion into the form
    pub fn apply_suggestion(&mut self, suggestion: &FieldSuggestion) -> Result<(), ApplicationError> {
        self.update_field(&suggestion.field, &suggestion.value)
    }

    #[instrument(skip(self), fields(user = %self.context.user().email))]
    async fn commit(&mut self) -> Result<StepOutcome, ApplicationError> {
        let profile = self.form.completed_profile();
        let known = self.context.profile().and_then(|p| p.id.clone());

        match self
            .profiles
            .upsert_for_user(self.context.user(), known.as_ref(), &profile)
            .await
        {
            Ok(saved) => {
                info!(profile_id = ?saved.id, "Onboarding completed");
                self.completed = true;
                self.context = self.context.clone().with_profile(saved.clone());
                Ok(StepOutcome::Completed(saved))
            },
            Err(e) => {
                error!(error = %e, "Error saving business data");
                Err(e)
            },
        }
    }
}
