//! Onboarding form state machine
//!
//! Five linear steps collect a [`BusinessProfile`]. `next` on the last step
//! does not advance; it asks the caller to commit the profile.

use std::fmt;

use serde::Serialize;

use crate::entities::{BusinessLocation, BusinessProfile};
use crate::errors::DomainError;
use crate::suburbs::{Suburb, find_suburb, suburbs_for};
use crate::value_objects::{
    AnnualTurnover, AustralianState, BusinessActivity, BusinessStructure, EmployeeCount,
    IndustrySector,
};

/// Number of onboarding steps
pub const STEP_COUNT: usize = 5;

/// A step of the onboarding flow, in traversal order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OnboardingStep {
    #[default]
    Business,
    Location,
    Structure,
    Financials,
    Activities,
}

impl OnboardingStep {
    pub const ALL: [Self; STEP_COUNT] = [
        Self::Business,
        Self::Location,
        Self::Structure,
        Self::Financials,
        Self::Activities,
    ];

    /// Zero-based index in [0, 4]
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Business => 0,
            Self::Location => 1,
            Self::Structure => 2,
            Self::Financials => 3,
            Self::Activities => 4,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// One-based step number for "Step n of 5"
    #[must_use]
    pub const fn number(&self) -> usize {
        self.index() + 1
    }

    /// Identifier used in prompts (e.g. `"financials"`)
    #[must_use]
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::Location => "location",
            Self::Structure => "structure",
            Self::Financials => "financials",
            Self::Activities => "activities",
        }
    }

    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Business => "Business Details",
            Self::Location => "Location",
            Self::Structure => "Business Structure",
            Self::Financials => "Size & Turnover",
            Self::Activities => "Business Activities",
        }
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        matches!(self, Self::Business)
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        matches!(self, Self::Activities)
    }
}

impl fmt::Display for OnboardingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Result of asking the form to move forward
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// Moved to the given step
    Advanced(OnboardingStep),
    /// Already at the last step; the form should be committed
    Commit,
}

/// How the suburb field should be entered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuburbInput {
    Select(&'static [Suburb]),
    FreeText,
}

/// Onboarding form: current step plus the accumulated profile fields
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OnboardingForm {
    step: OnboardingStep,
    data: BusinessProfile,
}

impl OnboardingForm {
    /// Start an empty form at the first step
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at the first step with fields taken from an existing profile
    #[must_use]
    pub fn from_profile(profile: BusinessProfile) -> Self {
        Self {
            step: OnboardingStep::Business,
            data: profile,
        }
    }

    #[must_use]
    pub const fn step(&self) -> OnboardingStep {
        self.step
    }

    #[must_use]
    pub const fn data(&self) -> &BusinessProfile {
        &self.data
    }

    /// Advance one step, or request a commit at the last step
    pub fn next(&mut self) -> Transition {
        match OnboardingStep::from_index(self.step.index() + 1) {
            Some(step) => {
                self.step = step;
                Transition::Advanced(step)
            },
            None => Transition::Commit,
        }
    }

    /// Go back one step; no-op at the first step
    pub fn back(&mut self) -> OnboardingStep {
        if let Some(prev) = self
            .step
            .index()
            .checked_sub(1)
            .and_then(OnboardingStep::from_index)
        {
            self.step = prev;
        }
        self.step
    }

    /// Set a single form field from its textual value
    ///
    /// `path` is either a top-level field (`"industry_sector"`) or one level
    /// into the location (`"location.state"`). Empty values clear optional
    /// fields. On error nothing is changed.
    pub fn update_field(&mut self, path: &str, value: &str) -> Result<(), DomainError> {
        let segments: Vec<&str> = path.trim().split('.').collect();
        match segments.as_slice() {
            [field] => self.update_top_level(field, value),
            ["location", child] => update_location(&mut self.data.location, child, value),
            _ => Err(DomainError::UnknownField(path.to_string())),
        }
    }

    fn update_top_level(&mut self, field: &str, value: &str) -> Result<(), DomainError> {
        let data = &mut self.data;
        match field {
            "business_name" => data.business_name = value.to_string(),
            "business_structure" => {
                data.business_structure = parse_optional::<BusinessStructure>(value)?;
            },
            "industry_sector" => data.industry_sector = parse_optional::<IndustrySector>(value)?,
            "employee_count" => data.employee_count = parse_optional::<EmployeeCount>(value)?,
            "annual_turnover" => data.annual_turnover = parse_optional::<AnnualTurnover>(value)?,
            "business_activities" => data.business_activities = parse_activities(value)?,
            _ => return Err(DomainError::UnknownField(field.to_string())),
        }
        Ok(())
    }

    /// Remove the activity if selected, otherwise append it
    pub fn toggle_activity(&mut self, activity: BusinessActivity) {
        let activities = &mut self.data.business_activities;
        if let Some(pos) = activities.iter().position(|a| *a == activity) {
            activities.remove(pos);
        } else {
            activities.push(activity);
        }
    }

    /// Suburbs selectable for the currently chosen state
    #[must_use]
    pub fn available_suburbs(&self) -> &'static [Suburb] {
        match self.data.location.state {
            Some(state) => suburbs_for(state),
            None => &[],
        }
    }

    #[must_use]
    pub fn suburb_input(&self) -> SuburbInput {
        let suburbs = self.available_suburbs();
        if suburbs.is_empty() {
            SuburbInput::FreeText
        } else {
            SuburbInput::Select(suburbs)
        }
    }

    /// Pick a listed suburb, filling in its postcode
    pub fn select_suburb(&mut self, name: &str) -> Result<Suburb, DomainError> {
        let suburb = self
            .data
            .location
            .state
            .and_then(|state| find_suburb(state, name))
            .ok_or_else(|| DomainError::invalid_value("location.suburb", name))?;
        self.data.location.suburb = suburb.name.to_string();
        self.data.location.postcode = suburb.postcode.to_string();
        Ok(suburb)
    }

    /// Fill the form with the "Darwin Auto Repairs" sample business
    pub fn prefill_sample(&mut self) {
        let data = &mut self.data;
        data.business_name = "Darwin Auto Repairs".to_string();
        data.location = BusinessLocation {
            street_address: "123 Stuart Highway".to_string(),
            suburb: "Darwin".to_string(),
            state: Some(AustralianState::Nt),
            postcode: "0800".to_string(),
            council: "City of Darwin".to_string(),
        };
        data.business_structure = Some(BusinessStructure::SoleTrader);
        data.industry_sector = Some(IndustrySector::Automotive);
        data.employee_count = Some(EmployeeCount::OneToFour);
        data.annual_turnover = Some(AnnualTurnover::From75kTo2m);
        data.business_activities = vec![
            BusinessActivity::HazardousMaterials,
            BusinessActivity::DataCollection,
        ];
    }

    /// Profile to persist on commit: form fields with onboarding marked done
    #[must_use]
    pub fn completed_profile(&self) -> BusinessProfile {
        BusinessProfile {
            onboarding_completed: true,
            ..self.data.clone()
        }
    }
}

fn update_location(
    location: &mut BusinessLocation,
    child: &str,
    value: &str,
) -> Result<(), DomainError> {
    match child {
        "street_address" => location.street_address = value.to_string(),
        "suburb" => location.suburb = value.to_string(),
        "state" => location.state = parse_optional::<AustralianState>(value)?,
        "postcode" => location.postcode = value.to_string(),
        "council" => location.council = value.to_string(),
        _ => return Err(DomainError::UnknownField(format!("location.{child}"))),
    }
    Ok(())
}

fn parse_optional<T>(value: &str) -> Result<Option<T>, DomainError>
where
    T: std::str::FromStr<Err = DomainError>,
{
    let value = value.trim();
    if value.is_empty() {
        Ok(None)
    } else {
        value.parse().map(Some)
    }
}

/// Comma-separated activity codes; duplicates collapse onto the first
fn parse_activities(value: &str) -> Result<Vec<BusinessActivity>, DomainError> {
    let mut activities = Vec::new();
    for code in value.split(',').map(str::trim).filter(|c| !c.is_empty()) {
        let activity: BusinessActivity = code.parse()?;
        if !activities.contains(&activity) {
            activities.push(activity);
        }
    }
    Ok(activities)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_at_first_step_is_noop() {
        let mut form = OnboardingForm::new();
        assert_eq!(form.back(), OnboardingStep::Business);
        assert_eq!(form.step(), OnboardingStep::Business);
    }

    #[test]
    fn next_walks_all_steps_then_commits() {
        let mut form = OnboardingForm::new();
        for expected in &OnboardingStep::ALL[1..] {
            assert_eq!(form.next(), Transition::Advanced(*expected));
        }
        assert_eq!(form.next(), Transition::Commit);
        assert_eq!(form.step(), OnboardingStep::Activities);
        assert_eq!(form.back(), OnboardingStep::Financials);
    }

    #[test]
    fn nested_update_touches_only_that_field() {
        let mut form = OnboardingForm::new();
        form.update_field("business_name", "Corner Store").unwrap();
        form.update_field("location.suburb", "Fitzroy").unwrap();
        let before = form.data().clone();

        form.update_field("location.state", "VIC").unwrap();

        let after = form.data();
        assert_eq!(after.location.state, Some(AustralianState::Vic));
        assert_eq!(after.location.suburb, "Fitzroy");
        assert_eq!(after.business_name, before.business_name);
        assert_eq!(
            BusinessProfile {
                location: before.location.clone(),
                ..after.clone()
            },
            before
        );
    }

    #[test]
    fn invalid_updates_leave_form_unchanged() {
        let mut form = OnboardingForm::new();
        form.prefill_sample();
        let before = form.clone();

        assert!(matches!(
            form.update_field("location.state", "XYZ"),
            Err(DomainError::InvalidFieldValue { .. })
        ));
        assert!(matches!(
            form.update_field("location.geo.lat", "1"),
            Err(DomainError::UnknownField(_))
        ));
        assert!(matches!(
            form.update_field("favourite_colour", "blue"),
            Err(DomainError::UnknownField(_))
        ));
        assert!(form.update_field("business_activities", "childcare,skydiving").is_err());
        assert_eq!(form, before);
    }

    #[test]
    fn empty_value_clears_optional_field() {
        let mut form = OnboardingForm::new();
        form.update_field("employee_count", "5-19").unwrap();
        form.update_field("employee_count", "").unwrap();
        assert_eq!(form.data().employee_count, None);
    }

    #[test]
    fn toggle_appends_and_removes_preserving_order() {
        let mut form = OnboardingForm::new();
        form.toggle_activity(BusinessActivity::FoodHandling);
        form.toggle_activity(BusinessActivity::AlcoholSales);
        form.toggle_activity(BusinessActivity::OnlineSales);
        form.toggle_activity(BusinessActivity::AlcoholSales);
        assert_eq!(
            form.data().business_activities,
            vec![BusinessActivity::FoodHandling, BusinessActivity::OnlineSales]
        );
        form.toggle_activity(BusinessActivity::AlcoholSales);
        assert_eq!(
            form.data().business_activities.last(),
            Some(&BusinessActivity::AlcoholSales)
        );
    }

    #[test]
    fn suburbs_follow_state() {
        let mut form = OnboardingForm::new();
        assert_eq!(form.suburb_input(), SuburbInput::FreeText);

        form.update_field("location.state", "TAS").unwrap();
        assert_eq!(form.available_suburbs().len(), 4);

        form.update_field("location.state", "").unwrap();
        assert!(form.available_suburbs().is_empty());
    }

    #[test]
    fn selecting_suburb_sets_postcode() {
        let mut form = OnboardingForm::new();
        assert!(form.select_suburb("Hobart").is_err());

        form.update_field("location.state", "TAS").unwrap();
        form.select_suburb("Launceston").unwrap();
        assert_eq!(form.data().location.suburb, "Launceston");
        assert_eq!(form.data().location.postcode, "7250");
    }

    #[test]
    fn sample_prefill_and_completion() {
        let mut form = OnboardingForm::new();
        form.prefill_sample();
        assert_eq!(form.data().business_name, "Darwin Auto Repairs");
        assert_eq!(form.available_suburbs().len(), 5);

        let profile = form.completed_profile();
        assert!(profile.onboarding_completed);
        assert!(!form.data().onboarding_completed);
    }

    #[test]
    fn step_metadata() {
        assert_eq!(OnboardingStep::Financials.title(), "Size & Turnover");
        assert_eq!(OnboardingStep::Activities.number(), STEP_COUNT);
        assert_eq!(OnboardingStep::from_index(5), None);
    }
}
