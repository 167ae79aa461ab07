//! Update feed - filterable view of legal updates

use chrono::{Days, NaiveDate};
use domain::{AustralianState, LegalUpdate, Urgency};

use super::dashboard_service::RECENT_UPDATES_COUNT;

/// Window for the "upcoming" tab
pub const UPCOMING_WINDOW_DAYS: u64 = 30;

/// Tab selection on the updates page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateFilter {
    #[default]
    All,
    /// Critical or high urgency
    Urgent,
    /// Taking effect within the next 30 days
    Upcoming,
    ActionRequired,
    Urgency(Urgency),
}

impl UpdateFilter {
    /// Check an update against the filter, relative to `today`
    pub fn matches(&self, update: &LegalUpdate, today: NaiveDate) -> bool {
        match self {
            Self::All => true,
            Self::Urgent => update.urgency.is_urgent(),
            Self::Upcoming => update
                .effective_date
                .is_some_and(|date| is_upcoming(date, today)),
            Self::ActionRequired => update.action_required,
            Self::Urgency(urgency) => update.urgency == *urgency,
        }
    }
}

impl std::str::FromStr for UpdateFilter {
    type Err = domain::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "all" => Ok(Self::All),
            "urgent" => Ok(Self::Urgent),
            "upcoming" => Ok(Self::Upcoming),
            "action_required" => Ok(Self::ActionRequired),
            other => other.parse().map(Self::Urgency),
        }
    }
}

/// After today and no later than the end of the window
fn is_upcoming(date: NaiveDate, today: NaiveDate) -> bool {
    let window_end = today
        .checked_add_days(Days::new(UPCOMING_WINDOW_DAYS))
        .unwrap_or(NaiveDate::MAX);
    date > today && date <= window_end
}

/// Tab counts on the updates page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateCounts {
    pub all: usize,
    pub urgent: usize,
    pub action_required: usize,
}

/// Legal updates, newest first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateFeed {
    updates: Vec<LegalUpdate>,
}

impl UpdateFeed {
    pub const fn new(updates: Vec<LegalUpdate>) -> Self {
        Self { updates }
    }

    pub fn updates(&self) -> &[LegalUpdate] {
        &self.updates
    }

    pub fn filtered(&self, filter: UpdateFilter, today: NaiveDate) -> Vec<&LegalUpdate> {
        self.updates
            .iter()
            .filter(|u| filter.matches(u, today))
            .collect()
    }

    /// The first `n` updates
    pub fn recent(&self, n: usize) -> &[LegalUpdate] {
        &self.updates[..self.updates.len().min(n)]
    }

    /// What the dashboard tile shows
    pub fn dashboard_tile(&self) -> &[LegalUpdate] {
        self.recent(RECENT_UPDATES_COUNT)
    }

    /// Whether the update names the business's state
    pub fn is_relevant(update: &LegalUpdate, state: Option<AustralianState>) -> bool {
        state.is_some_and(|s| update.affects(s))
    }

    pub fn counts(&self) -> UpdateCounts {
        UpdateCounts {
            all: self.updates.len(),
            urgent: self
                .updates
                .iter()
                .filter(|u| u.urgency.is_urgent())
                .count(),
            action_required: self.updates.iter().filter(|u| u.action_required).count(),
        }
    }
}
