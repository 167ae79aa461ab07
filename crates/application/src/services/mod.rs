//! Application services - Use case implementations

mod chat_widget;
mod dashboard_service;
mod onboarding_session;
mod profile_service;
pub mod prompts;
mod session;
mod task_board;
mod update_feed;

#[cfg(test)]
pub use chat_widget::MockSuggestionConfirmer;
pub use chat_widget::{ChatVariant, ChatWidget, SendOutcome, SuggestionConfirmer};
pub use dashboard_service::{
    DashboardData, DashboardService, RECENT_UPDATES_COUNT, WARNINGS_TILE_COUNT,
};
pub use onboarding_session::{OnboardingSession, StepOutcome};
pub use profile_service::ProfileService;
pub use session::{Landing, PageState, SessionContext, SessionLoader};
pub use task_board::{HIGHLIGHT_DURATION, TabCounts, TaskBoard, TaskFilter, TaskFocus, is_state_relevant};
pub use update_feed::{UPCOMING_WINDOW_DAYS, UpdateCounts, UpdateFeed, UpdateFilter};
