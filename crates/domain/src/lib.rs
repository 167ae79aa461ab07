//! Domain layer for Clear Tape
//!
//! Business profiles, compliance items, legal updates and the pure logic
//! built on them: progress derivation, the onboarding form state machine,
//! the suburb table and the assistant's suggestion marker.
//! No I/O happens in this crate.

pub mod compliance;
pub mod entities;
pub mod errors;
pub mod onboarding;
pub mod suburbs;
pub mod suggestion;
pub mod value_objects;

pub use compliance::{CHECKPOINT_COUNT, ComplianceSummary, StatusCounts};
pub use entities::*;
pub use errors::DomainError;
pub use onboarding::{OnboardingForm, OnboardingStep, STEP_COUNT, SuburbInput, Transition};
pub use suburbs::Suburb;
pub use suggestion::{FieldSuggestion, ParsedReply};
pub use value_objects::*;
