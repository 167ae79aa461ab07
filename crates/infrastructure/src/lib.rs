//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the hosted
//! entity store and LLM endpoint, plus configuration, logging and the
//! in-memory demo backend.

pub mod adapters;
pub mod config;
pub mod demo;
pub mod telemetry;
pub mod validation;

pub use adapters::*;
pub use config::{AppConfig, ChatAppConfig, Environment};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
pub use validation::{ConfigValidator, ConfigWarning, WarningSeverity};
