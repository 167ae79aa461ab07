//! Configuration validation module
//!
//! Startup checks for credentials and endpoints.

pub mod startup;

pub use startup::{ConfigValidator, ConfigWarning, WarningSeverity};
