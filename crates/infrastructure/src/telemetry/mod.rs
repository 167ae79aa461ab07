//! Logging and tracing setup
//!
//! Console subscriber with an `EnvFilter`, in text or JSON format.

mod subscriber;

pub use subscriber::{TelemetryConfig, TelemetryError, init_telemetry};
