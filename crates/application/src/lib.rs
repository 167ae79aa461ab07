//! Application layer - Use cases and orchestration
//!
//! Defines the ports the outer layers implement (entity gateway, session,
//! assistant, speech input) and the services built on them: session
//! loading, onboarding, the dashboard, task and update views, and the
//! RegBot chat widgets.

pub mod error;
pub mod ports;
pub mod services;

#[cfg(test)]
mod testing;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
