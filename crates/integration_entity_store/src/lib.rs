//! Hosted entity store integration
//!
//! REST client for the platform's entity API: per-entity list, filter,
//! create and update, plus the signed-in user accessor. Records travel as
//! untyped JSON; typing happens in the adapters that wrap this client.

pub mod client;
mod models;

pub use client::{EntityStoreClient, EntityStoreConfig, EntityStoreError, HttpEntityStoreClient};
pub use models::UserRecord;
