//! AI Core - Client for the hosted LLM invoke endpoint
//!
//! The assistant sends a single prompt and receives either free text or a
//! structured `{reply, suggestion}` object when a JSON schema was supplied.

pub mod config;
pub mod error;
pub mod hosted;
pub mod ports;

pub use config::InferenceConfig;
pub use error::InferenceError;
pub use hosted::HostedInferenceEngine;
pub use ports::{InferenceEngine, InvokeRequest, InvokeResponse, suggestion_schema};
