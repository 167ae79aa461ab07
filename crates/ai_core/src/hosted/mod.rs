//! Hosted platform invoke client

mod client;

pub use client::HostedInferenceEngine;
