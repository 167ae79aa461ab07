//! Configuration for the invoke client

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Configuration for the hosted inference endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InferenceConfig {
    /// Base URL of the hosted platform API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Application identifier on the platform
    #[serde(default)]
    pub app_id: String,

    /// Bearer token (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_key: Option<SecretString>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Ask for `{reply, suggestion}` structured output on onboarding prompts
    #[serde(default = "default_structured_suggestions")]
    pub structured_suggestions: bool,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

const fn default_timeout_ms() -> u64 {
    60000 // 60 seconds
}

const fn default_structured_suggestions() -> bool {
    true
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: String::new(),
            api_key: None,
            timeout_ms: default_timeout_ms(),
            structured_suggestions: default_structured_suggestions(),
        }
    }
}

impl InferenceConfig {
    /// Endpoint that runs a prompt through the platform's LLM
    pub fn invoke_url(&self) -> String {
        format!(
            "{}/apps/{}/integration-endpoints/Core/InvokeLLM",
            self.base_url.trim_end_matches('/'),
            self.app_id
        )
    }
}
