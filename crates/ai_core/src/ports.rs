//! Port definitions for the invoke client

use async_trait::async_trait;
use domain::FieldSuggestion;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::error::InferenceError;

/// Body of an invoke call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvokeRequest {
    pub prompt: String,
    /// When set, the platform answers with JSON matching this schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_json_schema: Option<Value>,
}

impl InvokeRequest {
    pub fn prompt(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            response_json_schema: None,
        }
    }

    #[must_use]
    pub fn with_schema(mut self, schema: Value) -> Self {
        self.response_json_schema = Some(schema);
        self
    }
}

/// Answer to an invoke call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvokeResponse {
    pub text: String,
    pub suggestion: Option<FieldSuggestion>,
}

/// Raw response body: a bare string, or the structured object
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum InvokeBody {
    Text(String),
    Structured {
        reply: String,
        #[serde(default)]
        suggestion: Option<FieldSuggestion>,
    },
}

impl From<InvokeBody> for InvokeResponse {
    fn from(body: InvokeBody) -> Self {
        match body {
            InvokeBody::Text(text) => Self {
                text,
                suggestion: None,
            },
            InvokeBody::Structured { reply, suggestion } => Self {
                text: reply,
                suggestion,
            },
        }
    }
}

/// Schema for `{reply, suggestion?: {field, value}}`
pub fn suggestion_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "reply": { "type": "string" },
            "suggestion": {
                "type": ["object", "null"],
                "properties": {
                    "field": { "type": "string" },
                    "value": { "type": "string" }
                },
                "required": ["field", "value"]
            }
        },
        "required": ["reply"]
    })
}

/// Port for invoke implementations
#[async_trait]
pub trait InferenceEngine: Send + Sync {
    /// Run one prompt; no streaming, no retries
    async fn invoke(&self, request: InvokeRequest) -> Result<InvokeResponse, InferenceError>;
}
