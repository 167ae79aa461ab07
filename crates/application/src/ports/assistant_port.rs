//! Assistant port - Interface for the hosted LLM invoke endpoint

use async_trait::async_trait;
use domain::FieldSuggestion;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// A single prompt for the assistant
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantRequest {
    pub prompt: String,
    /// Ask for a structured `{reply, suggestion}` answer
    pub structured_suggestion: bool,
}

impl AssistantRequest {
    /// Free-text request
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            structured_suggestion: false,
        }
    }

    /// Request that may carry a form-field suggestion
    pub fn with_suggestion(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            structured_suggestion: true,
        }
    }
}

/// Assistant answer
///
/// `text` is returned verbatim; for free-text answers any `SUGGESTION:`
/// marker is still inside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssistantReply {
    pub text: String,
    pub suggestion: Option<FieldSuggestion>,
}

impl AssistantReply {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            suggestion: None,
        }
    }
}

/// Port for the assistant invoker
///
/// Single request/response; no streaming and no retries.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AssistantPort: Send + Sync {
    async fn invoke(&self, request: AssistantRequest) -> Result<AssistantReply, ApplicationError>;
}
