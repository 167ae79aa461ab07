//! Assistant adapter - Implements AssistantPort using ai_core

use std::{fmt, sync::Arc};

use ai_core::{InferenceEngine, InferenceError, InvokeRequest, suggestion_schema};
use application::{
    ApplicationError,
    ports::{AssistantPort, AssistantReply, AssistantRequest},
};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Adapter from the invoke client to the assistant port
pub struct InferenceAssistantAdapter {
    engine: Arc<dyn InferenceEngine>,
    structured_suggestions: bool,
}

impl fmt::Debug for InferenceAssistantAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InferenceAssistantAdapter")
            .field("structured_suggestions", &self.structured_suggestions)
            .finish_non_exhaustive()
    }
}

impl InferenceAssistantAdapter {
    pub fn new(engine: Arc<dyn InferenceEngine>) -> Self {
        Self {
            engine,
            structured_suggestions: true,
        }
    }

    /// Turn the JSON-schema request off; suggestions then come only from
    /// the `SUGGESTION:` marker in the reply text
    #[must_use]
    pub const fn with_structured_suggestions(mut self, enabled: bool) -> Self {
        self.structured_suggestions = enabled;
        self
    }
}

fn map_inference_error(err: InferenceError) -> ApplicationError {
    match err {
        InferenceError::NotAuthenticated(msg) => ApplicationError::NotAuthenticated(msg),
        other => ApplicationError::Inference(other.to_string()),
    }
}

#[async_trait]
impl AssistantPort for InferenceAssistantAdapter {
    #[instrument(skip(self, request))]
    async fn invoke(&self, request: AssistantRequest) -> Result<AssistantReply, ApplicationError> {
        let mut invoke = InvokeRequest::prompt(request.prompt);
        if request.structured_suggestion && self.structured_suggestions {
            invoke = invoke.with_schema(suggestion_schema());
        }

        let response = self
            .engine
            .invoke(invoke)
            .await
            .map_err(map_inference_error)?;

        debug!(suggestion = response.suggestion.is_some(), "Assistant replied");
        Ok(AssistantReply {
            text: response.text,
            suggestion: response.suggestion,
        })
    }
}

#[cfg(test)]
mod tests {
    use ai_core::InvokeResponse;
    use domain::FieldSuggestion;
    use mockall::mock;

    use super::*;

    mock! {
        Engine {}

        #[async_trait]
        impl InferenceEngine for Engine {
            async fn invoke(&self, request: InvokeRequest) -> Result<InvokeResponse, InferenceError>;
        }
    }

    #[tokio::test]
    async fn onboarding_requests_carry_schema() {
        let mut engine = MockEngine::new();
        engine
            .expect_invoke()
            .withf(|req| req.response_json_schema.is_some())
            .returning(|_| {
                Ok(InvokeResponse {
                    text: "Retail.".to_string(),
                    suggestion: Some(FieldSuggestion::new("industry_sector", "retail")),
                })
            });
        let adapter = InferenceAssistantAdapter::new(Arc::new(engine));

        let reply = adapter
            .invoke(AssistantRequest::with_suggestion("I sell shoes"))
            .await
            .unwrap();
        assert_eq!(reply.text, "Retail.");
        assert!(reply.suggestion.is_some());
    }

    #[tokio::test]
    async fn schema_can_be_disabled() {
        let mut engine = MockEngine::new();
        engine
            .expect_invoke()
            .withf(|req| req.response_json_schema.is_none())
            .returning(|_| {
                Ok(InvokeResponse {
                    text: "ok".to_string(),
                    suggestion: None,
                })
            });
        let adapter =
            InferenceAssistantAdapter::new(Arc::new(engine)).with_structured_suggestions(false);

        adapter
            .invoke(AssistantRequest::with_suggestion("hi"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn dashboard_requests_are_plain() {
        let mut engine = MockEngine::new();
        engine
            .expect_invoke()
            .withf(|req| req.response_json_schema.is_none() && req.prompt == "What's GST?")
            .returning(|_| {
                Ok(InvokeResponse {
                    text: "A tax.".to_string(),
                    suggestion: None,
                })
            });
        let adapter = InferenceAssistantAdapter::new(Arc::new(engine));

        let reply = adapter
            .invoke(AssistantRequest::text("What's GST?"))
            .await
            .unwrap();
        assert_eq!(reply.text, "A tax.");
    }

    #[tokio::test]
    async fn errors_are_mapped() {
        let mut engine = MockEngine::new();
        engine
            .expect_invoke()
            .returning(|_| Err(InferenceError::Timeout));
        let adapter = InferenceAssistantAdapter::new(Arc::new(engine));

        let err = adapter
            .invoke(AssistantRequest::text("hi"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApplicationError::Inference(_)));

        assert!(
            map_inference_error(InferenceError::NotAuthenticated("401".into())).is_auth_failure()
        );
    }
}
