//! Invoke client for the hosted platform's LLM endpoint

use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use secrecy::ExposeSecret;
use tracing::{debug, info, instrument, warn};

use crate::config::InferenceConfig;
use crate::error::InferenceError;
use crate::ports::{InferenceEngine, InvokeBody, InvokeRequest, InvokeResponse};

/// Inference engine backed by the platform's `InvokeLLM` endpoint
pub struct HostedInferenceEngine {
    client: Client,
    config: InferenceConfig,
}

impl fmt::Debug for HostedInferenceEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostedInferenceEngine")
            .field("base_url", &self.config.base_url)
            .field("app_id", &self.config.app_id)
            .finish_non_exhaustive()
    }
}

impl HostedInferenceEngine {
    /// Create a new engine
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: InferenceConfig) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| InferenceError::ConnectionFailed(e.to_string()))?;

        info!(
            base_url = %config.base_url,
            app_id = %config.app_id,
            "Initialized hosted inference engine"
        );

        Ok(Self { client, config })
    }

    pub const fn config(&self) -> &InferenceConfig {
        &self.config
    }
}

#[async_trait]
impl InferenceEngine for HostedInferenceEngine {
    #[instrument(skip(self, request), fields(structured = request.response_json_schema.is_some()))]
    async fn invoke(&self, request: InvokeRequest) -> Result<InvokeResponse, InferenceError> {
        let mut builder = self.client.post(self.config.invoke_url()).json(&request);
        if let Some(key) = &self.config.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        debug!(prompt_len = request.prompt.len(), "Invoking LLM");
        let response = builder.send().await?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(InferenceError::NotAuthenticated(format!("HTTP {status}")));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(InferenceError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "Invoke request failed");
            return Err(InferenceError::ServerError(format!("Status {status}: {body}")));
        }

        let body: InvokeBody = response
            .json()
            .await
            .map_err(|e| InferenceError::InvalidResponse(e.to_string()))?;

        let response = InvokeResponse::from(body);
        debug!(
            reply_len = response.text.len(),
            suggestion = response.suggestion.is_some(),
            "Invoke completed"
        );
        Ok(response)
    }
}
