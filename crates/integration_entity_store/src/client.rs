//! Entity store client
//!
//! HTTP client for the hosted platform's entity endpoints.

use std::{fmt, time::Duration};

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;
use tracing::{debug, instrument, warn};

use crate::models::UserRecord;

/// Entity store errors
#[derive(Debug, Error)]
pub enum EntityStoreError {
    /// Connection to the platform failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// No session, or the token was rejected
    #[error("Not authenticated: {0}")]
    NotAuthenticated(String),

    /// Record or entity does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Failed to parse the response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

impl EntityStoreError {
    pub const fn is_auth_failure(&self) -> bool {
        matches!(self, Self::NotAuthenticated(_))
    }
}

impl From<reqwest::Error> for EntityStoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

/// Entity store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntityStoreConfig {
    /// Platform API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Application identifier
    #[serde(default)]
    pub app_id: String,

    /// Session token (sensitive - uses `SecretString`)
    #[serde(default, skip_serializing)]
    pub api_token: Option<SecretString>,

    /// Request timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "http://localhost:8080/api".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl Default for EntityStoreConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            app_id: String::new(),
            api_token: None,
            timeout_secs: default_timeout(),
        }
    }
}

/// Entity store client trait
///
/// Entities are addressed by name (e.g. `"ComplianceItem"`).
#[async_trait]
pub trait EntityStoreClient: Send + Sync {
    /// List every record, optionally sorted (`"-created_date"` for descending)
    async fn list(&self, entity: &str, sort: Option<&str>) -> Result<Vec<Value>, EntityStoreError>;

    /// Records whose fields equal the query's fields
    async fn filter(
        &self,
        entity: &str,
        query: &Map<String, Value>,
    ) -> Result<Vec<Value>, EntityStoreError>;

    /// Create a record; the store assigns the id
    async fn create(&self, entity: &str, fields: &Value) -> Result<Value, EntityStoreError>;

    /// Merge `fields` into an existing record
    async fn update(
        &self,
        entity: &str,
        id: &str,
        fields: &Value,
    ) -> Result<Value, EntityStoreError>;

    /// The signed-in user
    async fn me(&self) -> Result<UserRecord, EntityStoreError>;
}

/// HTTP implementation of [`EntityStoreClient`]
pub struct HttpEntityStoreClient {
    client: Client,
    config: EntityStoreConfig,
}

impl fmt::Debug for HttpEntityStoreClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpEntityStoreClient")
            .field("base_url", &self.config.base_url)
            .field("app_id", &self.config.app_id)
            .finish_non_exhaustive()
    }
}

impl HttpEntityStoreClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: EntityStoreConfig) -> Result<Self, EntityStoreError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| EntityStoreError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    fn entity_url(&self, entity: &str) -> String {
        format!(
            "{}/apps/{}/entities/{entity}",
            self.config.base_url.trim_end_matches('/'),
            self.config.app_id
        )
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.config.api_token {
            Some(token) => builder.bearer_auth(token.expose_secret()),
            None => builder,
        }
    }

    /// Map non-success statuses onto errors
    async fn check(response: Response) -> Result<Response, EntityStoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(status = %status, body = %body, "Entity store request failed");
        Err(match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                EntityStoreError::NotAuthenticated(format!("HTTP {status}"))
            },
            StatusCode::NOT_FOUND => EntityStoreError::NotFound(body),
            StatusCode::TOO_MANY_REQUESTS => EntityStoreError::RateLimitExceeded,
            s if s.is_server_error() => EntityStoreError::ServiceUnavailable(format!("HTTP {s}")),
            s => EntityStoreError::RequestFailed(format!("HTTP {s}: {body}")),
        })
    }

    async fn json<T: for<'de> Deserialize<'de>>(
        builder: RequestBuilder,
    ) -> Result<T, EntityStoreError> {
        let response = Self::check(builder.send().await?).await?;
        response
            .json()
            .await
            .map_err(|e| EntityStoreError::ParseError(e.to_string()))
    }
}

#[async_trait]
impl EntityStoreClient for HttpEntityStoreClient {
    #[instrument(skip(self))]
    async fn list(&self, entity: &str, sort: Option<&str>) -> Result<Vec<Value>, EntityStoreError> {
        let mut builder = self.client.get(self.entity_url(entity));
        if let Some(sort) = sort {
            builder = builder.query(&[("sort", sort)]);
        }
        let records: Vec<Value> = Self::json(self.authorized(builder)).await?;
        debug!(count = records.len(), "Listed records");
        Ok(records)
    }

    #[instrument(skip(self, query))]
    async fn filter(
        &self,
        entity: &str,
        query: &Map<String, Value>,
    ) -> Result<Vec<Value>, EntityStoreError> {
        let q = serde_json::to_string(query)
            .map_err(|e| EntityStoreError::RequestFailed(e.to_string()))?;
        let builder = self.client.get(self.entity_url(entity)).query(&[("q", q)]);
        let records: Vec<Value> = Self::json(self.authorized(builder)).await?;
        debug!(count = records.len(), "Filtered records");
        Ok(records)
    }

    #[instrument(skip(self, fields))]
    async fn create(&self, entity: &str, fields: &Value) -> Result<Value, EntityStoreError> {
        let builder = self.client.post(self.entity_url(entity)).json(fields);
        Self::json(self.authorized(builder)).await
    }

    #[instrument(skip(self, fields))]
    async fn update(
        &self,
        entity: &str,
        id: &str,
        fields: &Value,
    ) -> Result<Value, EntityStoreError> {
        let url = format!("{}/{id}", self.entity_url(entity));
        let builder = self.client.put(url).json(fields);
        Self::json(self.authorized(builder)).await
    }

    #[instrument(skip(self))]
    async fn me(&self) -> Result<UserRecord, EntityStoreError> {
        let builder = self.client.get(format!("{}/me", self.entity_url("User")));
        Self::json(self.authorized(builder)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EntityStoreConfig::default();
        assert_eq!(config.timeout_secs, 30);
        assert!(config.api_token.is_none());
    }

    #[test]
    fn entity_url_shape() {
        let client = HttpEntityStoreClient::new(EntityStoreConfig {
            base_url: "https://platform.test/api/".to_string(),
            app_id: "app-1".to_string(),
            ..EntityStoreConfig::default()
        })
        .unwrap();
        assert_eq!(
            client.entity_url("LegalUpdate"),
            "https://platform.test/api/apps/app-1/entities/LegalUpdate"
        );
    }

    #[test]
    fn token_is_hidden_from_debug() {
        let config = EntityStoreConfig {
            api_token: Some(SecretString::from("secret-token")),
            ..EntityStoreConfig::default()
        };
        let client = HttpEntityStoreClient::new(config.clone()).unwrap();
        assert!(!format!("{client:?}").contains("secret-token"));
        assert!(!format!("{config:?}").contains("secret-token"));
    }

    #[test]
    fn auth_failure_flag() {
        assert!(EntityStoreError::NotAuthenticated("x".into()).is_auth_failure());
        assert!(!EntityStoreError::RateLimitExceeded.is_auth_failure());
    }
}
