//! Application configuration
//!
//! Layered from built-in defaults, an optional `config.toml` and
//! `CLEARTAPE_*` environment variables, in that order. Nested keys use a
//! double underscore: `CLEARTAPE_ENTITY_STORE__APP_ID`.

mod chat;

use std::{fmt, path::Path};

use ai_core::InferenceConfig;
use integration_entity_store::EntityStoreConfig;
use serde::{Deserialize, Serialize};

pub use chat::ChatAppConfig;

use crate::telemetry::TelemetryConfig;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "CLEARTAPE";

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Application environment (development or production)
///
/// Controls how strictly the configuration is validated at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Development environment - missing credentials are warnings
    #[default]
    Development,
    /// Production environment - missing credentials stop startup
    Production,
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

impl std::str::FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(format!(
                "Invalid environment: {s}. Use 'development' or 'production'"
            )),
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub environment: Environment,

    /// Hosted entity store
    #[serde(default)]
    pub entity_store: EntityStoreConfig,

    /// Hosted LLM invoke endpoint
    #[serde(default)]
    pub inference: InferenceConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    /// RegBot chat widgets
    #[serde(default)]
    pub chat: ChatAppConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (if present) and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::build(config::File::with_name("config").required(false))
    }

    /// Load configuration from an explicit file plus the environment
    pub fn load_from(path: &Path) -> Result<Self, config::ConfigError> {
        Self::build(config::File::from(path).required(true))
    }

    fn build<S>(file: S) -> Result<Self, config::ConfigError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            // Start with defaults
            .set_default("environment", "development")?
            .set_default("entity_store.base_url", "http://localhost:8080/api")?
            .set_default("inference.base_url", "http://localhost:8080/api")?
            .set_default("telemetry.log_filter", "info")?
            .add_source(file)
            // Override with environment variables (e.g., CLEARTAPE_ENVIRONMENT)
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Inference settings inherit the store's app id when none is set
    #[must_use]
    pub fn resolved(mut self) -> Self {
        if self.inference.app_id.is_empty() {
            self.inference.app_id.clone_from(&self.entity_store.app_id);
        }
        if self.inference.api_key.is_none() {
            self.inference.api_key.clone_from(&self.entity_store.api_token);
        }
        self
    }
}
