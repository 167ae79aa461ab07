//! Startup validation for application configuration
//!
//! Missing credentials are warnings in development. In production, critical
//! issues prevent startup.

use std::fmt;

use crate::config::{AppConfig, Environment};

/// Severity level for configuration warnings
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum WarningSeverity {
    Info,
    Warning,
    /// Must be addressed in production
    Critical,
}

impl fmt::Display for WarningSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// A configuration issue with a recommended fix
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub severity: WarningSeverity,
    /// Short code identifying the warning type
    pub code: &'static str,
    pub message: String,
    pub recommendation: String,
}

impl ConfigWarning {
    fn new(
        severity: WarningSeverity,
        code: &'static str,
        message: impl Into<String>,
        recommendation: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
            recommendation: recommendation.into(),
        }
    }

    #[must_use]
    pub const fn is_critical(&self) -> bool {
        matches!(self.severity, WarningSeverity::Critical)
    }
}

impl fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {} - {}",
            self.severity, self.code, self.message, self.recommendation
        )
    }
}

/// Validates configuration before the CLI talks to the platform
#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate configuration and return every warning
    #[must_use]
    pub fn validate(config: &AppConfig) -> Vec<ConfigWarning> {
        let production = config.environment == Environment::Production;
        let mut warnings = Vec::new();

        if config.entity_store.app_id.trim().is_empty() {
            warnings.push(ConfigWarning::new(
                WarningSeverity::Critical,
                "ENTITY_STORE_APP_ID_MISSING",
                "No application id configured for the entity store",
                "Set entity_store.app_id or CLEARTAPE_ENTITY_STORE__APP_ID",
            ));
        }

        if config.entity_store.api_token.is_none() {
            warnings.push(ConfigWarning::new(
                if production {
                    WarningSeverity::Critical
                } else {
                    WarningSeverity::Warning
                },
                "ENTITY_STORE_TOKEN_MISSING",
                "No session token configured; every request will be unauthenticated",
                "Set CLEARTAPE_ENTITY_STORE__API_TOKEN",
            ));
        }

        for (code, url) in [
            ("ENTITY_STORE_INSECURE_URL", &config.entity_store.base_url),
            ("INFERENCE_INSECURE_URL", &config.inference.base_url),
        ] {
            if is_insecure_remote(url) {
                warnings.push(ConfigWarning::new(
                    if production {
                        WarningSeverity::Critical
                    } else {
                        WarningSeverity::Info
                    },
                    code,
                    format!("Plain HTTP endpoint: {url}"),
                    "Use an https:// URL for remote endpoints",
                ));
            }
        }

        warnings
    }

    /// Whether startup must stop
    #[must_use]
    pub fn is_blocking(config: &AppConfig, warnings: &[ConfigWarning]) -> bool {
        config.environment == Environment::Production && warnings.iter().any(ConfigWarning::is_critical)
    }
}

fn is_insecure_remote(url: &str) -> bool {
    url.strip_prefix("http://").is_some_and(|rest| {
        let host = rest.split(['/', ':']).next().unwrap_or_default();
        !matches!(host, "localhost" | "127.0.0.1")
    })
}
