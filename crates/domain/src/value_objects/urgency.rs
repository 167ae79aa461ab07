//! Urgency of legal updates and risk level of warnings

use serde::{Deserialize, Serialize};
use std::fmt;

/// Urgency attached to a legal update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    Critical,
    High,
    #[default]
    Medium,
    Low,
}

impl Urgency {
    /// Critical and high updates count as urgent
    #[must_use]
    pub const fn is_urgent(&self) -> bool {
        matches!(self, Self::Critical | Self::High)
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Urgency {
    type Err = crate::DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "critical" => Ok(Self::Critical),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(crate::DomainError::invalid_value("urgency", s)),
        }
    }
}

/// Risk level of a "things to avoid" warning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    High,
    #[default]
    Medium,
    Low,
}

impl RiskLevel {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::High => "High Risk",
            Self::Medium => "Medium Risk",
            Self::Low => "Low Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urgent_levels() {
        assert!(Urgency::Critical.is_urgent());
        assert!(Urgency::High.is_urgent());
        assert!(!Urgency::Medium.is_urgent());
        assert!(!Urgency::Low.is_urgent());
    }

    #[test]
    fn urgency_from_str() {
        assert_eq!("High".parse::<Urgency>().unwrap(), Urgency::High);
        assert!("soon".parse::<Urgency>().is_err());
    }

    #[test]
    fn risk_level_serialization() {
        let parsed: RiskLevel = serde_json::from_str("\"high\"").unwrap();
        assert_eq!(parsed, RiskLevel::High);
        assert_eq!(parsed.to_string(), "High Risk");
    }
}
