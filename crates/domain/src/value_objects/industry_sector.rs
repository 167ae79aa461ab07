//! Industry sector value object

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Broad industry grouping used to pick applicable regulations
///
/// Loosely follows ANZSIC divisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustrySector {
    Retail,
    Hospitality,
    Construction,
    Healthcare,
    Education,
    Manufacturing,
    Technology,
    Finance,
    Agriculture,
    Transport,
    Automotive,
    ProfessionalServices,
    Other,
}

impl IndustrySector {
    pub const ALL: [Self; 13] = [
        Self::Retail,
        Self::Hospitality,
        Self::Construction,
        Self::Healthcare,
        Self::Education,
        Self::Manufacturing,
        Self::Technology,
        Self::Finance,
        Self::Agriculture,
        Self::Transport,
        Self::Automotive,
        Self::ProfessionalServices,
        Self::Other,
    ];

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Retail => "retail",
            Self::Hospitality => "hospitality",
            Self::Construction => "construction",
            Self::Healthcare => "healthcare",
            Self::Education => "education",
            Self::Manufacturing => "manufacturing",
            Self::Technology => "technology",
            Self::Finance => "finance",
            Self::Agriculture => "agriculture",
            Self::Transport => "transport",
            Self::Automotive => "automotive",
            Self::ProfessionalServices => "professional_services",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Retail => "Retail",
            Self::Hospitality => "Hospitality",
            Self::Construction => "Construction",
            Self::Healthcare => "Healthcare",
            Self::Education => "Education",
            Self::Manufacturing => "Manufacturing",
            Self::Technology => "Technology",
            Self::Finance => "Finance",
            Self::Agriculture => "Agriculture",
            Self::Transport => "Transport",
            Self::Automotive => "Automotive",
            Self::ProfessionalServices => "Professional Services",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IndustrySector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for IndustrySector {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.code() == s.trim())
            .ok_or_else(|| DomainError::invalid_value("industry_sector", s))
    }
}
