//! Bucketed business size: headcount and annual turnover

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Employee headcount bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EmployeeCount {
    #[serde(rename = "0")]
    JustMe,
    #[serde(rename = "1-4")]
    OneToFour,
    #[serde(rename = "5-19")]
    FiveToNineteen,
    #[serde(rename = "20-199")]
    TwentyToOneNinetyNine,
    #[serde(rename = "200+")]
    TwoHundredPlus,
}

impl EmployeeCount {
    pub const ALL: [Self; 5] = [
        Self::JustMe,
        Self::OneToFour,
        Self::FiveToNineteen,
        Self::TwentyToOneNinetyNine,
        Self::TwoHundredPlus,
    ];

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::JustMe => "0",
            Self::OneToFour => "1-4",
            Self::FiveToNineteen => "5-19",
            Self::TwentyToOneNinetyNine => "20-199",
            Self::TwoHundredPlus => "200+",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::JustMe => "Just me (0 employees)",
            Self::OneToFour => "1-4 employees",
            Self::FiveToNineteen => "5-19 employees",
            Self::TwentyToOneNinetyNine => "20-199 employees",
            Self::TwoHundredPlus => "200+ employees",
        }
    }
}

impl fmt::Display for EmployeeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for EmployeeCount {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.code() == s.trim())
            .ok_or_else(|| DomainError::invalid_value("employee_count", s))
    }
}

/// Annual turnover bucket (AUD)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AnnualTurnover {
    #[serde(rename = "under_75k")]
    Under75k,
    #[serde(rename = "75k_2m")]
    From75kTo2m,
    #[serde(rename = "2m_10m")]
    From2mTo10m,
    #[serde(rename = "10m_50m")]
    From10mTo50m,
    #[serde(rename = "over_50m")]
    Over50m,
}

impl AnnualTurnover {
    pub const ALL: [Self; 5] = [
        Self::Under75k,
        Self::From75kTo2m,
        Self::From2mTo10m,
        Self::From10mTo50m,
        Self::Over50m,
    ];

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Under75k => "under_75k",
            Self::From75kTo2m => "75k_2m",
            Self::From2mTo10m => "2m_10m",
            Self::From10mTo50m => "10m_50m",
            Self::Over50m => "over_50m",
        }
    }

    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Under75k => "Under $75,000",
            Self::From75kTo2m => "$75,000 - $2 million",
            Self::From2mTo10m => "$2 million - $10 million",
            Self::From10mTo50m => "$10 million - $50 million",
            Self::Over50m => "Over $50 million",
        }
    }

    /// GST registration is compulsory from $75,000 turnover
    #[must_use]
    pub const fn requires_gst_registration(&self) -> bool {
        !matches!(self, Self::Under75k)
    }
}

impl fmt::Display for AnnualTurnover {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnnualTurnover {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.code() == s.trim())
            .ok_or_else(|| DomainError::invalid_value("annual_turnover", s))
    }
}
