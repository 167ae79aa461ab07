//! Compliance item category

use serde::{Deserialize, Serialize};
use std::fmt;

/// Area of regulation a compliance item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ComplianceCategory {
    Registration,
    Licensing,
    Taxation,
    WorkplaceSafety,
    Environmental,
    Privacy,
    Financial,
    IndustrySpecific,
    #[default]
    #[serde(other)]
    Other,
}

impl ComplianceCategory {
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Registration => "Registration",
            Self::Licensing => "Licensing",
            Self::Taxation => "Taxation",
            Self::WorkplaceSafety => "Workplace Safety",
            Self::Environmental => "Environmental",
            Self::Privacy => "Privacy",
            Self::Financial => "Financial",
            Self::IndustrySpecific => "Industry Specific",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for ComplianceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
