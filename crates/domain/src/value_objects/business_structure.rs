//! Legal structure of a business

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// Legal structure a business is registered under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessStructure {
    SoleTrader,
    Partnership,
    Company,
    Trust,
    Cooperative,
}

/// Plain-language explanation of a business structure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructureHelp {
    pub title: &'static str,
    pub description: &'static str,
    pub example: &'static str,
    pub why_choose: &'static str,
    pub pros: [&'static str; 3],
    pub cons: [&'static str; 3],
}

impl BusinessStructure {
    pub const ALL: [Self; 5] = [
        Self::SoleTrader,
        Self::Partnership,
        Self::Company,
        Self::Trust,
        Self::Cooperative,
    ];

    /// Wire code (e.g. `"sole_trader"`)
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::SoleTrader => "sole_trader",
            Self::Partnership => "partnership",
            Self::Company => "company",
            Self::Trust => "trust",
            Self::Cooperative => "cooperative",
        }
    }

    /// Explanation shown next to the structure selector
    #[must_use]
    pub const fn help(&self) -> StructureHelp {
        match self {
            Self::SoleTrader => StructureHelp {
                title: "Sole Trader",
                description: "You run the business by yourself as an individual. You're fully \
                              responsible for everything, like profits, debts, and legal obligations.",
                example: "A mechanic working alone, fixing cars from a small garage.",
                why_choose: "Easiest and cheapest to start. You keep all profits but pay personal \
                             income tax. You're personally liable for debts.",
                pros: ["Simple to set up", "Keep all profits", "Full control"],
                cons: [
                    "Personal liability",
                    "Limited growth potential",
                    "All responsibility on you",
                ],
            },
            Self::Partnership => StructureHelp {
                title: "Partnership",
                description: "Two or more people share ownership of a business. You split profits, \
                              losses, and responsibilities based on an agreement.",
                example: "Two mechanics starting a repair shop together, sharing costs and work.",
                why_choose: "Simple to set up, shared workload. Each partner is personally liable \
                             for business debts, even if caused by others.",
                pros: ["Shared workload", "More resources", "Simple setup"],
                cons: ["Joint liability", "Potential conflicts", "Shared profits"],
            },
            Self::Company => StructureHelp {
                title: "Company",
                description: "A separate legal entity that can own assets, borrow money, or be sued \
                              on its own. You (and others) own shares in it.",
                example: "A mechanic sets up 'Joe's Auto Repairs Pty Ltd' to limit personal \
                          liability and grow the business.",
                why_choose: "Protects personal assets (limited liability). More complex to run, \
                             with higher setup costs and reporting to ASIC.",
                pros: ["Limited liability", "Professional image", "Growth potential"],
                cons: ["More complex", "Higher costs", "More regulations"],
            },
            Self::Trust => StructureHelp {
                title: "Trust",
                description: "A structure where a trustee (person or company) manages the business \
                              or assets for beneficiaries (people who get the profits).",
                example: "A mechanic sets up a trust to run the business, with family members as \
                          beneficiaries to share profits.",
                why_choose: "Can offer tax benefits and asset protection but is complex and costly \
                             to set up. Needs a formal trust deed.",
                pros: ["Tax flexibility", "Asset protection", "Income distribution"],
                cons: ["Very complex", "High setup costs", "Ongoing compliance"],
            },
            Self::Cooperative => StructureHelp {
                title: "Cooperative",
                description: "A group of people or businesses working together under a shared \
                              ownership model, often to achieve a common goal.",
                example: "Several mechanics form a co-operative to buy tools or share a workshop \
                          space, splitting costs and profits.",
                why_choose: "Good for collaboration, democratic control (one member, one vote). \
                             Requires registration and specific rules.",
                pros: ["Democratic control", "Shared resources", "Community focus"],
                cons: ["Slow decisions", "Limited flexibility", "Registration required"],
            },
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.help().title
    }
}

impl fmt::Display for BusinessStructure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BusinessStructure {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|v| v.code() == s.trim())
            .ok_or_else(|| DomainError::invalid_value("business_structure", s))
    }
}
