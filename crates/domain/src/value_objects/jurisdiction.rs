//! Australian states, territories, and regulatory jurisdictions

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// One of the eight Australian states and territories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AustralianState {
    Nsw,
    Vic,
    Qld,
    Wa,
    Sa,
    Tas,
    Act,
    Nt,
}

impl AustralianState {
    /// All states in display order
    pub const ALL: [Self; 8] = [
        Self::Nsw,
        Self::Vic,
        Self::Qld,
        Self::Wa,
        Self::Sa,
        Self::Tas,
        Self::Act,
        Self::Nt,
    ];

    /// Short code as stored by the entity store (e.g. `"NSW"`)
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Nsw => "NSW",
            Self::Vic => "VIC",
            Self::Qld => "QLD",
            Self::Wa => "WA",
            Self::Sa => "SA",
            Self::Tas => "TAS",
            Self::Act => "ACT",
            Self::Nt => "NT",
        }
    }

    /// Full name of the state or territory
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Nsw => "New South Wales",
            Self::Vic => "Victoria",
            Self::Qld => "Queensland",
            Self::Wa => "Western Australia",
            Self::Sa => "South Australia",
            Self::Tas => "Tasmania",
            Self::Act => "Australian Capital Territory",
            Self::Nt => "Northern Territory",
        }
    }
}

impl fmt::Display for AustralianState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for AustralianState {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|state| state.code().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DomainError::invalid_value("state", s))
    }
}

/// Level of government a compliance item belongs to
///
/// Unrecognised codes are treated as federal, matching how the dashboard
/// badges unknown jurisdictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Jurisdiction {
    #[default]
    Federal,
    State(AustralianState),
}

impl Jurisdiction {
    /// Code as stored by the entity store
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Federal => "FEDERAL",
            Self::State(state) => state.code(),
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl From<String> for Jurisdiction {
    fn from(value: String) -> Self {
        value.parse().map_or(Self::Federal, Self::State)
    }
}

impl From<Jurisdiction> for String {
    fn from(value: Jurisdiction) -> Self {
        value.code().to_string()
    }
}

/// Entry of a compliance item's `applicable_states` list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StateScope {
    /// Applies in every state (`"ALL"`)
    All,
    State(AustralianState),
    /// Code the store sent that is not a known state; kept verbatim
    Other(String),
}

impl StateScope {
    /// Check whether this scope covers the given state
    #[must_use]
    pub fn covers(&self, state: AustralianState) -> bool {
        match self {
            Self::All => true,
            Self::State(s) => *s == state,
            Self::Other(_) => false,
        }
    }
}

impl From<String> for StateScope {
    fn from(value: String) -> Self {
        if value.eq_ignore_ascii_case("ALL") {
            return Self::All;
        }
        value.parse().map_or(Self::Other(value), Self::State)
    }
}

impl From<StateScope> for String {
    fn from(value: StateScope) -> Self {
        match value {
            StateScope::All => "ALL".to_string(),
            StateScope::State(state) => state.code().to_string(),
            StateScope::Other(raw) => raw,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_codes_parse_case_insensitively() {
        assert_eq!("vic".parse::<AustralianState>().unwrap(), AustralianState::Vic);
        assert_eq!(" NT ".parse::<AustralianState>().unwrap(), AustralianState::Nt);
        assert!("XYZ".parse::<AustralianState>().is_err());
    }

    #[test]
    fn state_serializes_as_code() {
        assert_eq!(
            serde_json::to_string(&AustralianState::Nsw).unwrap(),
            "\"NSW\""
        );
        let parsed: AustralianState = serde_json::from_str("\"TAS\"").unwrap();
        assert_eq!(parsed, AustralianState::Tas);
    }

    #[test]
    fn jurisdiction_falls_back_to_federal() {
        let j: Jurisdiction = serde_json::from_str("\"QLD\"").unwrap();
        assert_eq!(j, Jurisdiction::State(AustralianState::Qld));
        let j: Jurisdiction = serde_json::from_str("\"FEDERAL\"").unwrap();
        assert_eq!(j, Jurisdiction::Federal);
        let j: Jurisdiction = serde_json::from_str("\"National\"").unwrap();
        assert_eq!(j, Jurisdiction::Federal);
    }

    #[test]
    fn state_scope_all_covers_everything() {
        let scope = StateScope::from("ALL".to_string());
        assert!(AustralianState::ALL.iter().all(|s| scope.covers(*s)));
    }

    #[test]
    fn state_scope_keeps_unknown_codes() {
        let scope: StateScope = serde_json::from_str("\"NZ\"").unwrap();
        assert_eq!(scope, StateScope::Other("NZ".to_string()));
        assert!(!scope.covers(AustralianState::Nsw));
        assert_eq!(serde_json::to_string(&scope).unwrap(), "\"NZ\"");
    }
}
