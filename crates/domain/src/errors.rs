//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// Invalid email address format
    #[error("Invalid email address: {0}")]
    InvalidEmailAddress(String),

    /// Form field path does not name a known field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Value cannot be parsed for the given field
    #[error("Invalid value for {field}: {value}")]
    InvalidFieldValue { field: String, value: String },

    /// Operation is not valid in the current state
    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an invalid field value error
    pub fn invalid_value(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidFieldValue {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_value_creates_correct_error() {
        let err = DomainError::invalid_value("location.state", "XYZ");
        match err {
            DomainError::InvalidFieldValue { field, value } => {
                assert_eq!(field, "location.state");
                assert_eq!(value, "XYZ");
            },
            _ => unreachable!("Expected InvalidFieldValue error"),
        }
    }

    #[test]
    fn invalid_value_error_message() {
        let err = DomainError::invalid_value("industry_sector", "mining");
        assert_eq!(err.to_string(), "Invalid value for industry_sector: mining");
    }

    #[test]
    fn unknown_field_error_message() {
        let err = DomainError::UnknownField("location.planet".to_string());
        assert_eq!(err.to_string(), "Unknown field: location.planet");
    }

    #[test]
    fn invalid_transition_error_message() {
        let err = DomainError::InvalidTransition("onboarding already completed".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid transition: onboarding already completed"
        );
    }

    #[test]
    fn invalid_email_error_message() {
        let err = DomainError::InvalidEmailAddress("bad-email".to_string());
        assert_eq!(err.to_string(), "Invalid email address: bad-email");
    }
}
