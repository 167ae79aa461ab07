//! Form-field suggestions proposed by the assistant
//!
//! The assistant ends a reply with a marker of the form
//! `SUGGESTION: field_name="value"`. The marker is parsed into a
//! [`FieldSuggestion`] and removed from the text shown to the user.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Start of the marker; everything from here to the end is hidden
pub const SUGGESTION_MARKER: &str = "SUGGESTION:";

#[allow(clippy::expect_used)]
static SUGGESTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"SUGGESTION:\s*(\w+)="([^"]+)""#).expect("suggestion regex is valid")
});

/// A proposed value for one onboarding form field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSuggestion {
    pub field: String,
    pub value: String,
}

impl FieldSuggestion {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

/// Bot reply split into display text and an optional suggestion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReply {
    pub display_text: String,
    pub suggestion: Option<FieldSuggestion>,
}

/// Parse a raw assistant reply
///
/// The first marker match becomes the suggestion. The display text is the
/// reply with everything from the first `SUGGESTION:` onward removed, then
/// trimmed.
#[must_use]
pub fn parse_reply(raw: &str) -> ParsedReply {
    let suggestion = SUGGESTION_PATTERN
        .captures(raw)
        .map(|caps| FieldSuggestion::new(&caps[1], &caps[2]));

    let display_text = raw
        .find(SUGGESTION_MARKER)
        .map_or(raw, |idx| &raw[..idx])
        .trim()
        .to_string();

    ParsedReply {
        display_text,
        suggestion,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_and_strips_marker() {
        let reply = parse_reply(
            "Selling car parts falls under retail.\nSUGGESTION: industry_sector=\"retail\"",
        );
        assert_eq!(reply.display_text, "Selling car parts falls under retail.");
        assert_eq!(
            reply.suggestion,
            Some(FieldSuggestion::new("industry_sector", "retail"))
        );
    }

    #[test]
    fn reply_without_marker_is_unchanged() {
        let reply = parse_reply("  An ABN is an 11-digit number.  ");
        assert_eq!(reply.display_text, "An ABN is an 11-digit number.");
        assert_eq!(reply.suggestion, None);
    }

    #[test]
    fn malformed_marker_is_hidden_but_not_suggested() {
        let reply = parse_reply("Try a company. SUGGESTION: business_structure=company");
        assert_eq!(reply.display_text, "Try a company.");
        assert_eq!(reply.suggestion, None);
    }

    #[test]
    fn nested_field_names_do_not_match() {
        // \w+ does not include '.', so location.state is not a valid marker
        let reply = parse_reply("SUGGESTION: location.state=\"VIC\"");
        assert_eq!(reply.suggestion, None);
        assert_eq!(reply.display_text, "");
    }

    #[test]
    fn whitespace_after_colon_is_optional() {
        let reply = parse_reply("Ok SUGGESTION:employee_count=\"1-4\"");
        assert_eq!(
            reply.suggestion,
            Some(FieldSuggestion::new("employee_count", "1-4"))
        );
    }
}
