//! Validated destination phone numbers.
//!
//! Construction through [`PhoneNumber::parse`] is the only way to obtain a
//! value, so every number the dispatcher hands to a provider has already
//! passed format validation and is normalized to E.164.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

// North American numbering plan: optional 1/+1 country code, then ten digits
// where the area code does not start with 0 or 1.
static NANP_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\+?1)?([2-9]\d{9})$").unwrap()
});

// International phone number (E.164 format)
static INTERNATIONAL_PHONE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+[1-9]\d{1,14}$").unwrap()
});

/// A validated, normalized destination phone number in E.164 form
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Validate and normalize a raw destination string
    ///
    /// Accepts North American numbers with optional country code and common
    /// separators (`(555) 123-4567`, `1-555-123-4567`), normalized to
    /// `+1NNNNNNNNNN`, and numbers already in E.164 form (`+447911123456`),
    /// kept verbatim.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::EmptyInput`] when the input is empty or blank
    /// * [`ValidationError::InvalidFormat`] when the input matches no
    ///   accepted numbering pattern
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        if raw.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let normalized = normalize(raw);

        if let Some(captures) = NANP_REGEX.captures(&normalized) {
            return Ok(Self(format!("+1{}", &captures[1])));
        }

        if INTERNATIONAL_PHONE_REGEX.is_match(&normalized) {
            return Ok(Self(normalized));
        }

        Err(ValidationError::InvalidFormat {
            input: mask_phone_number(raw),
        })
    }

    /// The normalized E.164 representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Masked representation for log lines (last four digits visible)
    pub fn masked(&self) -> String {
        mask_phone_number(&self.0)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Strip separator characters, keeping digits and a leading `+`
fn normalize(raw: &str) -> String {
    raw.trim()
        .char_indices()
        .filter(|(i, c)| c.is_ascii_digit() || (*c == '+' && *i == 0))
        .map(|(_, c)| c)
        .collect()
}

/// Mask a phone number for logging, showing only the last four digits
///
/// Counts characters, not bytes: raw caller input reaches this through
/// rejection log lines and is not guaranteed to be ASCII.
pub fn mask_phone_number(phone: &str) -> String {
    let chars: Vec<char> = phone.trim().chars().collect();
    if chars.len() <= 4 {
        return "*".repeat(chars.len());
    }

    let visible: String = chars[chars.len() - 4..].iter().collect();
    if chars[0] == '+' {
        format!("+{}{}", "*".repeat(chars.len() - 5), visible)
    } else {
        format!("{}{}", "*".repeat(chars.len() - 4), visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_north_american_formats() {
        for raw in [
            "5551234567",
            "555-123-4567",
            "(555) 123-4567",
            "555.123.4567",
            "1-555-123-4567",
            "+1 555 123 4567",
            "15551234567",
        ] {
            let phone = PhoneNumber::parse(raw).unwrap();
            assert_eq!(phone.as_str(), "+15551234567", "input: {raw}");
        }
    }

    #[test]
    fn test_parse_accepts_any_exchange_digit() {
        // Only the leading area-code digit is restricted; exchanges starting
        // with 0 or 1 are valid destinations.
        let phone = PhoneNumber::parse("(555) 123-4567").unwrap();
        assert_eq!(phone.as_str(), "+15551234567");

        let phone = PhoneNumber::parse("555-023-4567").unwrap();
        assert_eq!(phone.as_str(), "+15550234567");
    }

    #[test]
    fn test_parse_international_passthrough() {
        let phone = PhoneNumber::parse("+447911123456").unwrap();
        assert_eq!(phone.as_str(), "+447911123456");

        let phone = PhoneNumber::parse("+86 138 1234 5678").unwrap();
        assert_eq!(phone.as_str(), "+8613812345678");
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(PhoneNumber::parse(""), Err(ValidationError::EmptyInput));
        assert_eq!(PhoneNumber::parse("   "), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_parse_invalid_formats() {
        for raw in [
            "123",
            "055-123-4567",     // area code starts with 0
            "555-123-456",      // too short
            "555-123-45678",    // eleven digits without country code
            "not a number",
            "+0123456789",      // invalid country code
        ] {
            assert!(
                matches!(
                    PhoneNumber::parse(raw),
                    Err(ValidationError::InvalidFormat { .. })
                ),
                "input: {raw}"
            );
        }
    }

    #[test]
    fn test_masking() {
        assert_eq!(mask_phone_number("+15551234567"), "+*******4567");
        assert_eq!(mask_phone_number("5551234567"), "******4567");
        assert_eq!(mask_phone_number("123"), "***");
        // Raw caller input may not be ASCII; masking must not panic
        assert_eq!(mask_phone_number("☎555-1234"), "*****1234");

        let phone = PhoneNumber::parse("5551234567").unwrap();
        assert_eq!(phone.masked(), "+*******4567");
    }
}
