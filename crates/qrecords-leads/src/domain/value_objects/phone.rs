//! Phone Value Object
//!
//! German phone number as entered on the demo request form.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Optional `+49`, `0049` or `0` prefix, then a non-zero digit and 1-14 more.
/// Digits are ASCII only; `\d` would also admit other Unicode digit classes.
pub const GERMAN_PHONE_PATTERN: &str = r"^(\+49|0049|0)?[1-9][0-9]{1,14}$";

static GERMAN_PHONE: Lazy<Regex> =
    Lazy::new(|| Regex::new(GERMAN_PHONE_PATTERN).expect("phone pattern is valid"));

/// Phone number value object
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse a non-empty phone number. The value is stored as typed.
    pub fn parse(value: &str) -> Result<Self, PhoneError> {
        if GERMAN_PHONE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(PhoneError::InvalidFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Format as E.164 (`+49...`) for `tel:` links.
    pub fn to_e164(&self) -> String {
        let national = if let Some(rest) = self.0.strip_prefix("+49") {
            rest
        } else if let Some(rest) = self.0.strip_prefix("0049") {
            rest
        } else if let Some(rest) = self.0.strip_prefix('0') {
            rest
        } else {
            &self.0
        };
        format!("+49{}", national)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PhoneError {
    #[error("Bitte geben Sie eine gültige deutsche Telefonnummer ein")]
    InvalidFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_common_prefixes() {
        for number in ["+493012345678", "00493012345678", "03012345678", "3012345678"] {
            assert!(PhoneNumber::parse(number).is_ok(), "{number} should be accepted");
        }
    }

    #[test]
    fn test_rejects_formatted_numbers() {
        assert!(PhoneNumber::parse("+49 30 12345678").is_err());
        assert!(PhoneNumber::parse("030/123456").is_err());
    }

    #[test]
    fn test_rejects_leading_zero_after_prefix() {
        assert!(PhoneNumber::parse("+490301234").is_err());
        assert!(PhoneNumber::parse("00301234").is_err());
    }

    #[test]
    fn test_rejects_too_short_and_too_long() {
        assert!(PhoneNumber::parse("1").is_err());
        assert!(PhoneNumber::parse("1234567890123456").is_err());
    }

    #[test]
    fn test_rejects_non_ascii_digits() {
        assert!(PhoneNumber::parse("٣٠١٢٣٤٥").is_err());
    }

    #[test]
    fn test_e164() {
        assert_eq!(PhoneNumber::parse("03012345678").unwrap().to_e164(), "+493012345678");
        assert_eq!(PhoneNumber::parse("00493012345678").unwrap().to_e164(), "+493012345678");
        assert_eq!(PhoneNumber::parse("+493012345678").unwrap().to_e164(), "+493012345678");
        assert_eq!(PhoneNumber::parse("3012345678").unwrap().to_e164(), "+493012345678");
    }

    proptest! {
        #[test]
        fn matching_numbers_are_accepted(
            prefix in prop::sample::select(vec!["", "0", "+49", "0049"]),
            number in "[1-9][0-9]{1,14}",
        ) {
            let value = format!("{prefix}{number}");
            prop_assert!(PhoneNumber::parse(&value).is_ok());
        }

        #[test]
        fn numbers_with_separators_are_rejected(
            head in "[1-9][0-9]{1,5}",
            separator in prop::sample::select(vec![" ", "-", "/", "."]),
            tail in "[0-9]{1,6}",
        ) {
            let value = format!("0{head}{separator}{tail}");
            prop_assert!(PhoneNumber::parse(&value).is_err());
        }
    }
}
