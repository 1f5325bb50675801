//! Email Value Object
//!
//! Address of a visitor, accepted only when it is well formed and carries a
//! resolvable-looking domain.

use email_address::EmailAddress;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static DOMAIN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9][A-Za-z0-9-]*\.)+[A-Za-z]{2,}$").expect("domain pattern is valid")
});

/// Email value object with validation
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an address exactly as typed by the visitor.
    pub fn parse(value: &str) -> Result<Self, EmailError> {
        if !EmailAddress::is_valid(value) {
            return Err(EmailError::InvalidFormat);
        }

        match value.rsplit_once('@') {
            Some((local, domain)) if !local.is_empty() && DOMAIN_PATTERN.is_match(domain) => {
                Ok(Self(value.to_string()))
            }
            _ => Err(EmailError::InvalidDomain),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Domain part, lowercased for comparisons.
    pub fn domain(&self) -> String {
        self.0
            .rsplit_once('@')
            .map(|(_, domain)| domain.to_lowercase())
            .unwrap_or_default()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Bitte geben Sie eine gültige E-Mail-Adresse ein")]
    InvalidFormat,
    #[error("Ungültige E-Mail-Domain")]
    InvalidDomain,
}
