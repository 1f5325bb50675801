//! Environment configuration
//!
//! Credentials are optional at load time. A missing required value surfaces as
//! [`ConfigError::Missing`] when an adapter first needs it; empty values count
//! as unset.

use std::env;

pub const AIRTABLE_API_KEY: &str = "AIRTABLE_API_KEY";
pub const AIRTABLE_BASE_ID: &str = "AIRTABLE_BASE_ID";
pub const AIRTABLE_TABLE_NAME: &str = "AIRTABLE_TABLE_NAME";
pub const AIRTABLE_API_URL: &str = "AIRTABLE_API_URL";
pub const RESEND_API_KEY: &str = "RESEND_API_KEY";
pub const RESEND_FROM_EMAIL: &str = "RESEND_FROM_EMAIL";
pub const RESEND_API_URL: &str = "RESEND_API_URL";
pub const ADMIN_EMAIL: &str = "ADMIN_EMAIL";
pub const APP_URL: &str = "APP_URL";

pub const DEFAULT_TABLE_NAME: &str = "Leads";
pub const DEFAULT_FROM_EMAIL: &str = "Q-Records <info@q-records-storemanager.de>";
pub const DEFAULT_ADMIN_EMAIL: &str = "info@q-records-storemanager.de";
pub const DEFAULT_APP_URL: &str = "https://q-records-storemanager.de";
pub const DEFAULT_AIRTABLE_API_URL: &str = "https://api.airtable.com";
pub const DEFAULT_RESEND_API_URL: &str = "https://api.resend.com";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),
}

fn require<'a>(value: &'a Option<String>, key: &'static str) -> Result<&'a str, ConfigError> {
    value.as_deref().ok_or(ConfigError::Missing(key))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AirtableConfig {
    api_key: Option<String>,
    base_id: Option<String>,
    pub table_name: String,
    pub api_base_url: String,
}

impl AirtableConfig {
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        require(&self.api_key, AIRTABLE_API_KEY)
    }

    pub fn base_id(&self) -> Result<&str, ConfigError> {
        require(&self.base_id, AIRTABLE_BASE_ID)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResendConfig {
    api_key: Option<String>,
    pub from_email: String,
    pub admin_email: String,
    pub api_base_url: String,
}

impl ResendConfig {
    pub fn api_key(&self) -> Result<&str, ConfigError> {
        require(&self.api_key, RESEND_API_KEY)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub url: String,
}

/// Lead pipeline configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadsConfig {
    pub airtable: AirtableConfig,
    pub resend: ResendConfig,
    pub app: AppConfig,
}

impl LeadsConfig {
    /// Read the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Read configuration through any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
        let or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        Self {
            airtable: AirtableConfig {
                api_key: get(AIRTABLE_API_KEY),
                base_id: get(AIRTABLE_BASE_ID),
                table_name: or(AIRTABLE_TABLE_NAME, DEFAULT_TABLE_NAME),
                api_base_url: or(AIRTABLE_API_URL, DEFAULT_AIRTABLE_API_URL),
            },
            resend: ResendConfig {
                api_key: get(RESEND_API_KEY),
                from_email: or(RESEND_FROM_EMAIL, DEFAULT_FROM_EMAIL),
                admin_email: or(ADMIN_EMAIL, DEFAULT_ADMIN_EMAIL),
                api_base_url: or(RESEND_API_URL, DEFAULT_RESEND_API_URL),
            },
            app: AppConfig { url: or(APP_URL, DEFAULT_APP_URL) },
        }
    }

    /// Required variables that are unset, for startup warnings.
    pub fn missing_required(&self) -> Vec<&'static str> {
        [
            self.airtable.api_key().err(),
            self.airtable.base_id().err(),
            self.resend.api_key().err(),
        ]
        .into_iter()
        .flatten()
        .map(|ConfigError::Missing(key)| key)
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> LeadsConfig {
        let vars: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        LeadsConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config(&[]);
        assert_eq!(config.airtable.table_name, "Leads");
        assert_eq!(config.resend.from_email, "Q-Records <info@q-records-storemanager.de>");
        assert_eq!(config.resend.admin_email, "info@q-records-storemanager.de");
        assert_eq!(config.app.url, "https://q-records-storemanager.de");
        assert_eq!(config.airtable.api_base_url, "https://api.airtable.com");
    }

    #[test]
    fn test_missing_required_values() {
        let config = config(&[(AIRTABLE_API_KEY, "key"), (AIRTABLE_BASE_ID, "")]);
        assert_eq!(config.airtable.api_key(), Ok("key"));
        assert_eq!(config.airtable.base_id(), Err(ConfigError::Missing(AIRTABLE_BASE_ID)));
        assert_eq!(config.missing_required(), vec![AIRTABLE_BASE_ID, RESEND_API_KEY]);
        assert_eq!(
            config.resend.api_key().unwrap_err().to_string(),
            "Missing environment variable: RESEND_API_KEY"
        );
    }

    #[test]
    fn test_empty_optional_values_fall_back() {
        let config = config(&[(AIRTABLE_TABLE_NAME, ""), (ADMIN_EMAIL, "sales@laden.de")]);
        assert_eq!(config.airtable.table_name, "Leads");
        assert_eq!(config.resend.admin_email, "sales@laden.de");
    }
}
