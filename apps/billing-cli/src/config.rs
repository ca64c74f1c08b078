//! CLI configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use billing_core::money::{DEFAULT_CURRENCY_CODE, DEFAULT_LOCALE};
use billing_core::words::DEFAULT_WORDS_LABEL;
use billing_core::Locale;

/// Billing CLI configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Number formatting locale (`BILLING_LOCALE`, default `en-IN`)
    pub locale: Locale,

    /// ISO 4217 code for on-screen amounts (`BILLING_CURRENCY`, default `INR`)
    pub currency_code: String,

    /// Prefix of the amount in words (`BILLING_WORDS_LABEL`)
    pub words_label: String,

    /// Optional JSON tax catalog (`BILLING_TAX_CATALOG`)
    pub tax_catalog_path: Option<PathBuf>,

    /// tracing filter directive (`BILLING_LOG`, default `info`)
    pub log_filter: String,
}

impl BillingConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_vars(env::vars().collect())
    }

    /// Builds the configuration from an explicit variable map.
    pub fn from_vars(vars: HashMap<String, String>) -> Result<Self, ConfigError> {
        let get = |key: &str| {
            vars.get(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let locale = match get("BILLING_LOCALE") {
            Some(raw) => raw
                .parse()
                .map_err(|_| ConfigError::InvalidValue("BILLING_LOCALE".to_string()))?,
            None => DEFAULT_LOCALE,
        };

        let currency_code = get("BILLING_CURRENCY")
            .unwrap_or_else(|| DEFAULT_CURRENCY_CODE.to_string())
            .to_ascii_uppercase();
        if currency_code.len() != 3 || !currency_code.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::InvalidValue("BILLING_CURRENCY".to_string()));
        }

        let config = BillingConfig {
            locale,
            currency_code,
            // empty label is allowed: words without a currency prefix
            words_label: vars
                .get("BILLING_WORDS_LABEL")
                .cloned()
                .unwrap_or_else(|| DEFAULT_WORDS_LABEL.to_string()),
            tax_catalog_path: get("BILLING_TAX_CATALOG").map(PathBuf::from),
            log_filter: get("BILLING_LOG").unwrap_or_else(|| "info".to_string()),
        };

        Ok(config)
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        BillingConfig {
            locale: DEFAULT_LOCALE,
            currency_code: DEFAULT_CURRENCY_CODE.to_string(),
            words_label: DEFAULT_WORDS_LABEL.to_string(),
            tax_catalog_path: None,
            log_filter: "info".to_string(),
        }
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = BillingConfig::from_vars(HashMap::new()).unwrap();
        assert_eq!(config.locale, Locale::EnIn);
        assert_eq!(config.currency_code, "INR");
        assert_eq!(config.words_label, "Indian Rupee");
        assert!(config.tax_catalog_path.is_none());
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_overrides() {
        let config = BillingConfig::from_vars(vars(&[
            ("BILLING_LOCALE", "en-US"),
            ("BILLING_CURRENCY", "usd"),
            ("BILLING_WORDS_LABEL", ""),
            ("BILLING_TAX_CATALOG", "/etc/billing/tax.json"),
            ("BILLING_LOG", "billing_core=debug"),
        ]))
        .unwrap();
        assert_eq!(config.locale, Locale::EnUs);
        assert_eq!(config.currency_code, "USD");
        assert_eq!(config.words_label, "");
        assert_eq!(
            config.tax_catalog_path,
            Some(PathBuf::from("/etc/billing/tax.json"))
        );
        assert_eq!(config.log_filter, "billing_core=debug");
    }

    #[test]
    fn test_invalid_values() {
        let err = BillingConfig::from_vars(vars(&[("BILLING_LOCALE", "de-DE")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for BILLING_LOCALE");

        let err = BillingConfig::from_vars(vars(&[("BILLING_CURRENCY", "RUPEE")])).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for BILLING_CURRENCY");
    }
}
