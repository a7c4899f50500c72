//! CLI configuration.

use std::path::Path;
use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use storefront_catalog::links::DEFAULT_ASSET_BASE;
use storefront_catalog::{Currency, Money};
use storefront_data::{BackoffStrategy, FetchPolicy, RetryPolicy};

/// Default location of the catalog export, relative to the working directory.
pub const DEFAULT_CATALOG_PATH: &str = "data/product_catalog_v2.csv";

/// Storefront configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StorefrontConfig {
    /// Where the catalog export is read from.
    #[serde(default)]
    pub source: SourceConfig,

    /// Remote fetch behavior.
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Presentation settings.
    #[serde(default)]
    pub storefront: DisplayConfig,
}

impl StorefrontConfig {
    /// Load config from a file. `.json` files are JSON, everything else TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
        }
    }
}

/// Catalog export location. `url` wins over `path` when both are set.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path to the export on disk.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// URL of the export.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Timeout and retry settings for HTTP sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Per-attempt timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Retries after the first attempt.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// First backoff delay in milliseconds.
    #[serde(default = "default_backoff_base_ms")]
    pub backoff_base_ms: u64,

    /// Backoff cap in milliseconds.
    #[serde(default = "default_backoff_max_ms")]
    pub backoff_max_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_max_retries() -> u32 {
    2
}

fn default_backoff_base_ms() -> u64 {
    100
}

fn default_backoff_max_ms() -> u64 {
    2_000
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            max_retries: default_max_retries(),
            backoff_base_ms: default_backoff_base_ms(),
            backoff_max_ms: default_backoff_max_ms(),
        }
    }
}

impl FetchConfig {
    /// Build the fetch policy for an HTTP source.
    pub fn policy(&self) -> FetchPolicy {
        let retry = RetryPolicy::new(self.max_retries).with_backoff(BackoffStrategy::Exponential {
            base: Duration::from_millis(self.backoff_base_ms),
            max: Duration::from_millis(self.backoff_max_ms),
        });
        FetchPolicy::new(Duration::from_millis(self.timeout_ms), retry)
    }
}

/// Presentation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Base path for product images.
    #[serde(default = "default_asset_base")]
    pub asset_base: String,

    /// Currency code used when formatting prices.
    #[serde(default = "default_currency")]
    pub currency: String,

    /// Flat delivery charge added at checkout.
    #[serde(default = "default_delivery_charge")]
    pub delivery_charge: f64,
}

fn default_asset_base() -> String {
    DEFAULT_ASSET_BASE.to_string()
}

fn default_currency() -> String {
    Currency::USD.code().to_string()
}

fn default_delivery_charge() -> f64 {
    5.0
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            asset_base: default_asset_base(),
            currency: default_currency(),
            delivery_charge: default_delivery_charge(),
        }
    }
}

impl DisplayConfig {
    /// The configured currency.
    pub fn currency(&self) -> Result<Currency> {
        Currency::from_code(&self.currency)
            .ok_or_else(|| anyhow!("Unsupported currency '{}' (expected USD, EUR or GBP)", self.currency))
    }

    /// The delivery charge in the configured currency.
    pub fn delivery_charge(&self) -> Result<Money> {
        if !self.delivery_charge.is_finite() || self.delivery_charge < 0.0 {
            return Err(anyhow!(
                "Invalid delivery charge {}: must be a non-negative amount",
                self.delivery_charge
            ));
        }
        Ok(Money::from_decimal(self.delivery_charge, self.currency()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.source, SourceConfig::default());
        assert_eq!(config.storefront.asset_base, "/data");
        assert_eq!(config.storefront.currency().unwrap(), Currency::USD);
        assert_eq!(config.storefront.delivery_charge().unwrap().display(), "$5.00");
        assert_eq!(config.fetch.policy(), FetchPolicy::default());
    }

    #[test]
    fn test_partial_toml() {
        let config: StorefrontConfig = toml::from_str(
            r#"
[source]
url = "http://localhost:3000/data/product_catalog_v2.csv"

[fetch]
max_retries = 5

[storefront]
currency = "eur"
"#,
        )
        .unwrap();

        assert_eq!(config.source.path, None);
        assert_eq!(config.fetch.max_retries, 5);
        assert_eq!(config.fetch.timeout_ms, 10_000);
        assert_eq!(config.fetch.policy().retry.max_attempts, 5);
        assert_eq!(config.storefront.currency().unwrap(), Currency::EUR);
        assert_eq!(config.storefront.delivery_charge().unwrap().amount_cents, 500);
    }

    #[test]
    fn test_load_json_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"source": {{"path": "exports/catalog.csv"}}}}"#).unwrap();

        let config = StorefrontConfig::load(file.path()).unwrap();
        assert_eq!(config.source.path.as_deref(), Some("exports/catalog.csv"));
        assert_eq!(config.fetch, FetchConfig::default());
    }

    #[test]
    fn test_bad_settings_are_errors() {
        let display = DisplayConfig {
            currency: "JPY".to_string(),
            ..DisplayConfig::default()
        };
        assert!(display.currency().is_err());

        let display = DisplayConfig {
            delivery_charge: -1.0,
            ..DisplayConfig::default()
        };
        assert!(display.delivery_charge().is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = StorefrontConfig::load("/nonexistent/storefront.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
