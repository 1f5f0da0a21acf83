//! Storefront configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use indie_commerce::{Currency, Money};
use serde::{Deserialize, Serialize};

/// `storefront.toml`, baked into the bundle at build time.
const EMBEDDED_CONFIG: &str = include_str!("../storefront.toml");

/// Storefront configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Brand name shown in the nav, hero and footer.
    pub brand: String,
    /// Hero tagline.
    pub tagline: String,
    /// Currency used for delivery thresholds.
    pub currency: Currency,
    /// How long the add-to-cart toast stays visible.
    pub toast_duration_ms: u64,
    /// Order total from which delivery inside the city is free.
    pub free_delivery_from: i64,
    /// `tracing` filter directives.
    pub log_filter: String,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            brand: "INDIE EAT".to_string(),
            tagline: "Вкус без границ. Доставка в твой район.".to_string(),
            currency: Currency::RUB,
            toast_duration_ms: 2500,
            free_delivery_from: 1000,
            log_filter: default_log_filter().to_string(),
        }
    }
}

impl StorefrontConfig {
    /// Parse the config compiled into the bundle.
    pub fn embedded() -> Result<Self> {
        Self::from_toml_str(EMBEDDED_CONFIG).context("Failed to parse embedded storefront.toml")
    }

    /// Parse a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("Invalid TOML storefront config")?;
        config.validate()
    }

    /// Parse a JSON document.
    pub fn from_json_str(content: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(content).context("Invalid JSON storefront config")?;
        config.validate()
    }

    /// Load config from a file, picking the format from its extension.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            Self::from_json_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Toast lifetime.
    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }

    /// Free delivery threshold as money.
    pub fn free_delivery_threshold(&self) -> Money {
        Money::new(self.free_delivery_from, self.currency)
    }

    fn validate(self) -> Result<Self> {
        anyhow::ensure!(!self.brand.trim().is_empty(), "brand must not be empty");
        anyhow::ensure!(
            self.free_delivery_from >= 0,
            "free_delivery_from must not be negative (got {})",
            self.free_delivery_from
        );
        Ok(self)
    }
}

/// Debug builds log our own crates at debug level.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "info,indie_commerce=debug,indie_eat=debug"
    } else {
        "info"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_config_parses() {
        let config = StorefrontConfig::embedded().unwrap();
        assert_eq!(config.brand, "INDIE EAT");
        assert_eq!(config.free_delivery_threshold(), Money::new(1000, Currency::RUB));
        assert_eq!(config.toast_duration(), Duration::from_millis(2500));
        assert_eq!(config.log_filter, default_log_filter());
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = StorefrontConfig::from_toml_str("toast_duration_ms = 1000").unwrap();
        assert_eq!(config.toast_duration_ms, 1000);
        assert_eq!(config.brand, StorefrontConfig::default().brand);
    }

    #[test]
    fn test_json_config() {
        let config =
            StorefrontConfig::from_json_str(r#"{"currency": "USD", "free_delivery_from": 40}"#)
                .unwrap();
        assert_eq!(config.free_delivery_threshold().display(), "$40");
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(StorefrontConfig::from_toml_str("brand = \"  \"").is_err());
        assert!(StorefrontConfig::from_toml_str("free_delivery_from = -1").is_err());
        assert!(StorefrontConfig::from_toml_str("currency = \"XYZ\"").is_err());
        assert!(StorefrontConfig::from_toml_str("toast_duration_ms = \"soon\"").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("indie-eat-config-{}.toml", std::process::id()));
        std::fs::write(&path, "brand = \"GLITCH KITCHEN\"\n").unwrap();

        let config = StorefrontConfig::load(path.to_str().unwrap()).unwrap();
        assert_eq!(config.brand, "GLITCH KITCHEN");

        std::fs::remove_file(&path).unwrap();
        let err = StorefrontConfig::load(path.to_str().unwrap()).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
