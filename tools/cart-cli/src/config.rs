//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_cart::money::PriceFormat;
use turbo_cart::view::{NoticeConfig, ViewConfig};

/// Config file names searched for, in order.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["cart.toml", ".cart.toml", "cart.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CliConfig {
    /// How amounts are printed.
    #[serde(default)]
    pub display: PriceFormat,

    /// Notice texts and styles.
    #[serde(default)]
    pub notices: NoticeConfig,

    /// Log output.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl CliConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        Self::parse(path, &content)
    }

    /// Parse config content, choosing the format by file extension.
    pub fn parse(path: &str, content: &str) -> Result<Self> {
        if path.ends_with(".json") {
            serde_json::from_str(content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(content).with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Settings handed to the cart view.
    pub fn view_config(&self) -> ViewConfig {
        ViewConfig {
            display: self.display.clone(),
            notices: self.notices.clone(),
        }
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset (e.g., "warn", "turbo_cart=debug").
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

/// Output format for logs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable format (for development).
    #[default]
    Human,
    /// JSON format (for log aggregation).
    Json,
}

/// Generate a default cart.toml config file.
pub fn generate_default_config() -> String {
    r#"# Cart page configuration

[display]
symbol = "$"

[notices]
discount_message = "Discount Applied"
discount_duration_ms = 1000
discount_icon = "👏"
checkout_message = "Checkout Successful"
checkout_icon = "🚀"

[logging]
# Overridden by RUST_LOG when set.
level = "warn"
format = "human"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_file_matches_defaults() {
        let parsed = CliConfig::parse("cart.toml", &generate_default_config()).unwrap();
        assert_eq!(parsed, CliConfig::default());
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let parsed = CliConfig::parse(
            "cart.toml",
            r#"
[display]
symbol = "€"

[notices]
discount_duration_ms = 2500
"#,
        )
        .unwrap();

        assert_eq!(parsed.display.symbol, "€");
        assert_eq!(parsed.notices.discount_duration_ms, 2500);
        assert_eq!(parsed.notices.discount_message, "Discount Applied");
        assert_eq!(parsed.logging, LoggingConfig::default());
    }

    #[test]
    fn test_json_config() {
        let parsed = CliConfig::parse(
            "cart.json",
            r#"{"logging": {"level": "debug", "format": "json"}}"#,
        )
        .unwrap();
        assert_eq!(parsed.logging.level, "debug");
        assert_eq!(parsed.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_invalid_config_is_error() {
        assert!(CliConfig::parse("cart.toml", "[display\nsymbol = 1").is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cart.toml");
        let path = path.to_str().unwrap();

        let mut config = CliConfig::default();
        config.notices.checkout_icon = "✅".to_string();
        config.save(path).unwrap();

        assert_eq!(CliConfig::load(path).unwrap(), config);
    }

    #[test]
    fn test_view_config() {
        let mut config = CliConfig::default();
        config.display.symbol = "£".to_string();
        assert_eq!(config.view_config().display.symbol, "£");
    }
}
