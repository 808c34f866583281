//! Configuration types.
//!
//! Configuration lives in an optional `config.toml`. Every field has a default,
//! so a missing file or a partial file is fine.
//!
//! ```toml
//! tax_rate = "0.08"
//!
//! [display]
//! currency_symbol = "$"
//!
//! [[menu.entrees]]
//! name = "Burrito"
//! price = "5.00"
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;
use crate::menu::Menu;

const APP_DIR: &str = "lunch-tray";
const CONFIG_FILE: &str = "config.toml";

/// Runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Sales tax applied to the item total, as a fraction (0.08 = 8%).
    #[serde(default = "default_tax_rate")]
    pub tax_rate: Decimal,

    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,

    /// Menu override. The built-in menu is used when absent.
    #[serde(default)]
    pub menu: Option<Menu>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            tax_rate: default_tax_rate(),
            display: DisplayConfig::default(),
            menu: None,
        }
    }
}

fn default_tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Display configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Prefix used when rendering prices, e.g. "$"
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency_symbol(),
        }
    }
}

fn default_currency_symbol() -> String {
    "$".to_string()
}

impl AppConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tax_rate.is_sign_negative() || self.tax_rate > Decimal::ONE {
            return Err(ConfigError::InvalidTaxRate(self.tax_rate.to_string()));
        }
        Ok(())
    }

    /// The menu to offer: the override if one was configured, else the built-in one.
    pub fn menu(&self) -> Menu {
        self.menu.clone().unwrap_or_else(Menu::builtin)
    }
}

/// Load configuration from a file.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
    let config = AppConfig::from_toml_str(&contents)?;
    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR))
}

/// Find an existing config file.
///
/// Tries paths in order:
/// 1. XDG-style: ~/.config/lunch-tray/config.toml
/// 2. Platform config dir (e.g. ~/Library/Application Support/lunch-tray/config.toml)
pub fn find_config_path() -> Option<PathBuf> {
    if let Some(home) = dirs::home_dir() {
        let xdg_path = home.join(".config").join(APP_DIR).join(CONFIG_FILE);
        if xdg_path.exists() {
            return Some(xdg_path);
        }
    }

    let path = config_dir()?.join(CONFIG_FILE);
    if path.exists() {
        Some(path)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::MenuCategory;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tax_rate, Decimal::new(8, 2));
        assert_eq!(config.display.currency_symbol, "$");
        assert_eq!(config.menu(), Menu::builtin());
    }

    #[test]
    fn test_empty_document_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_partial_document() {
        let config = AppConfig::from_toml_str(
            r#"
            tax_rate = "0.10"

            [display]
            currency_symbol = "€"
            "#,
        )
        .unwrap();
        assert_eq!(config.tax_rate, Decimal::new(10, 2));
        assert_eq!(config.display.currency_symbol, "€");
        assert!(config.menu.is_none());
    }

    #[test]
    fn test_menu_override() {
        let config = AppConfig::from_toml_str(
            r#"
            [[menu.entrees]]
            name = "Burrito"
            price = "5.00"

            [[menu.side_dishes]]
            name = "Rice"
            price = "1.50"

            [[menu.accompaniments]]
            name = "Salsa"
            price = "0.50"
            description = "Fresh tomato salsa"
            "#,
        )
        .unwrap();

        let menu = config.menu();
        assert_eq!(menu.len(), 3);
        let salsa = menu.find(MenuCategory::Accompaniment, "Salsa").unwrap();
        assert_eq!(salsa.price, Decimal::new(50, 2));
        assert_eq!(salsa.description, "Fresh tomato salsa");
    }

    #[test]
    fn test_partial_menu_override_keeps_other_lists() {
        let config = AppConfig::from_toml_str(
            r#"
            tax_rate = "0.10"

            [display]
            currency_symbol = "€"

            [[menu.entrees]]
            name = "Burrito"
            price = "5.00"
            "#,
        )
        .unwrap();

        // The rest of the file is still honored
        assert_eq!(config.tax_rate, Decimal::new(10, 2));
        assert_eq!(config.display.currency_symbol, "€");

        let menu = config.menu();
        let builtin = Menu::builtin();
        assert_eq!(menu.entrees.len(), 1);
        assert_eq!(menu.entrees[0].name, "Burrito");
        assert_eq!(menu.side_dishes, builtin.side_dishes);
        assert_eq!(menu.accompaniments, builtin.accompaniments);
    }

    #[test]
    fn test_invalid_tax_rate() {
        let err = AppConfig::from_toml_str(r#"tax_rate = "1.5""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTaxRate(_)));

        let err = AppConfig::from_toml_str(r#"tax_rate = "-0.01""#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTaxRate(_)));
    }

    #[test]
    fn test_parse_error() {
        let err = AppConfig::from_toml_str("tax_rate = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "tax_rate = \"0.05\"").unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.tax_rate, Decimal::new(5, 2));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_config(&dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
