//! Core types for the Lunch Tray ordering app.
//!
//! This crate contains shared data structures that are used across all Lunch Tray crates:
//! - Menu items and the menu itself
//! - Wizard steps
//! - Configuration types
//! - Error types

mod config;
mod error;
mod item;
mod menu;
mod step;

pub use config::{config_dir, find_config_path, load_config, AppConfig, DisplayConfig};
pub use error::{ConfigError, InputError};
pub use item::{MenuCategory, MenuItem};
pub use menu::Menu;
pub use step::WizardStep;

/// Re-exported so downstream crates share one decimal type.
pub use rust_decimal::Decimal;
