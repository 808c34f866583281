//! Terminal frontend for the Lunch Tray app.
//!
//! This crate provides the text user interface including:
//! - Screens for each wizard step
//! - Command parsing
//! - Command-line and config resolution
//! - The interactive session loop

pub mod app;
pub mod cli;
pub mod commands;
pub mod format;
pub mod views;

// Re-export commonly used types
pub use app::{Flow, TrayApp};
pub use commands::{available_commands, command_from_name, parse_command, Command};
pub use format::format_price;
pub use views::render_screen;
