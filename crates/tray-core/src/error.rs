//! Error types for the Lunch Tray app.
//!
//! Ordering and navigation never fail. Errors only come from the edges:
//! loading configuration and reading terminal input.

use thiserror::Error;

use crate::step::WizardStep;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Tax rate outside `0..=1`.
    #[error("Invalid tax rate: {0}")]
    InvalidTaxRate(String),
}

/// Errors from parsing a line of user input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// Blank line.
    #[error("No command entered")]
    Empty,

    /// Input that maps to no command.
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Option number past the end of the list (1-based).
    #[error("Option {index} is out of range (1-{len})")]
    OptionOutOfRange { index: usize, len: usize },

    /// A number was entered on a step without options.
    #[error("There is nothing to select on {0}")]
    NoOptionsOnStep(WizardStep),
}
