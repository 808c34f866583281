//! Commands typed at the prompt.
//!
//! A command is what the user typed; it becomes an [`Intent`](tray_order::Intent)
//! only once the current step and menu are known (see `app`).

use tray_core::InputError;

/// A parsed line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// "Start Order", "Next" and "Submit" buttons.
    Next,
    /// App bar back arrow.
    Back,
    Cancel,
    /// Pick the nth option (1-based) on a menu step.
    Select(usize),
    Help,
    Quit,
}

/// Look up a command by name.
pub fn command_from_name(name: &str) -> Option<Command> {
    match name {
        // Navigation
        "start" | "next" | "n" | "submit" => Some(Command::Next),
        "back" | "b" | "up" => Some(Command::Back),
        "cancel" | "c" => Some(Command::Cancel),

        // Session
        "help" | "h" | "?" => Some(Command::Help),
        "quit" | "q" | "exit" => Some(Command::Quit),

        _ => None,
    }
}

/// Parse a line of input. Numbers select options; anything else is a name.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let input = line.trim().to_lowercase();
    if input.is_empty() {
        return Err(InputError::Empty);
    }

    if let Ok(index) = input.parse::<usize>() {
        return Ok(Command::Select(index));
    }

    command_from_name(&input).ok_or(InputError::UnknownCommand(input))
}

/// Help lines: command names and what they do.
pub fn available_commands() -> &'static [(&'static str, &'static str)] {
    &[
        ("1, 2, ...", "select an option"),
        ("next", "continue to the next step"),
        ("back", "go back one step"),
        ("cancel", "cancel the order and start over"),
        ("help", "show this help"),
        ("quit", "exit"),
    ]
}
