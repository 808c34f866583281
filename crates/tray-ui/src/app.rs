//! The interactive ordering session.
//!
//! [`TrayApp`] wires the order controller, the navigation router and the
//! screens together, then reads commands line by line. Screens are redrawn
//! from the router's subscription, only when it reports a change.

use std::io::{self, BufRead, Write};
use std::sync::Arc;

use tray_core::{AppConfig, DisplayConfig, InputError, Menu, WizardStep};
use tray_order::{Intent, NavigationRouter, ObservableOrder};

use crate::commands::{available_commands, parse_command, Command};
use crate::views::render_screen;

/// What the loop should do after a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    ShowHelp,
    Quit,
}

/// A running ordering session.
pub struct TrayApp {
    router: NavigationRouter,
    menu: Menu,
    display: DisplayConfig,
}

impl TrayApp {
    /// Build a session from configuration, starting at `Start` with an empty order.
    pub fn new(config: &AppConfig) -> Self {
        let controller = Arc::new(ObservableOrder::new(config.tax_rate));
        Self {
            router: NavigationRouter::new(controller),
            menu: config.menu(),
            display: config.display.clone(),
        }
    }

    pub fn router(&self) -> &NavigationRouter {
        &self.router
    }

    pub fn menu(&self) -> &Menu {
        &self.menu
    }

    /// Turn a command into an intent for the current step.
    ///
    /// `Ok(None)` means the command is handled by the session itself.
    pub fn resolve(&self, command: Command) -> Result<Option<Intent>, InputError> {
        let intent = match command {
            Command::Next => Intent::Advance,
            Command::Back => Intent::Back,
            Command::Cancel => Intent::Cancel,
            Command::Select(index) => self.select_intent(self.router.current_step(), index)?,
            Command::Help | Command::Quit => return Ok(None),
        };
        Ok(Some(intent))
    }

    fn select_intent(&self, step: WizardStep, index: usize) -> Result<Intent, InputError> {
        let category = step
            .menu_category()
            .ok_or(InputError::NoOptionsOnStep(step))?;
        let options = self.menu.options(category);
        let item = index
            .checked_sub(1)
            .and_then(|i| options.get(i))
            .ok_or(InputError::OptionOutOfRange {
                index,
                len: options.len(),
            })?;
        Ok(Intent::select(category, item.clone()))
    }

    /// Handle one line of input.
    pub fn handle_line(&self, line: &str) -> Result<Flow, InputError> {
        let command = parse_command(line)?;
        tracing::debug!("Command: {:?}", command);

        if let Some(intent) = self.resolve(command)? {
            self.router.dispatch(intent);
        }

        Ok(match command {
            Command::Help => Flow::ShowHelp,
            Command::Quit => Flow::Quit,
            _ => Flow::Continue,
        })
    }

    /// Run the session until input ends or the user quits.
    pub fn run<R: BufRead, W: Write>(&self, input: R, mut output: W) -> io::Result<()> {
        // Mount: subscribe once and draw the initial screen
        let mut screen = self.router.subscribe();
        let initial = screen.borrow_and_update().clone();
        output.write_all(render_screen(&initial, &self.menu, &self.display).as_bytes())?;
        prompt(&mut output)?;

        for line in input.lines() {
            let line = line?;
            match self.handle_line(&line) {
                Ok(Flow::Quit) => break,
                Ok(Flow::ShowHelp) => write_help(&mut output)?,
                Ok(Flow::Continue) => {}
                Err(InputError::Empty) => {}
                Err(e) => {
                    tracing::debug!("Rejected input {:?}: {}", line, e);
                    writeln!(output, "{}", e)?;
                }
            }

            if screen.has_changed().unwrap_or(false) {
                let snapshot = screen.borrow_and_update().clone();
                writeln!(output)?;
                output.write_all(render_screen(&snapshot, &self.menu, &self.display).as_bytes())?;
            }
            prompt(&mut output)?;
        }

        // Unmount
        drop(screen);
        output.flush()
    }
}

fn prompt<W: Write>(output: &mut W) -> io::Result<()> {
    write!(output, "> ")?;
    output.flush()
}

fn write_help<W: Write>(output: &mut W) -> io::Result<()> {
    writeln!(output, "Commands:")?;
    for (name, description) in available_commands() {
        writeln!(output, "  {:<10} {}", name, description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tray_core::Decimal;

    fn app() -> TrayApp {
        TrayApp::new(&AppConfig::default())
    }

    #[test]
    fn test_select_on_start_is_rejected() {
        let app = app();
        assert_eq!(
            app.handle_line("1"),
            Err(InputError::NoOptionsOnStep(WizardStep::Start))
        );
    }

    #[test]
    fn test_select_out_of_range() {
        let app = app();
        app.handle_line("next").unwrap();

        assert_eq!(
            app.handle_line("9"),
            Err(InputError::OptionOutOfRange { index: 9, len: 4 })
        );
        assert_eq!(
            app.handle_line("0"),
            Err(InputError::OptionOutOfRange { index: 0, len: 4 })
        );
        assert!(app.router().snapshot().order.is_empty());
    }

    #[test]
    fn test_select_picks_option_for_step() {
        let app = app();
        app.handle_line("next").unwrap();
        app.handle_line("next").unwrap();
        app.handle_line("4").unwrap();

        let order = app.router().snapshot().order;
        assert_eq!(order.side_dish.unwrap().name, "Coconut Rice");
        assert!(order.entree.is_none());
    }

    #[test]
    fn test_flow_values() {
        let app = app();
        assert_eq!(app.handle_line("help"), Ok(Flow::ShowHelp));
        assert_eq!(app.handle_line("next"), Ok(Flow::Continue));
        assert_eq!(app.handle_line("quit"), Ok(Flow::Quit));
    }

    #[test]
    fn test_uses_configured_tax_rate() {
        let config = AppConfig {
            tax_rate: Decimal::new(10, 2),
            ..AppConfig::default()
        };
        let app = TrayApp::new(&config);
        assert_eq!(app.router().snapshot().order.tax_rate, Decimal::new(10, 2));
    }

    #[test]
    fn test_run_redraws_only_on_change() {
        let app = app();
        let mut output = Vec::new();
        app.run("back\nnext\n".as_bytes(), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        // Initial draw plus one redraw after "next"; "back" at start changes nothing
        assert_eq!(output.matches("Start your lunch order.").count(), 1);
        assert_eq!(output.matches("<- Choose Entree").count(), 1);
    }

    #[test]
    fn test_run_reports_bad_input() {
        let app = app();
        let mut output = Vec::new();
        app.run("order\n\n".as_bytes(), &mut output).unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("Unknown command: order"));
        assert!(!output.contains("No command entered"));
    }
}
