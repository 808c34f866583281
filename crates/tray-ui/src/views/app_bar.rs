//! Top app bar: screen title and back arrow.

use tray_core::WizardStep;

/// Render the app bar as a title line and an underline.
///
/// The back arrow is shown only when there is a step to go back to.
pub fn render(step: WizardStep, can_navigate_back: bool) -> Vec<String> {
    let title = if can_navigate_back {
        format!("<- {}", step.title())
    } else {
        step.title().to_string()
    };
    let rule = "=".repeat(title.chars().count());
    vec![title, rule]
}
