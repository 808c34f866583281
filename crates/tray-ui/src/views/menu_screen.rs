//! Menu step screen: a radio list of options.
//!
//! Shared by the entree, side dish and accompaniment steps. Only the option
//! list and the current choice differ between them.

use tray_core::{DisplayConfig, MenuItem};

use crate::format::format_price;

/// Width of "  1. ( ) ", used to indent the detail lines under a name.
const DETAIL_INDENT: &str = "         ";

/// Render numbered options, marking the one that is currently chosen.
pub fn render(
    options: &[MenuItem],
    selected: Option<&MenuItem>,
    display: &DisplayConfig,
) -> Vec<String> {
    let mut lines = vec![String::new()];

    for (i, item) in options.iter().enumerate() {
        let marker = if selected == Some(item) { "(*)" } else { "( )" };
        lines.push(format!(
            "  {}. {} {}  {}",
            i + 1,
            marker,
            item.name,
            format_price(item.price, &display.currency_symbol)
        ));
        if !item.description.is_empty() {
            lines.push(format!("{}{}", DETAIL_INDENT, item.description));
        }
        if item.calories > 0 {
            lines.push(format!("{}{} cal", DETAIL_INDENT, item.calories));
        }
    }

    lines.push(String::new());
    lines.push("  [cancel] Cancel    [next] Next".to_string());
    lines
}
