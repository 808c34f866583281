//! Checkout screen: order summary and totals.

use tray_core::DisplayConfig;
use tray_order::OrderState;

use crate::format::format_price;

/// Render the chosen items followed by subtotal, tax and total.
///
/// Totals are read from the order at render time.
pub fn render(order: &OrderState, display: &DisplayConfig) -> Vec<String> {
    let symbol = display.currency_symbol.as_str();
    let mut lines = vec![String::new(), "Order Summary".to_string()];

    if order.is_empty() {
        lines.push("  (no items selected)".to_string());
    }
    for (_, item) in order.selected_items() {
        lines.push(format!("  {}  {}", item.name, format_price(item.price, symbol)));
    }

    lines.push(String::new());
    lines.push(format!("Subtotal: {}", format_price(order.item_total(), symbol)));
    lines.push(format!("Tax: {}", format_price(order.tax(), symbol)));
    lines.push(format!("Total: {}", format_price(order.grand_total(), symbol)));
    lines.push(String::new());
    lines.push("  [cancel] Cancel    [next] Submit".to_string());
    lines
}
