//! Screens for the Lunch Tray wizard.
//!
//! Every screen renders to plain lines of text from a [`ScreenSnapshot`].
//! Screens never touch the order directly; they only read the snapshot.

pub mod app_bar;
pub mod checkout;
pub mod menu_screen;
pub mod start;

use tray_core::{DisplayConfig, Menu, MenuCategory, WizardStep};
use tray_order::ScreenSnapshot;

/// Render the full screen for a snapshot: app bar then body.
pub fn render_screen(screen: &ScreenSnapshot, menu: &Menu, display: &DisplayConfig) -> String {
    let order = &screen.order;
    let mut lines = app_bar::render(screen.step, screen.can_navigate_back);

    let body = match screen.step {
        WizardStep::Start => start::render(),
        WizardStep::Entree => menu_screen::render(
            menu.options(MenuCategory::Entree),
            order.entree.as_ref(),
            display,
        ),
        WizardStep::SideDish => menu_screen::render(
            menu.options(MenuCategory::SideDish),
            order.side_dish.as_ref(),
            display,
        ),
        WizardStep::Accompaniment => menu_screen::render(
            menu.options(MenuCategory::Accompaniment),
            order.accompaniment.as_ref(),
            display,
        ),
        WizardStep::Checkout => checkout::render(order, display),
    };
    lines.extend(body);

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tray_core::{Decimal, MenuItem};
    use tray_order::OrderState;

    fn test_menu() -> Menu {
        Menu {
            entrees: vec![
                MenuItem::new("Burrito", Decimal::new(500, 2)).with_calories(620),
                MenuItem::new("Taco", Decimal::new(300, 2)),
            ],
            side_dishes: vec![MenuItem::new("Rice", Decimal::new(150, 2))],
            accompaniments: vec![MenuItem::new("Salsa", Decimal::new(50, 2))
                .with_description("Fresh tomato salsa")],
        }
    }

    fn snapshot(step: WizardStep, order: OrderState) -> ScreenSnapshot {
        ScreenSnapshot {
            step,
            can_navigate_back: step != WizardStep::Start,
            order,
        }
    }

    fn full_order() -> OrderState {
        let menu = test_menu();
        let mut order = OrderState::new(Decimal::new(8, 2));
        order.set(MenuCategory::Entree, menu.entrees[0].clone());
        order.set(MenuCategory::SideDish, menu.side_dishes[0].clone());
        order.set(MenuCategory::Accompaniment, menu.accompaniments[0].clone());
        order
    }

    #[test]
    fn test_render_start() {
        let screen = snapshot(WizardStep::Start, OrderState::default());
        let output = render_screen(&screen, &test_menu(), &DisplayConfig::default());
        insta::assert_snapshot!(output, @r"
        Lunch Tray
        ==========

        Start your lunch order.

          [start] Start Order
        ");
    }

    #[test]
    fn test_render_entree_with_selection() {
        let mut order = OrderState::new(Decimal::new(8, 2));
        order.set(MenuCategory::Entree, test_menu().entrees[1].clone());
        let screen = snapshot(WizardStep::Entree, order);
        let output = render_screen(&screen, &test_menu(), &DisplayConfig::default());
        insta::assert_snapshot!(output, @r"
        <- Choose Entree
        ================

          1. ( ) Burrito  $5.00
                 620 cal
          2. (*) Taco  $3.00

          [cancel] Cancel    [next] Next
        ");
    }

    #[test]
    fn test_render_accompaniment() {
        let screen = snapshot(WizardStep::Accompaniment, OrderState::default());
        let output = render_screen(&screen, &test_menu(), &DisplayConfig::default());
        insta::assert_snapshot!(output, @r"
        <- Choose Accompaniment
        =======================

          1. ( ) Salsa  $0.50
                 Fresh tomato salsa

          [cancel] Cancel    [next] Next
        ");
    }

    #[test]
    fn test_render_checkout() {
        let screen = snapshot(WizardStep::Checkout, full_order());
        let output = render_screen(&screen, &test_menu(), &DisplayConfig::default());
        insta::assert_snapshot!(output, @r"
        <- Order Checkout
        =================

        Order Summary
          Burrito  $5.00
          Rice  $1.50
          Salsa  $0.50

        Subtotal: $7.00
        Tax: $0.56
        Total: $7.56

          [cancel] Cancel    [next] Submit
        ");
    }

    #[test]
    fn test_render_uses_currency_symbol() {
        let display = DisplayConfig {
            currency_symbol: "€".to_string(),
        };
        let screen = snapshot(WizardStep::Checkout, full_order());
        let output = render_screen(&screen, &test_menu(), &display);
        assert!(output.contains("Total: €7.56"));
    }

    #[test]
    fn test_every_step_renders_its_title() {
        for step in WizardStep::ALL {
            let screen = snapshot(step, OrderState::default());
            let output = render_screen(&screen, &test_menu(), &DisplayConfig::default());
            assert!(output.contains(step.title()), "{}", step);
        }
    }
}
