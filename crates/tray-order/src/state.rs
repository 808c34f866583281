//! Order state for a single tray.
//!
//! Totals are never stored. Every read sums the items that are currently set,
//! so the figures cannot drift from the selections.

use tray_core::{Decimal, MenuCategory, MenuItem};

/// The in-progress tray order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderState {
    pub entree: Option<MenuItem>,
    pub side_dish: Option<MenuItem>,
    pub accompaniment: Option<MenuItem>,

    /// Tax rate applied to the item total (0.08 = 8%).
    pub tax_rate: Decimal,
}

impl OrderState {
    /// Create an empty order with the given tax rate.
    pub fn new(tax_rate: Decimal) -> Self {
        Self {
            entree: None,
            side_dish: None,
            accompaniment: None,
            tax_rate,
        }
    }

    /// Get the item chosen for a category.
    pub fn get(&self, category: MenuCategory) -> Option<&MenuItem> {
        match category {
            MenuCategory::Entree => self.entree.as_ref(),
            MenuCategory::SideDish => self.side_dish.as_ref(),
            MenuCategory::Accompaniment => self.accompaniment.as_ref(),
        }
    }

    /// Set the item for a category, replacing any previous choice.
    pub fn set(&mut self, category: MenuCategory, item: MenuItem) {
        let slot = match category {
            MenuCategory::Entree => &mut self.entree,
            MenuCategory::SideDish => &mut self.side_dish,
            MenuCategory::Accompaniment => &mut self.accompaniment,
        };
        *slot = Some(item);
    }

    /// Unset every field. The tax rate is kept.
    pub fn clear(&mut self) {
        self.entree = None;
        self.side_dish = None;
        self.accompaniment = None;
    }

    /// Check if nothing has been chosen.
    pub fn is_empty(&self) -> bool {
        self.entree.is_none() && self.side_dish.is_none() && self.accompaniment.is_none()
    }

    /// Chosen items in flow order, tagged with their category.
    pub fn selected_items(&self) -> impl Iterator<Item = (MenuCategory, &MenuItem)> {
        MenuCategory::ALL
            .into_iter()
            .filter_map(move |category| self.get(category).map(|item| (category, item)))
    }

    /// Sum of the prices of the chosen items. Unset items count as zero.
    pub fn item_total(&self) -> Decimal {
        self.selected_items().map(|(_, item)| item.price).sum()
    }

    /// Tax on the item total.
    pub fn tax(&self) -> Decimal {
        self.item_total() * self.tax_rate
    }

    /// Item total plus tax.
    pub fn grand_total(&self) -> Decimal {
        let item_total = self.item_total();
        item_total + item_total * self.tax_rate
    }
}

impl Default for OrderState {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}
