//! Menu item types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which list of the menu an item belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuCategory {
    Entree,
    SideDish,
    Accompaniment,
}

impl MenuCategory {
    /// All categories in the order they are chosen.
    pub const ALL: [MenuCategory; 3] = [
        MenuCategory::Entree,
        MenuCategory::SideDish,
        MenuCategory::Accompaniment,
    ];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            MenuCategory::Entree => "Entree",
            MenuCategory::SideDish => "Side Dish",
            MenuCategory::Accompaniment => "Accompaniment",
        }
    }
}

impl fmt::Display for MenuCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A selectable dish.
///
/// Items are built once when the menu loads and never change afterwards.
/// Equality compares every field, so two dishes with the same name but
/// different prices are different items.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Display name, unique within a category.
    pub name: String,

    /// Short description shown under the name.
    #[serde(default)]
    pub description: String,

    /// Price in the configured currency.
    pub price: Decimal,

    #[serde(default)]
    pub calories: u32,
}

impl MenuItem {
    /// Create an item with only a name and price.
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            price,
            calories: 0,
        }
    }

    /// Builder: set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder: set the calorie count.
    pub fn with_calories(mut self, calories: u32) -> Self {
        self.calories = calories;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_builder() {
        let item = MenuItem::new("Burrito", Decimal::new(500, 2))
            .with_description("Beans and rice")
            .with_calories(620);

        assert_eq!(item.name, "Burrito");
        assert_eq!(item.price, Decimal::new(5, 0));
        assert_eq!(item.description, "Beans and rice");
        assert_eq!(item.calories, 620);
    }

    #[test]
    fn test_item_deserialize_defaults() {
        let item: MenuItem = serde_json::from_str(r#"{"name":"Salsa","price":"0.50"}"#).unwrap();
        assert_eq!(item.name, "Salsa");
        assert_eq!(item.price, Decimal::new(50, 2));
        assert!(item.description.is_empty());
        assert_eq!(item.calories, 0);
    }

    #[test]
    fn test_category_labels() {
        assert_eq!(MenuCategory::SideDish.to_string(), "Side Dish");
        assert_eq!(MenuCategory::ALL.len(), 3);
    }
}
