//! Menu data.
//!
//! The menu is three ordered lists of dishes. It is loaded once at startup,
//! either from the built-in cafeteria menu or from the `[menu]` table of the
//! config file, and is read-only afterwards.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::item::{MenuCategory, MenuItem};

/// The three option lists offered by the wizard.
///
/// A list missing from a config override keeps its built-in contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Menu {
    #[serde(default = "builtin_entrees")]
    pub entrees: Vec<MenuItem>,
    #[serde(default = "builtin_side_dishes")]
    pub side_dishes: Vec<MenuItem>,
    #[serde(default = "builtin_accompaniments")]
    pub accompaniments: Vec<MenuItem>,
}

impl Menu {
    /// The default cafeteria menu.
    pub fn builtin() -> Self {
        Self {
            entrees: builtin_entrees(),
            side_dishes: builtin_side_dishes(),
            accompaniments: builtin_accompaniments(),
        }
    }

    /// Options for a category, in display order.
    pub fn options(&self, category: MenuCategory) -> &[MenuItem] {
        match category {
            MenuCategory::Entree => &self.entrees,
            MenuCategory::SideDish => &self.side_dishes,
            MenuCategory::Accompaniment => &self.accompaniments,
        }
    }

    /// Look up an item by name within a category.
    pub fn find(&self, category: MenuCategory, name: &str) -> Option<&MenuItem> {
        self.options(category).iter().find(|item| item.name == name)
    }

    /// Total number of items across all categories.
    pub fn len(&self) -> usize {
        self.entrees.len() + self.side_dishes.len() + self.accompaniments.len()
    }

    /// Check if every list is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_entrees() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Cauliflower", Decimal::new(700, 2))
            .with_description("Whole cauliflower, brined, roasted, and deep fried")
            .with_calories(300),
        MenuItem::new("Three Bean Chili", Decimal::new(400, 2))
            .with_description(
                "Black beans, red beans, kidney beans, slow cooked, topped with onion",
            )
            .with_calories(250),
        MenuItem::new("Mushroom Pasta", Decimal::new(550, 2))
            .with_description(
                "Penne pasta, mushrooms, basil, with plum tomatoes cooked in garlic and olive oil",
            )
            .with_calories(450),
        MenuItem::new("Spicy Black Bean Skillet", Decimal::new(550, 2))
            .with_description(
                "Seasonal vegetables, black beans, house spice blend, served with avocado and quick pickled onions",
            )
            .with_calories(710),
    ]
}

fn builtin_side_dishes() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Summer Salad", Decimal::new(250, 2))
            .with_description(
                "Heirloom tomatoes, butter lettuce, peaches, avocado, balsamic dressing",
            )
            .with_calories(50),
        MenuItem::new("Butternut Squash Soup", Decimal::new(300, 2))
            .with_description("Roasted butternut squash, roasted peppers, chili oil")
            .with_calories(150),
        MenuItem::new("Spicy Potatoes", Decimal::new(200, 2))
            .with_description("Marble potatoes, roasted, and fried in house spice blend")
            .with_calories(180),
        MenuItem::new("Coconut Rice", Decimal::new(150, 2))
            .with_description("Rice, coconut milk, lime, and sugar")
            .with_calories(300),
    ]
}

fn builtin_accompaniments() -> Vec<MenuItem> {
    vec![
        MenuItem::new("Lunch Bread", Decimal::new(50, 2))
            .with_description("House-made sourdough")
            .with_calories(100),
        MenuItem::new("Mixed Berries", Decimal::new(100, 2))
            .with_description("Strawberries, blueberries, raspberries, and huckleberries")
            .with_calories(50),
        MenuItem::new("Pickled Veggies", Decimal::new(50, 2))
            .with_description("Pickled cucumbers and carrots, made in house")
            .with_calories(60),
    ]
}
