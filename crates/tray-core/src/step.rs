//! Wizard step types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::item::MenuCategory;

/// One screen of the ordering wizard.
///
/// The variants are declared in the only legal forward order, so the derived
/// `Ord` matches the flow.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum WizardStep {
    #[default]
    Start,
    Entree,
    SideDish,
    Accompaniment,
    Checkout,
}

impl WizardStep {
    /// Every step, in flow order.
    pub const ALL: [WizardStep; 5] = [
        WizardStep::Start,
        WizardStep::Entree,
        WizardStep::SideDish,
        WizardStep::Accompaniment,
        WizardStep::Checkout,
    ];

    /// The step reached by "next". Checkout loops back onto itself.
    pub fn next(self) -> WizardStep {
        match self {
            WizardStep::Start => WizardStep::Entree,
            WizardStep::Entree => WizardStep::SideDish,
            WizardStep::SideDish => WizardStep::Accompaniment,
            WizardStep::Accompaniment => WizardStep::Checkout,
            WizardStep::Checkout => WizardStep::Checkout,
        }
    }

    /// Title shown in the app bar.
    pub fn title(self) -> &'static str {
        match self {
            WizardStep::Start => "Lunch Tray",
            WizardStep::Entree => "Choose Entree",
            WizardStep::SideDish => "Choose Side Dish",
            WizardStep::Accompaniment => "Choose Accompaniment",
            WizardStep::Checkout => "Order Checkout",
        }
    }

    /// The menu list offered on this step, if it is a menu step.
    pub fn menu_category(self) -> Option<MenuCategory> {
        match self {
            WizardStep::Entree => Some(MenuCategory::Entree),
            WizardStep::SideDish => Some(MenuCategory::SideDish),
            WizardStep::Accompaniment => Some(MenuCategory::Accompaniment),
            WizardStep::Start | WizardStep::Checkout => None,
        }
    }

    /// Stable route name.
    pub fn name(self) -> &'static str {
        match self {
            WizardStep::Start => "Start",
            WizardStep::Entree => "Entree",
            WizardStep::SideDish => "SideDish",
            WizardStep::Accompaniment => "Accompaniment",
            WizardStep::Checkout => "Checkout",
        }
    }
}

impl fmt::Display for WizardStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
