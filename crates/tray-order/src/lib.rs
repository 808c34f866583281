//! Order state and wizard navigation for the Lunch Tray app.
//!
//! - [`OrderState`]: the chosen items and their derived totals
//! - [`OrderController`]: the interface screens use to change the order
//! - [`ObservableOrder`]: the controller that broadcasts every change
//! - [`NavigationRouter`]: the step back stack and intent dispatch
//!
//! Nothing in this crate renders anything.

mod controller;
mod router;
mod state;

pub use controller::{ObservableOrder, OrderController};
pub use router::{Intent, NavigationRouter, ScreenSnapshot};
pub use state::OrderState;
