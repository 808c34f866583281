//! Order controller with automatic change notifications.
//!
//! Mutation = notification. Every method that changes the order also
//! broadcasts the new state, so callers cannot mutate without notifying.

use parking_lot::RwLock;
use tokio::sync::watch;
use tray_core::{Decimal, MenuCategory, MenuItem};

use crate::state::OrderState;

// =============================================================================
// Controller Trait
// =============================================================================

/// Operations the navigation router and screens need from the order.
///
/// Handed to each consumer explicitly, so screens and the router can be
/// tested against a mock.
#[cfg_attr(test, mockall::automock)]
pub trait OrderController: Send + Sync {
    /// Choose the entree, replacing any previous one.
    fn update_entree(&self, item: MenuItem);

    /// Choose the side dish, replacing any previous one.
    fn update_side_dish(&self, item: MenuItem);

    /// Choose the accompaniment, replacing any previous one.
    fn update_accompaniment(&self, item: MenuItem);

    /// Snapshot of the current order. Changing it does not affect the controller.
    fn current_state(&self) -> OrderState;

    /// Unset every choice. Safe to call repeatedly.
    fn reset_order(&self);

    /// Subscribe to order changes. Drop the receiver to unsubscribe.
    fn subscribe(&self) -> watch::Receiver<OrderState>;
}

// =============================================================================
// ObservableOrder
// =============================================================================

/// The order controller used by the app.
///
/// ## Thread Safety
///
/// Uses `parking_lot::RwLock` for the order (never poisons) and
/// `tokio::sync::watch` for broadcasts. All intents arrive on one thread, so
/// the lock is never contended; it only makes the handle `Send + Sync`.
pub struct ObservableOrder {
    inner: RwLock<OrderState>,
    tx: watch::Sender<OrderState>,
}

impl ObservableOrder {
    /// Create an empty order using the given tax rate.
    pub fn new(tax_rate: Decimal) -> Self {
        let state = OrderState::new(tax_rate);
        let (tx, _rx) = watch::channel(state.clone());
        Self {
            inner: RwLock::new(state),
            tx,
        }
    }

    /// Number of live subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }

    /// Apply a change and broadcast the result.
    fn mutate<F>(&self, f: F)
    where
        F: FnOnce(&mut OrderState),
    {
        let snapshot = {
            let mut inner = self.inner.write();
            f(&mut inner);
            inner.clone()
        };
        // send_replace keeps the value even when nobody is subscribed
        self.tx.send_replace(snapshot);
    }

    fn update(&self, category: MenuCategory, item: MenuItem) {
        tracing::debug!("Selected {}: {} ({})", category, item.name, item.price);
        self.mutate(|order| order.set(category, item));
    }
}

impl OrderController for ObservableOrder {
    fn update_entree(&self, item: MenuItem) {
        self.update(MenuCategory::Entree, item);
    }

    fn update_side_dish(&self, item: MenuItem) {
        self.update(MenuCategory::SideDish, item);
    }

    fn update_accompaniment(&self, item: MenuItem) {
        self.update(MenuCategory::Accompaniment, item);
    }

    fn current_state(&self) -> OrderState {
        self.inner.read().clone()
    }

    fn reset_order(&self) {
        tracing::debug!("Order reset");
        self.mutate(OrderState::clear);
    }

    fn subscribe(&self) -> watch::Receiver<OrderState> {
        self.tx.subscribe()
    }
}

impl Default for ObservableOrder {
    fn default() -> Self {
        Self::new(Decimal::ZERO)
    }
}

// =============================================================================
// Tests
// =============================================================================
