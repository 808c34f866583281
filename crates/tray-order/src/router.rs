//! Wizard navigation.
//!
//! The router owns a back stack of wizard steps, the same way a navigation
//! host does: "next" pushes the following step, "back" pops, "cancel" resets
//! the order and pops everything down to `Start`. The root is never popped.
//!
//! Screens observe a single [`ScreenSnapshot`] channel that carries the step
//! and the order together, so a cancel is seen as one change.

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;
use tray_core::{MenuCategory, MenuItem, WizardStep};

use crate::controller::OrderController;
use crate::state::OrderState;

// =============================================================================
// Intents
// =============================================================================

/// Everything a screen can ask the router to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    SelectEntree(MenuItem),
    SelectSideDish(MenuItem),
    SelectAccompaniment(MenuItem),
    /// "Next" button.
    Advance,
    /// "Cancel" button: reset the order and return to start.
    Cancel,
    /// Navigate up one step, keeping the order.
    Back,
}

impl Intent {
    /// Build the select intent for a menu category.
    pub fn select(category: MenuCategory, item: MenuItem) -> Self {
        match category {
            MenuCategory::Entree => Intent::SelectEntree(item),
            MenuCategory::SideDish => Intent::SelectSideDish(item),
            MenuCategory::Accompaniment => Intent::SelectAccompaniment(item),
        }
    }
}

// =============================================================================
// Screen Snapshot
// =============================================================================

/// What a renderer needs to draw the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenSnapshot {
    pub step: WizardStep,
    /// Whether the app bar should offer a back button.
    pub can_navigate_back: bool,
    pub order: OrderState,
}

// =============================================================================
// NavigationRouter
// =============================================================================

/// Dispatches intents to the order controller and tracks the current step.
pub struct NavigationRouter {
    controller: Arc<dyn OrderController>,
    back_stack: RwLock<Vec<WizardStep>>,
    tx: watch::Sender<ScreenSnapshot>,
}

impl NavigationRouter {
    /// Create a router positioned at `Start`.
    pub fn new(controller: Arc<dyn OrderController>) -> Self {
        let initial = ScreenSnapshot {
            step: WizardStep::Start,
            can_navigate_back: false,
            order: controller.current_state(),
        };
        let (tx, _rx) = watch::channel(initial);
        Self {
            controller,
            back_stack: RwLock::new(vec![WizardStep::Start]),
            tx,
        }
    }

    /// Route an intent. Every variant is handled; none can fail.
    pub fn dispatch(&self, intent: Intent) {
        match intent {
            Intent::SelectEntree(item) => self.controller.update_entree(item),
            Intent::SelectSideDish(item) => self.controller.update_side_dish(item),
            Intent::SelectAccompaniment(item) => self.controller.update_accompaniment(item),
            Intent::Advance => self.advance(),
            Intent::Cancel => self.cancel(),
            Intent::Back => {
                self.back();
            }
        }
        self.publish();
    }

    // =========================================================================
    // Transitions
    // =========================================================================

    /// Push the next step. At `Checkout` this stays put.
    fn advance(&self) {
        let mut stack = self.back_stack.write();
        let current = stack.last().copied().unwrap_or_default();
        let next = current.next();
        if next == current {
            tracing::debug!("Already at {}, next is a no-op", current);
            return;
        }
        stack.push(next);
        tracing::debug!("Advanced to step: {} (depth {})", next, stack.len());
    }

    /// Pop one step. Returns `false` at the root.
    fn back(&self) -> bool {
        let mut stack = self.back_stack.write();
        if stack.len() > 1 {
            stack.pop();
            tracing::debug!(
                "Navigated back to step: {}",
                stack.last().copied().unwrap_or_default()
            );
            true
        } else {
            tracing::debug!("Cannot navigate back: already at start");
            false
        }
    }

    /// Reset the order and pop to the root.
    ///
    /// Both happen before the next publish, so subscribers never see a reset
    /// order away from `Start` or a stale order on `Start`.
    fn cancel(&self) {
        let mut stack = self.back_stack.write();
        self.controller.reset_order();
        stack.truncate(1);
        tracing::debug!("Order cancelled, returned to {}", WizardStep::Start);
    }

    // =========================================================================
    // Read Methods
    // =========================================================================

    /// The step on top of the back stack.
    pub fn current_step(&self) -> WizardStep {
        self.back_stack.read().last().copied().unwrap_or_default()
    }

    /// Whether "back" would do anything.
    pub fn can_navigate_back(&self) -> bool {
        self.back_stack.read().len() > 1
    }

    /// Copy of the back stack, root first.
    pub fn back_stack(&self) -> Vec<WizardStep> {
        self.back_stack.read().clone()
    }

    /// The current screen, built fresh from the stack and the controller.
    pub fn snapshot(&self) -> ScreenSnapshot {
        let stack = self.back_stack.read();
        ScreenSnapshot {
            step: stack.last().copied().unwrap_or_default(),
            can_navigate_back: stack.len() > 1,
            order: self.controller.current_state(),
        }
    }

    /// Handle to the order controller.
    pub fn controller(&self) -> &Arc<dyn OrderController> {
        &self.controller
    }

    // =========================================================================
    // Subscription
    // =========================================================================

    /// Subscribe to screen changes.
    ///
    /// Subscribe once when the renderer mounts; drop the receiver on unmount.
    pub fn subscribe(&self) -> watch::Receiver<ScreenSnapshot> {
        self.tx.subscribe()
    }

    /// Broadcast the current screen if it differs from the last one sent.
    fn publish(&self) {
        let next = self.snapshot();
        self.tx.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
}

// =============================================================================
// Tests
// =============================================================================
