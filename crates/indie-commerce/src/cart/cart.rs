//! The cart store.

use crate::cart::{CartEvent, CartLine, CartState, SubscriptionId};
use crate::catalog::MenuEntry;
use crate::ids::MenuItemId;
use crate::money::Money;
use std::fmt;
use std::sync::Arc;

/// Callback invoked with every cart event.
pub type Listener = Arc<dyn Fn(&CartEvent) + Send + Sync>;

/// In-memory cart for one session.
///
/// Every operation is a total, synchronous transition: unknown ids are
/// silently ignored and nothing returns an error. Subscribers are notified
/// only after a transition has completed, and only when state changed.
#[derive(Clone, Default)]
pub struct CartStore {
    state: CartState,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl CartStore {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of a dish.
    ///
    /// An existing line for the same id has its quantity bumped and keeps
    /// its original snapshot. Otherwise a new line with quantity 1 is
    /// inserted. Emits [`CartEvent::ItemAdded`].
    pub fn add(&mut self, entry: &MenuEntry) -> &CartState {
        let quantity = match self.state.position(entry.id) {
            Some(index) => {
                let line = &mut self.state.lines_mut()[index];
                line.quantity = line.quantity.saturating_add(1);
                line.quantity
            }
            None => {
                self.state.lines_mut().push(CartLine::from_entry(entry));
                1
            }
        };

        tracing::debug!(id = %entry.id, quantity, "cart line added");
        self.emit(&CartEvent::ItemAdded {
            id: entry.id,
            name: entry.name.clone(),
            quantity,
        });
        &self.state
    }

    /// Remove a line. No-op if the id is not in the cart.
    pub fn remove(&mut self, id: MenuItemId) -> &CartState {
        match self.state.position(id) {
            Some(index) => {
                self.state.lines_mut().remove(index);
                tracing::debug!(%id, "cart line removed");
                self.emit(&CartEvent::ItemRemoved { id });
            }
            None => tracing::debug!(%id, "remove ignored, line not in cart"),
        }
        &self.state
    }

    /// Change a line's quantity by `delta`.
    ///
    /// The new quantity is clamped at zero before deciding what to do; a
    /// line that reaches zero is removed. No-op if the id is not in the
    /// cart.
    pub fn adjust_quantity(&mut self, id: MenuItemId, delta: i64) -> &CartState {
        let Some(index) = self.state.position(id) else {
            tracing::debug!(%id, delta, "adjust ignored, line not in cart");
            return &self.state;
        };

        let current = self.state.lines()[index].quantity;
        let next = i64::from(current).saturating_add(delta).max(0);

        if next == 0 {
            self.state.lines_mut().remove(index);
            tracing::debug!(%id, delta, "cart line removed by quantity change");
            self.emit(&CartEvent::ItemRemoved { id });
        } else {
            let quantity = u32::try_from(next).unwrap_or(u32::MAX);
            if quantity != current {
                self.state.lines_mut()[index].quantity = quantity;
                tracing::debug!(%id, quantity, "cart line quantity changed");
                self.emit(&CartEvent::QuantityChanged { id, quantity });
            }
        }
        &self.state
    }

    /// Current snapshot.
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        self.state.lines()
    }

    /// Get a line by menu item id.
    pub fn line(&self, id: MenuItemId) -> Option<&CartLine> {
        self.state.line(id)
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.state.line_count()
    }

    /// Sum of all line quantities.
    pub fn total_item_count(&self) -> u64 {
        self.state.total_item_count()
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total_price(&self) -> Money {
        self.state.total_price()
    }

    /// Register a listener for cart events.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&CartEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Arc::new(listener)));
        id
    }

    /// Drop a listener. Returns false if it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let len_before = self.listeners.len();
        self.listeners.retain(|(sub, _)| *sub != id);
        self.listeners.len() < len_before
    }

    fn emit(&self, event: &CartEvent) {
        for (_, listener) in &self.listeners {
            listener(event);
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl PartialEq for CartStore {
    /// Two stores are equal when they hold the same lines.
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}
