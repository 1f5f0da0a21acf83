//! Events emitted by the cart store.

use crate::ids::MenuItemId;
use serde::Serialize;
use std::fmt;

/// A completed cart transition.
///
/// Listeners receive events after the state has changed, so reading the
/// store from inside a listener shows the new state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartEvent {
    /// A dish was added; `quantity` is the line quantity after the add.
    ItemAdded {
        id: MenuItemId,
        name: String,
        quantity: u32,
    },
    /// A line left the cart.
    ItemRemoved { id: MenuItemId },
    /// A line's quantity changed to a new positive value.
    QuantityChanged { id: MenuItemId, quantity: u32 },
}

impl CartEvent {
    /// The line this event is about.
    pub fn id(&self) -> MenuItemId {
        match self {
            CartEvent::ItemAdded { id, .. }
            | CartEvent::ItemRemoved { id }
            | CartEvent::QuantityChanged { id, .. } => *id,
        }
    }
}

/// Handle returned by [`CartStore::subscribe`](crate::cart::CartStore::subscribe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub(crate) u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sub-{}", self.0)
    }
}
