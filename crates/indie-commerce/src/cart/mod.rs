//! Shopping cart module.
//!
//! Contains the cart store, its line items and the events it emits.

mod cart;
mod events;
mod line;

pub use cart::{CartStore, Listener};
pub use events::{CartEvent, SubscriptionId};
pub use line::{CartLine, CartState};
