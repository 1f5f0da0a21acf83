//! Menu catalog, money and cart store for the INDIE EAT storefront.
//!
//! This crate holds everything the storefront does that is not rendering:
//!
//! - **Money**: whole-unit amounts and parsing of display prices like `"450₽"`
//! - **Catalog**: the immutable, ordered list of dishes on the menu
//! - **Cart**: the in-memory cart store with line items, totals and events
//!
//! # Example
//!
//! ```
//! use indie_commerce::prelude::*;
//!
//! let catalog = Catalog::indie_eat();
//! let burger = catalog.get(MenuItemId::new(1)).unwrap();
//!
//! let mut cart = CartStore::new();
//! cart.add(burger);
//! cart.add(burger);
//!
//! assert_eq!(cart.total_item_count(), 2);
//! assert_eq!(cart.total_price().display(), "900₽");
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod cart;

pub use error::CommerceError;
pub use ids::MenuItemId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::MenuItemId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{Catalog, MenuEntry};

    // Cart
    pub use crate::cart::{CartEvent, CartLine, CartState, CartStore, SubscriptionId};
}
