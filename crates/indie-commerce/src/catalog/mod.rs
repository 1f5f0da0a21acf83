//! Menu catalog module.
//!
//! Contains the menu entry type and the immutable catalog of dishes.

mod entry;
mod menu;

pub use entry::MenuEntry;
pub use menu::Catalog;
