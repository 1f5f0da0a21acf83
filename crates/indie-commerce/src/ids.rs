//! Newtype IDs for type-safe identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a dish on the menu, stable for the whole session.
///
/// Cart lines reuse the id of the entry they were created from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(u32);

impl MenuItemId {
    /// Create an ID from its raw value.
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for MenuItemId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_display() {
        assert_eq!(MenuItemId::new(42).to_string(), "42");
    }

    #[test]
    fn test_id_equality() {
        let a: MenuItemId = 3.into();
        assert_eq!(a, MenuItemId::new(3));
        assert_ne!(a, MenuItemId::new(4));
        assert_eq!(a.get(), 3);
    }

    #[test]
    fn test_id_serializes_as_number() {
        let json = serde_json::to_string(&MenuItemId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
