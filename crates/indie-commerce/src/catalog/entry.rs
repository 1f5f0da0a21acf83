//! Menu entry type.

use crate::error::CommerceError;
use crate::ids::MenuItemId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// A dish available for ordering.
///
/// `price` is parsed from `price_label` when the entry is built, so cart
/// arithmetic never touches the display string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MenuEntry {
    /// Unique dish identifier.
    pub id: MenuItemId,
    /// Dish name.
    pub name: String,
    /// Short description of the ingredients.
    pub description: String,
    /// Category shown as a badge on the card.
    pub category: String,
    /// Price exactly as the menu displays it (e.g., "450₽").
    pub price_label: String,
    /// Parsed unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
}

impl MenuEntry {
    /// Build an entry, treating an unparseable price label as zero.
    pub fn new(
        id: impl Into<MenuItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price_label: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        let price_label = price_label.into();
        let price = Money::parse_or_zero(&price_label);
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            price_label,
            price,
            image: image.into(),
        }
    }

    /// Build an entry, rejecting an unparseable price label.
    pub fn try_new(
        id: impl Into<MenuItemId>,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price_label: impl Into<String>,
        image: impl Into<String>,
    ) -> Result<Self, CommerceError> {
        let price_label = price_label.into();
        let price = Money::parse(&price_label)?;
        Ok(Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            category: category.into(),
            price_label,
            price,
            image: image.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_price_parsed_once_at_construction() {
        let entry = MenuEntry::new(1, "GLITCH BURGER", "", "бургеры", "450₽", "");
        assert_eq!(entry.price, Money::new(450, Currency::RUB));
        assert_eq!(entry.price_label, "450₽");
    }

    #[test]
    fn test_bad_price_defaults_to_zero() {
        let entry = MenuEntry::new(9, "MYSTERY", "", "", "ask the chef", "");
        assert!(entry.price.is_zero());
    }

    #[test]
    fn test_try_new_rejects_bad_price() {
        let result = MenuEntry::try_new(9, "MYSTERY", "", "", "ask the chef", "");
        assert!(matches!(result, Err(CommerceError::InvalidPrice { .. })));
    }
}
