//! Cart line and cart state types.

use crate::catalog::MenuEntry;
use crate::ids::MenuItemId;
use crate::money::{Currency, Money};
use serde::Serialize;

/// One row in the cart.
///
/// `name`, `price` and `image` are copied from the menu entry when the line
/// is first created and are not refreshed afterwards.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CartLine {
    /// Menu entry this line was created from.
    pub id: MenuItemId,
    /// Dish name (denormalized for display).
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Image URL.
    pub image: String,
    /// Quantity, always at least 1.
    pub quantity: u32,
}

impl CartLine {
    pub(crate) fn from_entry(entry: &MenuEntry) -> Self {
        Self {
            id: entry.id,
            name: entry.name.clone(),
            price: entry.price,
            image: entry.image.clone(),
            quantity: 1,
        }
    }

    /// Unit price times quantity.
    pub fn subtotal(&self) -> Money {
        self.price.saturating_mul(self.quantity)
    }
}

/// Snapshot of the cart: its lines in insertion order.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct CartState {
    lines: Vec<CartLine>,
}

impl CartState {
    /// Lines in the order they were first added.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Get a line by menu item id.
    pub fn line(&self, id: MenuItemId) -> Option<&CartLine> {
        self.lines.iter().find(|l| l.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all line quantities.
    pub fn total_item_count(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity)).sum()
    }

    /// Sum of unit price times quantity over all lines.
    pub fn total_price(&self) -> Money {
        let currency: Currency = self
            .lines
            .first()
            .map(|l| l.price.currency)
            .unwrap_or_default();

        self.lines
            .iter()
            .fold(Money::zero(currency), |total, line| {
                match total.try_add(&line.subtotal()) {
                    Some(sum) => sum,
                    None => {
                        tracing::warn!(
                            id = %line.id,
                            expected = %currency,
                            got = %line.price.currency,
                            "cart line priced in another currency, left out of total"
                        );
                        total
                    }
                }
            })
    }

    pub(crate) fn position(&self, id: MenuItemId) -> Option<usize> {
        self.lines.iter().position(|l| l.id == id)
    }

    pub(crate) fn lines_mut(&mut self) -> &mut Vec<CartLine> {
        &mut self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(id: u32, price: i64, quantity: u32) -> CartLine {
        CartLine {
            id: MenuItemId::new(id),
            name: format!("dish-{id}"),
            price: Money::new(price, Currency::RUB),
            image: String::new(),
            quantity,
        }
    }

    #[test]
    fn test_empty_state_totals() {
        let state = CartState::default();
        assert!(state.is_empty());
        assert_eq!(state.total_item_count(), 0);
        assert_eq!(state.total_price(), Money::zero(Currency::RUB));
    }

    #[test]
    fn test_totals() {
        let state = CartState {
            lines: vec![line(1, 450, 2), line(2, 520, 1)],
        };
        assert_eq!(state.total_item_count(), 3);
        assert_eq!(state.total_price().amount, 1420);
        assert_eq!(state.line(MenuItemId::new(1)).unwrap().subtotal().amount, 900);
    }

    #[test]
    fn test_foreign_currency_line_left_out() {
        let mut dollars = line(2, 10, 1);
        dollars.price.currency = Currency::USD;
        let state = CartState {
            lines: vec![line(1, 450, 1), dollars],
        };
        assert_eq!(state.total_price(), Money::new(450, Currency::RUB));
        assert_eq!(state.total_item_count(), 2);
    }

    #[test]
    fn test_subtotal_saturates() {
        let big = line(1, i64::MAX, u32::MAX);
        assert_eq!(big.subtotal().amount, i64::MAX);
    }
}
