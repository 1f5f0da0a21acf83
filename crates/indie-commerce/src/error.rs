//! Commerce error types.

use crate::ids::MenuItemId;
use crate::money::Currency;
use thiserror::Error;

/// Errors raised while building catalog data.
///
/// Cart operations never fail; unknown ids are treated as no-ops.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommerceError {
    /// A price label could not be turned into an amount.
    #[error("Invalid price {label:?}: {reason}")]
    InvalidPrice { label: String, reason: &'static str },

    /// Two catalog entries share the same id.
    #[error("Duplicate menu item: {0}")]
    DuplicateMenuItem(MenuItemId),

    /// A catalog mixes prices in different currencies.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: Currency, got: Currency },
}

impl CommerceError {
    pub(crate) fn invalid_price(label: &str, reason: &'static str) -> Self {
        CommerceError::InvalidPrice {
            label: label.to_string(),
            reason,
        }
    }
}
