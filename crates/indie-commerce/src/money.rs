//! Money type for representing monetary values.
//!
//! Menu prices are whole currency units, so amounts are plain integers
//! with no minor unit. Display strings such as `"450₽"` are parsed once,
//! at the catalog boundary, and never re-parsed for arithmetic.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    RUB,
    USD,
    EUR,
}

impl Currency {
    const ALL: [Currency; 3] = [Currency::RUB, Currency::USD, Currency::EUR];

    /// Get the currency code (e.g., "RUB").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::RUB => "RUB",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₽").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::RUB => "\u{20bd}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Whether the symbol is written before the amount.
    pub fn symbol_first(&self) -> bool {
        matches!(self, Currency::USD)
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "RUB" => Some(Currency::RUB),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency, in whole units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in whole currency units.
    pub amount: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value.
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Parse a display price such as `"450₽"`, `"1 000 ₽"` or `"$12"`.
    ///
    /// At most one currency marker (symbol or code) is accepted, before or
    /// after the number. Without a marker the currency defaults to RUB.
    /// Grouping spaces are ignored. Anything else that is not a
    /// non-negative whole number is rejected.
    ///
    /// ```
    /// use indie_commerce::money::{Currency, Money};
    /// let price = Money::parse("450₽").unwrap();
    /// assert_eq!(price, Money::new(450, Currency::RUB));
    /// ```
    pub fn parse(label: &str) -> Result<Money, CommerceError> {
        let trimmed = label.trim();
        if trimmed.is_empty() {
            return Err(CommerceError::invalid_price(label, "empty label"));
        }

        let (currency, number) = split_currency(trimmed);

        let digits: String = number
            .chars()
            .filter(|c| !is_group_separator(*c))
            .collect();
        if digits.is_empty() {
            return Err(CommerceError::invalid_price(label, "missing amount"));
        }
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(CommerceError::invalid_price(label, "not a whole number"));
        }

        let amount = digits
            .parse::<i64>()
            .map_err(|_| CommerceError::invalid_price(label, "amount too large"))?;

        Ok(Money::new(amount, currency))
    }

    /// Parse a display price, falling back to zero roubles with a warning.
    pub fn parse_or_zero(label: &str) -> Money {
        match Money::parse(label) {
            Ok(money) => money,
            Err(e) => {
                tracing::warn!(error = %e, "price label unparseable, using zero");
                Money::zero(Currency::default())
            }
        }
    }

    /// Try to add another Money value, returning None if currencies don't match.
    ///
    /// The sum saturates instead of overflowing.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount.saturating_add(other.amount),
            self.currency,
        ))
    }

    /// Multiply by a quantity, saturating on overflow.
    pub fn saturating_mul(&self, quantity: u32) -> Money {
        Money::new(
            self.amount.saturating_mul(i64::from(quantity)),
            self.currency,
        )
    }

    /// Format as a display string (e.g., "450₽", "$12").
    pub fn display(&self) -> String {
        if self.currency.symbol_first() {
            format!("{}{}", self.currency.symbol(), self.amount)
        } else {
            format!("{}{}", self.amount, self.currency.symbol())
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Split a single currency marker off either end of a trimmed label.
fn split_currency(label: &str) -> (Currency, &str) {
    for currency in Currency::ALL {
        for marker in [currency.symbol(), currency.code()] {
            if let Some(rest) = strip_prefix_ignore_case(label, marker) {
                return (currency, rest);
            }
            if let Some(rest) = strip_suffix_ignore_case(label, marker) {
                return (currency, rest);
            }
        }
    }
    (Currency::default(), label)
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &s[..split])
}

fn is_group_separator(c: char) -> bool {
    matches!(c, ' ' | '\u{00a0}' | '\u{2009}' | '\u{202f}')
}
