//! Money type for checkout totals.
//!
//! Product prices arrive as decimal strings and are projected as `f64`
//! (see [`crate::view`]). Totals shown on the checkout pricing card are
//! carried in integer cents so that the delivery charge adds exactly.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display currencies. Only the symbol changes; there is no conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Get the currency code (e.g., "USD").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Get the currency symbol (e.g., "$").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
            Currency::GBP => "\u{00a3}",
        }
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            "GBP" => Some(Currency::GBP),
            _ => None,
        }
    }

    /// Render an amount with this currency's symbol and two decimals.
    pub fn format(&self, amount: f64) -> String {
        format!("{}{:.2}", self.symbol(), amount)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64, currency: Currency) -> Self {
        Self {
            amount_cents,
            currency,
        }
    }

    /// Create a Money value from a decimal amount, rounding to the nearest cent.
    ///
    /// ```
    /// use storefront_catalog::money::{Money, Currency};
    /// let price = Money::from_decimal(35.5, Currency::USD);
    /// assert_eq!(price.amount_cents, 3550);
    /// ```
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let amount_cents = (amount * 100.0).round() as i64;
        Self::new(amount_cents, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$49.99").
    pub fn display(&self) -> String {
        self.currency.format(self.to_decimal())
    }

    /// Add a plain cent amount, saturating on overflow.
    pub fn plus_cents(&self, cents: i64) -> Money {
        Money::new(self.amount_cents.saturating_add(cents), self.currency)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(49.99, Currency::USD);
        assert_eq!(m.amount_cents, 4999);

        let m = Money::from_decimal(0.0508305084745762, Currency::USD);
        assert_eq!(m.amount_cents, 5);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(4999, Currency::USD).display(), "$49.99");
        assert_eq!(Money::new(500, Currency::EUR).display(), "\u{20ac}5.00");
        assert_eq!(Money::zero(Currency::GBP).to_string(), "\u{00a3}0.00");
    }

    #[test]
    fn test_plus_cents() {
        let a = Money::new(3550, Currency::USD);
        assert_eq!(a.plus_cents(500), Money::new(4050, Currency::USD));
        assert_eq!(Money::new(i64::MAX, Currency::USD).plus_cents(1).amount_cents, i64::MAX);
    }

    #[test]
    fn test_currency_format() {
        assert_eq!(Currency::USD.format(10.0), "$10.00");
        assert_eq!(Currency::USD.format(25.5), "$25.50");
        assert_eq!(Currency::USD.format(0.0508305084745762), "$0.05");
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("eur"), Some(Currency::EUR));
        assert_eq!(Currency::from_code("JPY"), None);
    }
}
