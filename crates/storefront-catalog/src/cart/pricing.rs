//! Checkout pricing summary.

use crate::cart::CartResolution;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Flat delivery charge added at checkout, in cents.
pub const DEFAULT_DELIVERY_CHARGE_CENTS: i64 = 500;

/// Totals shown on the checkout pricing card.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartPricing {
    /// Sum of resolved item prices, rounded to cents.
    pub subtotal: Money,
    /// Flat delivery charge.
    pub delivery_charge: Money,
    /// Final total (subtotal + delivery).
    pub grand_total: Money,
    /// Number of resolved lines.
    pub item_count: usize,
}

impl CartPricing {
    /// Price a resolved selection.
    pub fn new(resolution: &CartResolution, delivery_charge: Money) -> Self {
        Self::from_subtotal(
            resolution.subtotal,
            resolution.resolved().count(),
            delivery_charge,
        )
    }

    /// Price from a raw subtotal. The delivery charge's currency is used throughout.
    pub fn from_subtotal(subtotal: f64, item_count: usize, delivery_charge: Money) -> Self {
        let subtotal = Money::from_decimal(subtotal, delivery_charge.currency);
        Self {
            grand_total: subtotal.plus_cents(delivery_charge.amount_cents),
            subtotal,
            delivery_charge,
            item_count,
        }
    }

    /// The default $5.00 delivery charge.
    pub fn default_delivery_charge(currency: Currency) -> Money {
        Money::new(DEFAULT_DELIVERY_CHARGE_CENTS, currency)
    }

    /// Check if delivery is charged.
    pub fn has_delivery_charge(&self) -> bool {
        !self.delivery_charge.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::resolve;
    use crate::catalog::{CatalogIndex, ProductRecord};

    #[test]
    fn test_pricing_card_totals() {
        let index = CatalogIndex::from_records(vec![
            ProductRecord::new("1").with_price("10.00"),
            ProductRecord::new("2").with_price("25.50"),
        ]);
        let resolution = resolve(&index, ["1", "2", "7"]).unwrap();
        let pricing = CartPricing::new(
            &resolution,
            CartPricing::default_delivery_charge(Currency::USD),
        );

        assert_eq!(pricing.subtotal.display(), "$35.50");
        assert_eq!(pricing.delivery_charge.display(), "$5.00");
        assert_eq!(pricing.grand_total.display(), "$40.50");
        assert_eq!(pricing.item_count, 2);
        assert!(pricing.has_delivery_charge());
    }

    #[test]
    fn test_free_delivery() {
        let pricing = CartPricing::from_subtotal(12.345, 1, Money::zero(Currency::EUR));
        assert_eq!(pricing.subtotal.amount_cents, 1235);
        assert_eq!(pricing.grand_total, pricing.subtotal);
        assert!(!pricing.has_delivery_charge());
        assert_eq!(pricing.grand_total.currency, Currency::EUR);
    }
}
