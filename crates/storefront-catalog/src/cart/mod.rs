//! Cart module.
//!
//! Contains selection resolution, subtotals and the checkout pricing summary.

mod pricing;
mod selection;

pub use pricing::{CartPricing, DEFAULT_DELIVERY_CHARGE_CENTS};
pub use selection::{resolve, resolve_with, subtotal, CartLine, CartResolution};
