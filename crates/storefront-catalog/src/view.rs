//! Presentation-ready product views.

use serde::Serialize;

use crate::catalog::{CatalogIndex, ProductRecord, RawPrice};
use crate::money::Currency;

/// How `price_num` was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceStatus {
    /// Parsed from a valid price cell.
    Parsed,
    /// No price available; `price_num` is 0.
    Missing,
    /// The cell held text that is not a number; `price_num` is 0.
    Unparseable,
}

/// Normalized product shape consumed by grids, cards and checkout lines.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductView {
    pub id: String,
    pub product_name: String,
    pub category: String,
    pub color: String,
    pub description: String,
    /// Formatted price, e.g. "$10.00". Empty for the absent view.
    pub price: String,
    /// Unrounded numeric price.
    pub price_num: f64,
    pub price_status: PriceStatus,
}

impl Default for ProductView {
    fn default() -> Self {
        Self {
            id: "0".to_string(),
            product_name: String::new(),
            category: String::new(),
            color: String::new(),
            description: String::new(),
            price: String::new(),
            price_num: 0.0,
            price_status: PriceStatus::Missing,
        }
    }
}

impl ProductView {
    /// True for the placeholder returned when no record was available.
    pub fn is_placeholder(&self) -> bool {
        self.id == "0" && self.product_name.is_empty()
    }
}

/// Project a record (or its absence) with the default currency.
///
/// Never fails: missing input yields [`ProductView::default`].
pub fn project(record: Option<&ProductRecord>) -> ProductView {
    project_with(record, Currency::default())
}

/// Project a record, formatting its price in `currency`.
pub fn project_with(record: Option<&ProductRecord>, currency: Currency) -> ProductView {
    let record = match record {
        Some(record) if !record.article_id.as_str().is_empty() => record,
        _ => return ProductView::default(),
    };

    let price_status = match record.price {
        RawPrice::Parsed { .. } => PriceStatus::Parsed,
        RawPrice::Missing => PriceStatus::Missing,
        RawPrice::Unparseable(_) => PriceStatus::Unparseable,
    };
    let price_num = record.price.value();

    ProductView {
        id: record.article_id.to_string(),
        product_name: record.product_name.clone(),
        category: record.category.clone(),
        color: record.colour.clone(),
        description: record.description.clone(),
        price: currency.format(price_num),
        price_num,
        price_status,
    }
}

/// Format an amount as `$` plus two decimals.
pub fn format_price(amount: f64) -> String {
    Currency::default().format(amount)
}

/// Name of the product with `id`, if it is in the index.
pub fn product_name<'a>(index: &'a CatalogIndex, id: &str) -> Option<&'a str> {
    index.get(id).map(|r| r.product_name.as_str())
}
