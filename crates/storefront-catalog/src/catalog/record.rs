//! Typed catalog rows.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::ids::ArticleId;

/// Column holding the unique row key.
pub const ARTICLE_ID: &str = "article_id";
/// Column holding the display name.
pub const PROD_NAME: &str = "prod_name";
/// Column holding the top-level category.
pub const INDEX_GROUP_NAME: &str = "index_group_name";
/// Column holding the product type facet.
pub const PRODUCT_GROUP_NAME: &str = "product_group_name";
/// Column holding the decimal price.
pub const PRICE: &str = "price";
/// Column holding the long description.
pub const DETAIL_DESC: &str = "detail_desc";
/// Column holding the colour name.
pub const COLOUR_GROUP_NAME: &str = "colour_group_name";

/// Price cell as found in the export.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "value", rename_all = "lowercase")]
pub enum RawPrice {
    /// A finite decimal number, with the cell text it was read from.
    Parsed { value: f64, raw: String },
    /// Column absent or cell blank.
    Missing,
    /// Cell present but not a finite number; the raw text is kept.
    Unparseable(String),
}

impl RawPrice {
    /// Classify a price cell.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();
        if text.is_empty() {
            return RawPrice::Missing;
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => RawPrice::Parsed {
                value,
                raw: text.to_string(),
            },
            _ => RawPrice::Unparseable(text.to_string()),
        }
    }

    /// Numeric value, degrading to 0 when the cell was missing or invalid.
    pub fn value(&self) -> f64 {
        match self {
            RawPrice::Parsed { value, .. } => *value,
            RawPrice::Missing | RawPrice::Unparseable(_) => 0.0,
        }
    }

    pub fn is_parsed(&self) -> bool {
        matches!(self, RawPrice::Parsed { .. })
    }

    /// The trimmed cell text; empty when the cell was missing.
    pub fn raw(&self) -> &str {
        match self {
            RawPrice::Parsed { raw, .. } | RawPrice::Unparseable(raw) => raw,
            RawPrice::Missing => "",
        }
    }
}

impl Default for RawPrice {
    fn default() -> Self {
        RawPrice::Missing
    }
}

/// One row of the catalog export.
///
/// Known columns are lifted into typed fields at parse time; a missing
/// column or blank cell becomes an empty string. Every other column is
/// kept verbatim in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProductRecord {
    pub article_id: ArticleId,
    pub product_name: String,
    /// `index_group_name`, e.g. "Menswear".
    pub category: String,
    /// `product_group_name`, e.g. "Garment Upper body".
    pub product_type: String,
    pub description: String,
    pub colour: String,
    pub price: RawPrice,
    /// Unused columns, keyed by header name.
    pub extra: BTreeMap<String, String>,
}

impl ProductRecord {
    /// Create a record with only its id set.
    pub fn new(article_id: impl Into<ArticleId>) -> Self {
        Self {
            article_id: article_id.into(),
            product_name: String::new(),
            category: String::new(),
            product_type: String::new(),
            description: String::new(),
            colour: String::new(),
            price: RawPrice::Missing,
            extra: BTreeMap::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.product_name = name.into();
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = product_type.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_colour(mut self, colour: impl Into<String>) -> Self {
        self.colour = colour.into();
        self
    }

    pub fn with_price(mut self, price: &str) -> Self {
        self.price = RawPrice::parse(price);
        self
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Look up a cell by its column name, known or extra.
    ///
    /// The price column yields the trimmed cell text; use
    /// [`ProductRecord::price`] for the typed value.
    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            ARTICLE_ID => Some(self.article_id.as_str()),
            PROD_NAME => Some(&self.product_name),
            INDEX_GROUP_NAME => Some(&self.category),
            PRODUCT_GROUP_NAME => Some(&self.product_type),
            DETAIL_DESC => Some(&self.description),
            COLOUR_GROUP_NAME => Some(&self.colour),
            PRICE => Some(self.price.raw()),
            other => self.extra.get(other).map(String::as_str),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_price_classification() {
        assert_eq!(
            RawPrice::parse("10.00"),
            RawPrice::Parsed {
                value: 10.0,
                raw: "10.00".to_string()
            }
        );
        assert_eq!(RawPrice::parse(" 0.0508 ").value(), 0.0508);
        assert_eq!(RawPrice::parse(" 0.0508 ").raw(), "0.0508");
        assert!(RawPrice::parse("0").is_parsed());
        assert_eq!(RawPrice::parse(""), RawPrice::Missing);
        assert_eq!(RawPrice::parse("   "), RawPrice::Missing);
        assert_eq!(
            RawPrice::parse("ten"),
            RawPrice::Unparseable("ten".to_string())
        );
        assert!(matches!(RawPrice::parse("NaN"), RawPrice::Unparseable(_)));
        assert!(matches!(RawPrice::parse("inf"), RawPrice::Unparseable(_)));
    }

    #[test]
    fn test_raw_price_value_degrades_to_zero() {
        assert_eq!(RawPrice::parse("ten").value(), 0.0);
        assert_eq!(RawPrice::Missing.value(), 0.0);
        assert_eq!(RawPrice::parse("25.50").value(), 25.5);
        assert!(RawPrice::parse("0").is_parsed());
        assert!(!RawPrice::Missing.is_parsed());
    }

    #[test]
    fn test_field_lookup() {
        let record = ProductRecord::new("1")
            .with_name("Tee")
            .with_category("Menswear")
            .with_field("garment_group_name", "Jersey Basic");

        assert_eq!(record.field("article_id"), Some("1"));
        assert_eq!(record.field("prod_name"), Some("Tee"));
        assert_eq!(record.field("index_group_name"), Some("Menswear"));
        assert_eq!(record.field("garment_group_name"), Some("Jersey Basic"));
        assert_eq!(record.field("section_name"), None);
        assert_eq!(record.field("price"), Some(""));
    }

    #[test]
    fn test_price_field_keeps_cell_text() {
        let exact = ProductRecord::new("1").with_price("10.00");
        let short = ProductRecord::new("2").with_price("10.0");
        assert_eq!(exact.price.value(), short.price.value());
        assert_eq!(exact.field("price"), Some("10.00"));
        assert_eq!(short.field("price"), Some("10.0"));
        assert_eq!(
            ProductRecord::new("3").with_price(" free ").field("price"),
            Some("free")
        );
    }
}
