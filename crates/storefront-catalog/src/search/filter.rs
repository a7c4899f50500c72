//! Query filters.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::catalog::ProductRecord;
use crate::ids::ArticleId;

/// Sentinel category value meaning "no category restriction".
pub const ALL_CATEGORIES: &str = "all";

/// Top-level category selector.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CategoryFilter {
    /// Every category.
    #[default]
    All,
    /// Exact `index_group_name` match.
    Named(String),
}

impl CategoryFilter {
    /// Parse a category selector; `"all"` selects every category.
    pub fn parse(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Named(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => name == category,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Named(name) => name,
        }
    }
}

/// Explicit state of a product-type toggle.
///
/// A type with no entry in [`QueryFilter::type_toggles`] is unset and
/// behaves as [`TypeToggle::Enabled`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeToggle {
    Enabled,
    Disabled,
}

/// Combined category, product-type and id restrictions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct QueryFilter {
    /// Category selector.
    pub category: CategoryFilter,
    /// Explicit product-type toggles, keyed by `product_group_name`.
    pub type_toggles: BTreeMap<String, TypeToggle>,
    /// Allow-list of ids. Empty means no restriction.
    pub allow_ids: BTreeSet<ArticleId>,
}

impl QueryFilter {
    /// A filter matching the whole catalog.
    pub fn all() -> Self {
        Self::default()
    }

    /// A filter for one category (or every category for `"all"`).
    pub fn category(name: &str) -> Self {
        Self {
            category: CategoryFilter::parse(name),
            ..Self::default()
        }
    }

    /// Replace the category selector.
    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    /// Set an explicit toggle for one product type.
    pub fn with_type(mut self, product_type: impl Into<String>, toggle: TypeToggle) -> Self {
        self.type_toggles.insert(product_type.into(), toggle);
        self
    }

    /// Restrict results to the given ids.
    pub fn with_allowed_ids<I>(mut self, ids: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<ArticleId>,
    {
        self.allow_ids.extend(ids.into_iter().map(Into::into));
        self
    }

    /// The explicit toggle for a type, `None` when unset.
    pub fn toggle_for(&self, product_type: &str) -> Option<TypeToggle> {
        self.type_toggles.get(product_type).copied()
    }

    /// Effective state of a type toggle.
    pub fn type_enabled(&self, product_type: &str) -> bool {
        self.toggle_for(product_type) != Some(TypeToggle::Disabled)
    }

    pub fn matches_category(&self, record: &ProductRecord) -> bool {
        self.category.matches(&record.category)
    }

    pub fn matches_type(&self, record: &ProductRecord) -> bool {
        self.type_enabled(&record.product_type)
    }

    pub fn matches_id(&self, record: &ProductRecord) -> bool {
        self.allow_ids.is_empty() || self.allow_ids.contains(&record.article_id)
    }

    /// Whether a record passes every restriction.
    pub fn matches(&self, record: &ProductRecord) -> bool {
        self.matches_category(record) && self.matches_type(record) && self.matches_id(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_sentinel() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Menswear"),
            CategoryFilter::Named("Menswear".to_string())
        );
        // The sentinel is exact; other casings are category names.
        assert_eq!(
            CategoryFilter::parse("All"),
            CategoryFilter::Named("All".to_string())
        );
        assert!(CategoryFilter::All.matches("anything"));
        assert!(!CategoryFilter::parse("Sport").matches("Divided"));
    }

    #[test]
    fn test_type_toggle_three_states() {
        let filter = QueryFilter::all()
            .with_type("Shoes", TypeToggle::Disabled)
            .with_type("Accessories", TypeToggle::Enabled);

        assert_eq!(filter.toggle_for("Shoes"), Some(TypeToggle::Disabled));
        assert_eq!(filter.toggle_for("Accessories"), Some(TypeToggle::Enabled));
        assert_eq!(filter.toggle_for("Swimwear"), None);

        assert!(!filter.type_enabled("Shoes"));
        assert!(filter.type_enabled("Accessories"));
        assert!(filter.type_enabled("Swimwear"));
    }

    #[test]
    fn test_allow_list() {
        let filter = QueryFilter::all().with_allowed_ids(["1", "3"]);
        assert!(filter.matches(&ProductRecord::new("1")));
        assert!(!filter.matches(&ProductRecord::new("2")));
        assert!(QueryFilter::all().matches(&ProductRecord::new("2")));
    }

    #[test]
    fn test_combined_match() {
        let filter = QueryFilter::category("Menswear").with_type("Shoes", TypeToggle::Disabled);
        let tee = ProductRecord::new("1")
            .with_category("Menswear")
            .with_product_type("Garment Upper body");
        let shoe = ProductRecord::new("2")
            .with_category("Menswear")
            .with_product_type("Shoes");
        let dress = ProductRecord::new("3")
            .with_category("Ladieswear")
            .with_product_type("Garment Full body");

        assert!(filter.matches(&tee));
        assert!(!filter.matches(&shoe));
        assert!(!filter.matches(&dress));
    }
}
