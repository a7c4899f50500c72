//! Query results, facets and pagination.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::catalog::ProductRecord;
use crate::money::Currency;
use crate::search::filter::QueryFilter;
use crate::search::query::PAGE_SIZE;
use crate::view::{project_with, ProductView};

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Pagination {
    /// Current page (1-indexed).
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. `page` is clamped to at least 1.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total_pages = if total == 0 {
            1
        } else {
            total.div_ceil(per_page)
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1,
        }
    }

    /// Index of the first item on this page. Saturates for huge pages.
    pub fn offset(&self) -> usize {
        (self.page - 1).saturating_mul(self.per_page)
    }

    /// Get page numbers for display (e.g., [1, 2, 3, ..., 10]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if max_visible == 0 {
            return Vec::new();
        }
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }

        // Pages past the end show the last window.
        let current = self.page.min(self.total_pages);
        let half = max_visible / 2;
        let start = current.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Get start item number (1-indexed).
    pub fn start_item(&self) -> usize {
        if self.total == 0 {
            0
        } else {
            self.offset() + 1
        }
    }

    /// Get end item number.
    pub fn end_item(&self) -> usize {
        self.page.saturating_mul(self.per_page).min(self.total)
    }
}

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Product type").
    pub name: String,
    /// Field this facet filters on.
    pub field: String,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FacetValue {
    /// The value.
    pub value: String,
    /// Number of items with this value in the selected category.
    pub count: usize,
    /// Whether the toggle for this value is effectively on.
    pub selected: bool,
}

/// Outcome of evaluating a [`QueryFilter`] against an index.
#[derive(Debug, Clone)]
pub struct QueryResult<'a> {
    matching: Vec<&'a ProductRecord>,
    facet_counts: BTreeMap<String, usize>,
}

impl<'a> QueryResult<'a> {
    pub(crate) fn new(
        matching: Vec<&'a ProductRecord>,
        facet_counts: BTreeMap<String, usize>,
    ) -> Self {
        Self {
            matching,
            facet_counts,
        }
    }

    /// Every matching record, in index order.
    pub fn matching(&self) -> &[&'a ProductRecord] {
        &self.matching
    }

    /// Number of matching records.
    pub fn total(&self) -> usize {
        self.matching.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matching.is_empty()
    }

    /// Per product type counts within the selected category.
    pub fn facet_counts(&self) -> &BTreeMap<String, usize> {
        &self.facet_counts
    }

    /// The records shown on the grid: the first [`PAGE_SIZE`] matches.
    pub fn display(&self) -> &[&'a ProductRecord] {
        self.page(1)
    }

    /// Records on a 1-indexed page. Out-of-range pages are empty.
    pub fn page(&self, page: usize) -> &[&'a ProductRecord] {
        let pagination = self.pagination(page);
        let start = pagination.offset().min(self.matching.len());
        let end = start.saturating_add(PAGE_SIZE).min(self.matching.len());
        &self.matching[start..end]
    }

    pub fn pagination(&self, page: usize) -> Pagination {
        Pagination::new(page, PAGE_SIZE, self.matching.len())
    }

    /// Project the display slice.
    pub fn products(&self, currency: Currency) -> Vec<ProductView> {
        self.display()
            .iter()
            .map(|r| project_with(Some(*r), currency))
            .collect()
    }

    /// Product-type facet, most common first, ties by name.
    pub fn type_facet(&self, filter: &QueryFilter) -> Facet {
        let mut values: Vec<FacetValue> = self
            .facet_counts
            .iter()
            .map(|(value, &count)| FacetValue {
                selected: filter.type_enabled(value),
                value: value.clone(),
                count,
            })
            .collect();
        values.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));

        Facet {
            name: "Product type".to_string(),
            field: "product_group_name".to_string(),
            values,
        }
    }
}
