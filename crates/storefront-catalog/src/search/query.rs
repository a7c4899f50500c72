//! Query evaluation over a loaded index.

use std::collections::BTreeMap;

use crate::catalog::CatalogIndex;
use crate::search::filter::QueryFilter;
use crate::search::results::QueryResult;

/// Number of products shown per grid page.
pub const PAGE_SIZE: usize = 9;

/// Categories offered by the storefront navigation.
pub const STOREFRONT_CATEGORIES: [&str; 5] =
    ["Ladieswear", "Menswear", "Sport", "Divided", "Baby/Children"];

/// Evaluate `filter` against `index`.
///
/// Matching records keep index order. Facet counts cover every record in
/// the selected category regardless of type toggles and the allow-list,
/// so a disabled type still shows how many items enabling it would add.
pub fn query<'a>(index: &'a CatalogIndex, filter: &QueryFilter) -> QueryResult<'a> {
    let mut matching = Vec::new();
    let mut facet_counts: BTreeMap<String, usize> = BTreeMap::new();

    for record in index {
        if !filter.matches_category(record) {
            continue;
        }
        *facet_counts.entry(record.product_type.clone()).or_insert(0) += 1;

        if filter.matches_type(record) && filter.matches_id(record) {
            matching.push(record);
        }
    }

    tracing::debug!(
        category = filter.category.as_str(),
        toggles = filter.type_toggles.len(),
        allow_ids = filter.allow_ids.len(),
        matched = matching.len(),
        "evaluated catalog query"
    );

    QueryResult::new(matching, facet_counts)
}
