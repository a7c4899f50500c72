//! In-memory catalog index.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::catalog::record::ProductRecord;
use crate::ids::ArticleId;

/// Counters reported after building an index.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadStats {
    /// Rows read from the export.
    pub rows: usize,
    /// Distinct ids kept.
    pub unique: usize,
    /// Rows that replaced an earlier row with the same id.
    pub duplicates_overwritten: usize,
}

/// Id-keyed view over the catalog rows.
///
/// Iteration follows the order in which ids were first seen. A later row
/// with an already-seen id replaces the earlier record in place
/// (last write wins, first position kept). The index is immutable once
/// built.
#[derive(Debug, Clone, Default)]
pub struct CatalogIndex {
    records: Vec<ProductRecord>,
    positions: HashMap<ArticleId, usize>,
    stats: LoadStats,
}

impl CatalogIndex {
    /// Build an index from parsed rows.
    pub fn from_records(records: impl IntoIterator<Item = ProductRecord>) -> Self {
        let mut index = CatalogIndex::default();
        for record in records {
            index.stats.rows += 1;
            match index.positions.get(&record.article_id) {
                Some(&pos) => {
                    index.records[pos] = record;
                    index.stats.duplicates_overwritten += 1;
                }
                None => {
                    index
                        .positions
                        .insert(record.article_id.clone(), index.records.len());
                    index.records.push(record);
                }
            }
        }
        index.stats.unique = index.records.len();
        index
    }

    /// Look up a record by id.
    pub fn get(&self, id: &str) -> Option<&ProductRecord> {
        self.positions.get(id).map(|&pos| &self.records[pos])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.positions.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, ProductRecord> {
        self.records.iter()
    }

    /// Ids in index order.
    pub fn ids(&self) -> impl Iterator<Item = &ArticleId> {
        self.records.iter().map(|r| &r.article_id)
    }

    pub fn stats(&self) -> LoadStats {
        self.stats
    }

    /// Number of records per top-level category.
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.category.as_str()).or_insert(0) += 1;
        }
        counts
    }
}

impl<'a> IntoIterator for &'a CatalogIndex {
    type Item = &'a ProductRecord;
    type IntoIter = std::slice::Iter<'a, ProductRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
