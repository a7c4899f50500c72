//! Lazily loaded, shared catalog.

use std::sync::Arc;

use storefront_data::ByteSource;
use tokio::sync::OnceCell;

use crate::catalog::index::CatalogIndex;
use crate::catalog::parser::parse_bytes;
use crate::catalog::record::ProductRecord;
use crate::error::CatalogError;

/// Owns the catalog index and the source it is read from.
///
/// The first call to [`CatalogStore::load`] fetches and parses the export;
/// callers arriving while that load is in flight wait for it instead of
/// starting their own. A failed or cancelled load leaves the store empty,
/// so the next call starts over. Once loaded, every caller shares the same
/// `Arc<CatalogIndex>`.
pub struct CatalogStore {
    source: Arc<dyn ByteSource>,
    index: OnceCell<Arc<CatalogIndex>>,
}

impl CatalogStore {
    /// Create a store reading from `source`.
    pub fn new(source: impl ByteSource + 'static) -> Self {
        Self::from_source(Arc::new(source))
    }

    /// Create a store over a shared source.
    pub fn from_source(source: Arc<dyn ByteSource>) -> Self {
        Self {
            source,
            index: OnceCell::new(),
        }
    }

    /// Create a store that is already loaded with `index`.
    pub fn preloaded(source: Arc<dyn ByteSource>, index: CatalogIndex) -> Self {
        Self {
            source,
            index: OnceCell::new_with(Some(Arc::new(index))),
        }
    }

    /// Load the catalog, reusing the result of an earlier successful load.
    pub async fn load(&self) -> Result<Arc<CatalogIndex>, CatalogError> {
        self.index
            .get_or_try_init(|| self.fetch_and_index())
            .await
            .map(Arc::clone)
    }

    /// Load if needed, then look up one record.
    pub async fn get(&self, id: &str) -> Result<Option<ProductRecord>, CatalogError> {
        let index = self.load().await?;
        Ok(index.get(id).cloned())
    }

    /// The index, if a load has already completed.
    pub fn loaded(&self) -> Option<Arc<CatalogIndex>> {
        self.index.get().cloned()
    }

    pub fn is_loaded(&self) -> bool {
        self.index.initialized()
    }

    /// Where the catalog is read from.
    pub fn source_description(&self) -> String {
        self.source.describe()
    }

    async fn fetch_and_index(&self) -> Result<Arc<CatalogIndex>, CatalogError> {
        let location = self.source.describe();
        tracing::info!(source = %location, "reading catalog");

        let bytes = self.source.fetch().await.map_err(|e| {
            tracing::warn!(source = %location, error = %e, "catalog source unavailable");
            CatalogError::from(e)
        })?;

        let records = parse_bytes(&bytes).map_err(|e| {
            tracing::warn!(source = %location, error = %e, "catalog export rejected");
            e
        })?;

        let index = CatalogIndex::from_records(records);
        let stats = index.stats();
        tracing::info!(
            source = %location,
            rows = stats.rows,
            unique = stats.unique,
            duplicates = stats.duplicates_overwritten,
            "loaded catalog"
        );
        Ok(Arc::new(index))
    }
}
