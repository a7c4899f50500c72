//! Catalog indexing, faceted queries and cart totals for the storefront.
//!
//! This crate is the engine behind the apparel storefront pages:
//!
//! - **Catalog**: Parse the tabular export, build the id-keyed index, load it once
//! - **View**: Project raw records into presentation-ready product views
//! - **Search**: Category / product-type / allow-list filtering with facet counts
//! - **Cart**: Resolve selected ids and total their prices
//!
//! # Example
//!
//! ```rust,ignore
//! use storefront_catalog::prelude::*;
//! use storefront_data::FileSource;
//!
//! let store = CatalogStore::new(FileSource::new("data/product_catalog_v2.csv"));
//! let index = store.load().await?;
//!
//! // Browse a category
//! let result = query(&index, &QueryFilter::category("Menswear"));
//! println!("{} items found", result.total());
//!
//! // Total a checkout selection
//! let subtotal = subtotal(&index, &["108775015", "108775044"])?;
//! println!("Subtotal: {}", format_price(subtotal));
//! ```

pub mod error;
pub mod ids;
pub mod links;
pub mod money;
pub mod view;

pub mod catalog;
pub mod cart;
pub mod search;

pub use error::CatalogError;
pub use ids::ArticleId;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CatalogError;
    pub use crate::ids::ArticleId;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        parse, CatalogIndex, CatalogStore, LoadStats, ProductRecord, RawPrice,
    };

    // View
    pub use crate::view::{format_price, product_name, project, PriceStatus, ProductView};

    // Search
    pub use crate::search::{
        query, CategoryFilter, Facet, FacetValue, Pagination, QueryFilter, QueryResult,
        TypeToggle, PAGE_SIZE, STOREFRONT_CATEGORIES,
    };

    // Cart
    pub use crate::cart::{resolve, subtotal, CartLine, CartPricing, CartResolution};

    // Links
    pub use crate::links::{buy_now_link, checkout_link, product_image_path, product_link};
}
