//! Catalog module.
//!
//! Contains the export parser, the id-keyed index and the shared store
//! that loads it once.

mod index;
mod parser;
mod record;
mod store;

pub use index::{CatalogIndex, LoadStats};
pub use parser::{parse, parse_bytes};
pub use record::{
    ProductRecord, RawPrice, ARTICLE_ID, COLOUR_GROUP_NAME, DETAIL_DESC, INDEX_GROUP_NAME,
    PRICE, PRODUCT_GROUP_NAME, PROD_NAME,
};
pub use store::CatalogStore;
