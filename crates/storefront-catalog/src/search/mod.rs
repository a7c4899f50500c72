//! Search module.
//!
//! Contains query filters, the query engine, facets and pagination.

mod filter;
mod query;
mod results;

pub use filter::{CategoryFilter, QueryFilter, TypeToggle, ALL_CATEGORIES};
pub use query::{query, PAGE_SIZE, STOREFRONT_CATEGORIES};
pub use results::{Facet, FacetValue, Pagination, QueryResult};
