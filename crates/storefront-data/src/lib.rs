//! Byte sources for the storefront catalog.
//!
//! This crate provides:
//! - `ByteSource` - The seam the catalog loads its export through
//! - `FileSource` / `HttpSource` / `StaticSource` - Concrete sources
//! - `FetchPolicy` - Timeout and retry settings for remote sources
//! - `RetryPolicy` - Retry strategies

mod client;
mod retry;
mod source;

pub use client::*;
pub use retry::*;
pub use source::*;
