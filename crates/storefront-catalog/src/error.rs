//! Catalog error types.

use storefront_data::FetchError;
use thiserror::Error;

/// Errors raised by the catalog core.
///
/// Lookups of unknown ids are not errors; they surface as
/// [`CartLine::NotFound`](crate::cart::CartLine::NotFound) or `None`.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The byte source could not be retrieved.
    #[error("Catalog source unavailable: {0}")]
    SourceUnavailable(#[from] FetchError),

    /// The export violates the tabular structure.
    #[error("Malformed catalog input at line {line}: {reason}")]
    MalformedInput { line: u64, reason: String },

    /// A cart total was requested for an empty selection.
    #[error("Cannot total an empty cart")]
    EmptyCart,
}

impl CatalogError {
    pub(crate) fn malformed(line: u64, reason: impl Into<String>) -> Self {
        CatalogError::MalformedInput {
            line,
            reason: reason.into(),
        }
    }

    /// Whether a later load attempt could succeed without changing the input.
    pub fn is_retryable(&self) -> bool {
        matches!(self, CatalogError::SourceUnavailable(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CatalogError::malformed(3, "expected 7 fields, found 5");
        assert_eq!(
            err.to_string(),
            "Malformed catalog input at line 3: expected 7 fields, found 5"
        );

        let err: CatalogError = FetchError::NotFound("/data/catalog.csv".into()).into();
        assert_eq!(
            err.to_string(),
            "Catalog source unavailable: Source not found: /data/catalog.csv"
        );
        assert!(err.is_retryable());
        assert!(!CatalogError::EmptyCart.is_retryable());
    }
}
