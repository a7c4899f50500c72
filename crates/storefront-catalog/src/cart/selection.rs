//! Resolving a checkout selection against the catalog.

use serde::Serialize;

use crate::catalog::CatalogIndex;
use crate::error::CatalogError;
use crate::ids::ArticleId;
use crate::money::Currency;
use crate::view::{project_with, ProductView};

/// One selected id after lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CartLine {
    /// The id is in the catalog.
    Resolved(ProductView),
    /// The id is not in the catalog; it contributes nothing to the total.
    NotFound { id: ArticleId },
}

impl CartLine {
    pub fn view(&self) -> Option<&ProductView> {
        match self {
            CartLine::Resolved(view) => Some(view),
            CartLine::NotFound { .. } => None,
        }
    }
}

/// Every line of a selection plus the subtotal of the resolved ones.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartResolution {
    /// One line per selected id, in selection order.
    pub lines: Vec<CartLine>,
    /// Sum of `price_num` over resolved lines.
    pub subtotal: f64,
}

impl CartResolution {
    /// Views of the resolved lines.
    pub fn resolved(&self) -> impl Iterator<Item = &ProductView> {
        self.lines.iter().filter_map(CartLine::view)
    }

    /// Ids that were not in the catalog.
    pub fn not_found(&self) -> Vec<&ArticleId> {
        self.lines
            .iter()
            .filter_map(|line| match line {
                CartLine::NotFound { id } => Some(id),
                CartLine::Resolved(_) => None,
            })
            .collect()
    }

    /// True when every selected id resolved.
    pub fn is_complete(&self) -> bool {
        self.lines
            .iter()
            .all(|line| matches!(line, CartLine::Resolved(_)))
    }
}

/// Resolve each selected id and total the prices.
///
/// Repeated ids count once per occurrence. Unknown ids become
/// [`CartLine::NotFound`] and are logged. An empty selection is an error.
pub fn resolve<I>(index: &CatalogIndex, ids: I) -> Result<CartResolution, CatalogError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    resolve_with(index, ids, Currency::default())
}

/// [`resolve`] with prices formatted in `currency`.
pub fn resolve_with<I>(
    index: &CatalogIndex,
    ids: I,
    currency: Currency,
) -> Result<CartResolution, CatalogError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let lines: Vec<CartLine> = ids
        .into_iter()
        .map(|id| {
            let id = id.as_ref();
            match index.get(id) {
                Some(record) => CartLine::Resolved(project_with(Some(record), currency)),
                None => {
                    tracing::warn!(id, "cart item not found in catalog");
                    CartLine::NotFound { id: id.into() }
                }
            }
        })
        .collect();

    if lines.is_empty() {
        return Err(CatalogError::EmptyCart);
    }

    // Summed in ascending order so the total does not depend on selection order.
    let mut prices: Vec<f64> = lines
        .iter()
        .filter_map(CartLine::view)
        .map(|v| v.price_num)
        .collect();
    prices.sort_by(f64::total_cmp);
    let subtotal: f64 = prices.iter().sum();

    Ok(CartResolution { lines, subtotal })
}

/// Subtotal of the selected ids.
pub fn subtotal<I>(index: &CatalogIndex, ids: I) -> Result<f64, CatalogError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    resolve(index, ids).map(|r| r.subtotal)
}
