//! Storefront URLs derived from article ids.

use crate::ids::ArticleId;

/// Base path that catalog assets are served from.
pub const DEFAULT_ASSET_BASE: &str = "/data";

/// Image path for a product: `<base>/product_catalog_images/0<id>.jpg`.
///
/// Exported ids have their leading zero stripped; image file names keep it.
pub fn product_image_path(base: &str, id: &str) -> String {
    format!(
        "{}/product_catalog_images/0{}.jpg",
        base.trim_end_matches('/'),
        id
    )
}

/// Product detail page.
pub fn product_link(id: &str) -> String {
    format!("/product/{id}")
}

/// Checkout confirmation page for a selection.
pub fn checkout_link<I>(ids: I) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let joined = ids
        .into_iter()
        .map(|id| id.as_ref().to_string())
        .collect::<Vec<_>>()
        .join(",");
    format!("/checkout/confirm-checkout?article_ids={joined}")
}

/// Checkout link for a single product's "buy now" button.
pub fn buy_now_link(id: &ArticleId) -> String {
    checkout_link([id])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_image_path() {
        assert_eq!(
            product_image_path(DEFAULT_ASSET_BASE, "108775015"),
            "/data/product_catalog_images/0108775015.jpg"
        );
        assert_eq!(
            product_image_path("https://cdn.example.com/", "1"),
            "https://cdn.example.com/product_catalog_images/01.jpg"
        );
    }

    #[test]
    fn test_product_link() {
        assert_eq!(product_link("108775015"), "/product/108775015");
    }

    #[test]
    fn test_checkout_link() {
        assert_eq!(
            checkout_link(["1", "2"]),
            "/checkout/confirm-checkout?article_ids=1,2"
        );
        assert_eq!(
            buy_now_link(&ArticleId::new("7")),
            "/checkout/confirm-checkout?article_ids=7"
        );
    }
}
