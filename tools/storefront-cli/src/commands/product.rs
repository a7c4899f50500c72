//! Product detail card.

use anyhow::{bail, Result};
use serde::Serialize;
use storefront_catalog::links::{buy_now_link, product_image_path};
use storefront_catalog::view::{project_with, PriceStatus, ProductView};

use super::ProductArgs;
use crate::context::Context;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ProductCard {
    #[serde(flatten)]
    product: ProductView,
    product_type: String,
    image: String,
    checkout_link: String,
}

/// Run the product command.
pub async fn run(args: ProductArgs, ctx: &Context) -> Result<()> {
    let currency = ctx.currency()?;
    let index = ctx.catalog().await?;

    let Some(record) = index.get(args.id.trim()) else {
        bail!("Product {} not found in catalog", args.id.trim());
    };

    let card = ProductCard {
        product: project_with(Some(record), currency),
        product_type: record.product_type.clone(),
        image: product_image_path(ctx.asset_base(), record.article_id.as_str()),
        checkout_link: buy_now_link(&record.article_id),
    };

    if ctx.output.is_json() {
        ctx.output.json(&card);
        return Ok(());
    }

    let product = &card.product;
    ctx.output.header(&product.product_name);
    ctx.output.kv("Article", &product.id);
    ctx.output.kv("Category", &product.category);
    ctx.output.kv("Type", &card.product_type);
    ctx.output.kv("Colour", &product.color);
    match product.price_status {
        PriceStatus::Parsed => ctx.output.kv("Price", &product.price),
        PriceStatus::Missing => ctx.output.kv("Price", "not listed"),
        PriceStatus::Unparseable => {
            ctx.output.kv("Price", "unavailable");
            ctx.output.warn(&format!(
                "Price for {} could not be read from the catalog",
                product.id
            ));
        }
    }
    ctx.output.kv("Image", &card.image);
    ctx.output.kv("Buy now", &card.checkout_link);

    if !product.description.is_empty() {
        println!();
        println!("  {}", product.description);
    }

    Ok(())
}
