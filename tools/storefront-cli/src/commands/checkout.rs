//! Checkout confirmation: resolve a selection and price it.

use anyhow::Result;
use serde::Serialize;
use storefront_catalog::cart::{resolve_with, CartLine, CartPricing};
use storefront_catalog::links::checkout_link;
use storefront_catalog::{ArticleId, CatalogError};

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::truncate;
use crate::params::StorefrontParams;

#[derive(Debug, Serialize)]
struct CheckoutReport<'a> {
    lines: &'a [CartLine],
    not_found: Vec<&'a ArticleId>,
    pricing: &'a CartPricing,
    link: String,
}

/// Run the checkout command.
pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let ids = selected_ids(&args);
    if ids.is_empty() {
        return Err(CatalogError::EmptyCart.into());
    }

    let currency = ctx.currency()?;
    let delivery = ctx.delivery_charge()?;
    let index = ctx.catalog().await?;

    let resolution = resolve_with(&index, &ids, currency)?;
    let pricing = CartPricing::new(&resolution, delivery);

    if ctx.output.is_json() {
        ctx.output.json(&CheckoutReport {
            lines: &resolution.lines,
            not_found: resolution.not_found(),
            pricing: &pricing,
            link: checkout_link(&ids),
        });
        return Ok(());
    }

    ctx.output.header("Order summary");
    let widths = [12, 36, 10];
    for line in &resolution.lines {
        match line {
            CartLine::Resolved(view) => {
                let name = truncate(&view.product_name, widths[1]);
                ctx.output
                    .table_row(&[&view.id, &name, &view.price], &widths);
            }
            CartLine::NotFound { id } => {
                ctx.output
                    .table_row(&[id.as_str(), "(not in catalog)", "-"], &widths);
            }
        }
    }

    println!();
    ctx.output.kv("Subtotal", &pricing.subtotal.display());
    if pricing.has_delivery_charge() {
        ctx.output.kv("Delivery", &pricing.delivery_charge.display());
    }
    ctx.output.kv("Total", &pricing.grand_total.display());

    let missing = resolution.not_found();
    if !missing.is_empty() {
        let list: Vec<&str> = missing.iter().map(|id| id.as_str()).collect();
        ctx.output.warn(&format!(
            "{} item(s) not found and left out of the total: {}",
            missing.len(),
            list.join(", ")
        ));
    }

    ctx.output.success(&format!(
        "{} item(s) ready: {}",
        pricing.item_count,
        checkout_link(&ids)
    ));
    Ok(())
}

/// Ids from positional arguments first, then the query string.
fn selected_ids(args: &CheckoutArgs) -> Vec<ArticleId> {
    let mut ids: Vec<ArticleId> = args
        .ids
        .iter()
        .flat_map(|arg| ArticleId::parse_list(arg))
        .collect();
    if let Some(qs) = args.query.as_deref() {
        ids.extend(StorefrontParams::from_query_string(qs).article_ids);
    }
    ids
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selected_ids() {
        let args = CheckoutArgs {
            ids: vec!["1,2".to_string(), "3".to_string()],
            query: Some("?article_ids=4,1".to_string()),
        };
        let ids: Vec<String> = selected_ids(&args)
            .into_iter()
            .map(ArticleId::into_inner)
            .collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "1"]);
    }

    #[test]
    fn test_no_ids() {
        let args = CheckoutArgs {
            ids: vec![" , ".to_string()],
            query: None,
        };
        assert!(selected_ids(&args).is_empty());
    }
}
