//! Item counts per category.

use std::collections::BTreeMap;

use anyhow::Result;
use serde::Serialize;
use storefront_catalog::search::STOREFRONT_CATEGORIES;

use super::CategoriesArgs;
use crate::context::Context;

#[derive(Debug, Serialize, PartialEq)]
struct CategoryCount {
    name: String,
    count: usize,
}

/// Run the categories command.
pub async fn run(args: CategoriesArgs, ctx: &Context) -> Result<()> {
    let index = ctx.catalog().await?;
    let counts = category_rows(&index.category_counts(), args.all);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "total": index.len(),
            "categories": counts,
        }));
        return Ok(());
    }

    ctx.output.header("Categories");
    let widths = [20, 8];
    for row in &counts {
        ctx.output
            .table_row(&[&row.name, &row.count.to_string()], &widths);
    }
    println!();
    ctx.output.kv("All products", &index.len().to_string());
    Ok(())
}

/// Navigation categories in menu order, or every category by name.
fn category_rows(counts: &BTreeMap<&str, usize>, all: bool) -> Vec<CategoryCount> {
    if all {
        return counts
            .iter()
            .map(|(name, &count)| CategoryCount {
                name: name.to_string(),
                count,
            })
            .collect();
    }

    STOREFRONT_CATEGORIES
        .iter()
        .map(|name| CategoryCount {
            name: name.to_string(),
            count: counts.get(name).copied().unwrap_or(0),
        })
        .collect()
}
