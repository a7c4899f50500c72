//! Category grid with product-type facets.

use anyhow::Result;
use serde::Serialize;
use storefront_catalog::links::{product_image_path, product_link};
use storefront_catalog::search::{
    query, CategoryFilter, Facet, Pagination, QueryFilter, TypeToggle,
};
use storefront_catalog::view::{project_with, ProductView};
use storefront_catalog::ArticleId;

use super::ExploreArgs;
use crate::context::Context;
use crate::output::{toggle_mark, truncate};
use crate::params::StorefrontParams;

/// Page links shown under the grid.
const PAGE_STRIP_WIDTH: usize = 5;

/// One tile on the product grid.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GridItem {
    #[serde(flatten)]
    product: ProductView,
    image: String,
    link: String,
}

#[derive(Debug, Serialize)]
struct ExploreReport<'a> {
    category: &'a str,
    filter: &'a QueryFilter,
    total: usize,
    pagination: Pagination,
    facet: Facet,
    products: Vec<GridItem>,
}

/// Run the explore command.
pub async fn run(args: ExploreArgs, ctx: &Context) -> Result<()> {
    let params = args
        .query
        .as_deref()
        .map(StorefrontParams::from_query_string)
        .unwrap_or_default();
    let filter = build_filter(&args, &params);
    let page = args.page.or(params.page).unwrap_or(1);
    let currency = ctx.currency()?;

    let index = ctx.catalog().await?;
    let result = query(&index, &filter);
    let pagination = result.pagination(page);
    let facet = result.type_facet(&filter);

    let products: Vec<GridItem> = result
        .page(page)
        .iter()
        .map(|record| {
            let id = record.article_id.as_str();
            GridItem {
                product: project_with(Some(*record), currency),
                image: product_image_path(ctx.asset_base(), id),
                link: product_link(id),
            }
        })
        .collect();

    let report = ExploreReport {
        category: filter.category.as_str(),
        filter: &filter,
        total: result.total(),
        pagination,
        facet,
        products,
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    print_report(&report, ctx);
    Ok(())
}

/// Explicit flags win over the query string. Toggles only come from flags.
fn build_filter(args: &ExploreArgs, params: &StorefrontParams) -> QueryFilter {
    let category = match args.cat.as_deref() {
        Some(cat) => CategoryFilter::parse(cat),
        None => params.category(),
    };
    let mut filter = QueryFilter::all().with_category(category);

    for product_type in &args.enable {
        filter = filter.with_type(product_type.as_str(), TypeToggle::Enabled);
    }
    for product_type in &args.disable {
        filter = filter.with_type(product_type.as_str(), TypeToggle::Disabled);
    }

    let ids = match args.ids.as_deref() {
        Some(list) => ArticleId::parse_list(list),
        None => params.article_ids.clone(),
    };
    if !ids.is_empty() {
        filter = filter.with_allowed_ids(ids);
    }

    filter
}

fn print_report(report: &ExploreReport<'_>, ctx: &Context) {
    let title = match report.category {
        "all" => "All products".to_string(),
        other => other.to_string(),
    };
    ctx.output
        .header(&format!("{} ({} items)", title, report.total));

    if !report.facet.values.is_empty() {
        println!();
        println!("  {}", report.facet.name);
        for value in &report.facet.values {
            ctx.output.list_item(&format!(
                "{} {} ({})",
                toggle_mark(value.selected),
                value.value,
                value.count
            ));
        }
    }

    if report.products.is_empty() {
        println!();
        if report.total == 0 {
            ctx.output.info("No products match the current filters.");
        } else {
            ctx.output.info(&format!(
                "Page {} is past the end ({} pages).",
                report.pagination.page, report.pagination.total_pages
            ));
        }
        return;
    }

    println!();
    let widths = [12, 36, 10, 18];
    ctx.output
        .table_row(&["ID", "NAME", "PRICE", "COLOUR"], &widths);
    for item in &report.products {
        let name = truncate(&item.product.product_name, widths[1]);
        ctx.output.table_row(
            &[
                &item.product.id,
                &name,
                &item.product.price,
                &item.product.color,
            ],
            &widths,
        );
    }

    println!();
    ctx.output.kv(
        "Showing",
        &format!(
            "{}-{} of {} (page {}/{})",
            report.pagination.start_item(),
            report.pagination.end_item(),
            report.total,
            report.pagination.page,
            report.pagination.total_pages
        ),
    );
    if report.pagination.total_pages > 1 {
        ctx.output.kv("Pages", &page_strip(&report.pagination));
    }
    if report.pagination.has_next {
        ctx.output.debug(&format!(
            "Next page: storefront explore --cat '{}' --page {}",
            report.category,
            report.pagination.page + 1
        ));
    }
}

/// Page numbers around the current page, the current one bracketed.
fn page_strip(pagination: &Pagination) -> String {
    pagination
        .page_numbers(PAGE_STRIP_WIDTH)
        .into_iter()
        .map(|n| {
            if n == pagination.page {
                format!("[{}]", n)
            } else {
                n.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
