//! Storefront CLI - browse the product catalog export from the terminal.
//!
//! Commands:
//! - `storefront explore` - Category grid with product-type facets
//! - `storefront product` - Product detail card
//! - `storefront checkout` - Price a selection of article ids
//! - `storefront categories` - Item counts per storefront category

mod commands;
mod config;
mod context;
mod output;
mod params;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use commands::{CategoriesArgs, CheckoutArgs, ExploreArgs, ProductArgs};
use context::SourceOverrides;

/// Storefront CLI - Browse the apparel catalog and price checkouts
#[derive(Parser)]
#[command(name = "storefront")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Catalog export on disk (overrides config)
    #[arg(long, global = true)]
    source: Option<String>,

    /// Catalog export over HTTP (overrides config)
    #[arg(long, global = true, conflicts_with = "source")]
    url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a category with product-type toggles
    Explore(ExploreArgs),

    /// Show a single product
    Product(ProductArgs),

    /// Price a checkout selection
    Checkout(CheckoutArgs),

    /// Count items per storefront category
    Categories(CategoriesArgs),
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    let overrides = SourceOverrides {
        config: cli.config,
        source: cli.source,
        url: cli.url,
    };
    let ctx = match context::Context::load(&overrides, output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Explore(args) => commands::explore::run(args, &ctx).await,
        Commands::Product(args) => commands::product::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Categories(args) => commands::categories::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
