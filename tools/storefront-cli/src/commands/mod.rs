//! CLI command implementations.

pub mod categories;
pub mod checkout;
pub mod explore;
pub mod product;

use clap::Args;

/// Arguments for the explore command.
#[derive(Args)]
pub struct ExploreArgs {
    /// Category to browse ("all" for every category).
    #[arg(long)]
    pub cat: Option<String>,

    /// Product type to switch on (repeatable).
    #[arg(long = "enable", value_name = "TYPE")]
    pub enable: Vec<String>,

    /// Product type to switch off (repeatable).
    #[arg(long = "disable", value_name = "TYPE")]
    pub disable: Vec<String>,

    /// Restrict to these article ids (comma separated).
    #[arg(long)]
    pub ids: Option<String>,

    /// Page query string, e.g. "cat=Menswear".
    #[arg(short, long)]
    pub query: Option<String>,

    /// Grid page (1-indexed).
    #[arg(short, long)]
    pub page: Option<usize>,
}

/// Arguments for the product command.
#[derive(Args)]
pub struct ProductArgs {
    /// Article id.
    pub id: String,
}

/// Arguments for the checkout command.
#[derive(Args)]
pub struct CheckoutArgs {
    /// Article ids to check out (space or comma separated).
    pub ids: Vec<String>,

    /// Page query string, e.g. "article_ids=1,2".
    #[arg(short, long)]
    pub query: Option<String>,
}

/// Arguments for the categories command.
#[derive(Args)]
pub struct CategoriesArgs {
    /// List every category in the export, not just the navigation ones.
    #[arg(short, long)]
    pub all: bool,
}
