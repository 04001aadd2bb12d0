//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;
pub mod contact;
pub mod wishlist;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};

/// Convert a 1-based position typed by the user to a cart index.
pub(crate) fn to_index(position: usize) -> Result<usize> {
    match position.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("Positions start at 1"),
    }
}

/// Arguments for the cart command.
#[derive(Args)]
pub struct CartArgs {
    #[command(subcommand)]
    pub command: Option<CartCommand>,
}

#[derive(Subcommand)]
pub enum CartCommand {
    /// Show the cart summary.
    List,
    /// Add a product card from the catalog, or an ad hoc product.
    Add {
        /// Product id to look up in the catalog.
        product: Option<String>,

        /// Title of an ad hoc product.
        #[arg(long, requires = "price", conflicts_with = "product")]
        title: Option<String>,

        /// Display price of an ad hoc product, e.g. "₹1,200".
        #[arg(long, requires = "title")]
        price: Option<String>,

        /// Image URL of an ad hoc product.
        #[arg(long, default_value = "")]
        image: String,

        /// Number of units to add.
        #[arg(short, long, default_value = "1")]
        quantity: u32,

        /// Catalog file (default: cli.catalog from the config).
        #[arg(long)]
        catalog: Option<String>,
    },
    /// Add a product-detail selection as its own line.
    AddDetail {
        /// Product title.
        #[arg(long)]
        title: String,

        /// Display price.
        #[arg(long)]
        price: String,

        /// Image URL.
        #[arg(long, default_value = "")]
        image: String,

        /// Selected size (default: default_size from the config).
        #[arg(long)]
        size: Option<String>,

        /// Number of units.
        #[arg(short, long)]
        quantity: Option<u32>,
    },
    /// Set the quantity of a line.
    Set {
        /// Line position, starting at 1.
        position: usize,
        /// New quantity.
        quantity: u32,
    },
    /// Add one to a line.
    Inc {
        /// Line position, starting at 1.
        position: usize,
    },
    /// Subtract one from a line.
    Dec {
        /// Line position, starting at 1.
        position: usize,
    },
    /// Remove a line.
    Remove {
        /// Line position, starting at 1.
        position: usize,
    },
    /// Remove every line.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Start the demo checkout.
    Checkout,
}

/// Arguments for the wishlist command.
#[derive(Args)]
pub struct WishlistArgs {
    #[command(subcommand)]
    pub command: Option<WishlistCommand>,
}

#[derive(Subcommand)]
pub enum WishlistCommand {
    /// Show wishlisted products.
    Show,
    /// Add or remove a product.
    Toggle {
        /// Product id.
        product: String,
    },
    /// Remove every product.
    Clear {
        /// Skip confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommand,

    /// Catalog file (default: cli.catalog from the config).
    #[arg(long, global = true)]
    pub catalog: Option<String>,
}

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List product cards, optionally in one category.
    List {
        /// Category id, or "all".
        #[arg(short = 'C', long)]
        category: Option<String>,

        /// Label announced for the category.
        #[arg(long)]
        label: Option<String>,
    },
    /// Search card titles.
    Search {
        /// Search term, matched case-insensitively.
        term: String,
    },
    /// Resolve a page URL or query string.
    Query {
        /// e.g. "?category=sarees" or "https://shop.example/product.html?id=saree-1".
        query: String,
    },
}

/// Arguments for the contact command.
#[derive(Args)]
pub struct ContactArgs {
    /// Your name.
    #[arg(long, default_value = "")]
    pub name: String,

    /// Your email address.
    #[arg(long, default_value = "")]
    pub email: String,

    /// Subject line.
    #[arg(long, default_value = "")]
    pub subject: String,

    /// Message body.
    #[arg(short, long, default_value = "")]
    pub message: String,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file.
    Validate,
}
