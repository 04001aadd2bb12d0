//! Storefront CLI - inspect and drive storefront cart and wishlist state.
//!
//! Commands:
//! - `storefront cart` - Add, list, change and check out cart lines
//! - `storefront wishlist` - Toggle and list wishlisted products
//! - `storefront catalog` - Search, filter and resolve page queries
//! - `storefront contact` - Submit the contact form
//! - `storefront config` - Manage configuration

mod commands;
mod config;
mod context;
mod notifier;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{CartArgs, CatalogArgs, ConfigArgs, ContactArgs, WishlistArgs};

/// Storefront CLI - Manage persisted storefront state
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

    /// Storage file path, overriding the config
    #[arg(long, global = true)]
    storage: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the shopping cart
    Cart(CartArgs),

    /// Manage the wishlist
    Wishlist(WishlistArgs),

    /// Browse the product catalog
    Catalog(CatalogArgs),

    /// Submit the contact form
    Contact(ContactArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = context::Context::load(cli.config.as_deref(), cli.storage.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Cart(args) => commands::cart::run(args, &ctx),
        Commands::Wishlist(args) => commands::wishlist::run(args, &ctx),
        Commands::Catalog(args) => commands::catalog::run(args, &ctx),
        Commands::Contact(args) => commands::contact::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Log to stderr. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "storefront_commerce=debug,storefront_cache=debug,storefront_cli=debug"
    } else {
        "warn"
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
