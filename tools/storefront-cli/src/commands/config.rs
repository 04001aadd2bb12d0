//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Get { key } => get_config(&key, ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
        ConfigCommand::Validate => validate_config(ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    let storefront = &ctx.config.storefront;
    ctx.output.kv("currency", storefront.currency.code());
    ctx.output.kv("default_size", &storefront.default_size);

    // Storage keys
    ctx.output.info("");
    ctx.output.info("[storage]");
    ctx.output.kv("cart", &storefront.storage.cart);
    ctx.output.kv("wishlist_count", &storefront.storage.wishlist_count);
    ctx.output.kv("wishlist_items", &storefront.storage.wishlist_items);

    // Notifications
    ctx.output.info("");
    ctx.output.info("[notifications]");
    ctx.output
        .kv("general_ms", &storefront.notifications.general_ms.to_string());
    ctx.output
        .kv("cart_ms", &storefront.notifications.cart_ms.to_string());

    // CLI
    ctx.output.info("");
    ctx.output.info("[cli]");
    ctx.output
        .kv("storage_path", &ctx.storage_path().display().to_string());
    if let Some(ref catalog) = ctx.config.cli.catalog {
        ctx.output.kv("catalog", catalog);
    }

    Ok(())
}

fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("storefront.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let errors = validation_errors(&ctx.config);
    let mut warnings: Vec<String> = Vec::new();

    if let Some(ref catalog) = ctx.config.cli.catalog {
        if !ctx.resolve_path(catalog).exists() {
            warnings.push(format!("cli.catalog '{}' does not exist", catalog));
        }
    }

    // Print results
    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}

fn validation_errors(config: &CliConfig) -> Vec<String> {
    let mut errors = Vec::new();
    let storage = &config.storefront.storage;

    for (name, key) in [
        ("storage.cart", &storage.cart),
        ("storage.wishlist_count", &storage.wishlist_count),
        ("storage.wishlist_items", &storage.wishlist_items),
    ] {
        if key.trim().is_empty() {
            errors.push(format!("{} must not be empty", name));
        }
    }

    // Every key must be distinct or one store overwrites another.
    if storage.cart == storage.wishlist_count
        || storage.cart == storage.wishlist_items
        || storage.wishlist_count == storage.wishlist_items
    {
        errors.push("storage keys must be distinct".to_string());
    }

    if config.storefront.default_size.trim().is_empty() {
        errors.push("default_size must not be empty".to_string());
    }
    if config.storefront.notifications.general_ms == 0 || config.storefront.notifications.cart_ms == 0 {
        errors.push("notification lifetimes must be greater than zero".to_string());
    }
    if config.cli.storage_path.trim().is_empty() {
        errors.push("cli.storage_path must not be empty".to_string());
    }

    errors
}

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();
    let storefront = &config.storefront;

    match parts.as_slice() {
        ["currency"] => Ok(storefront.currency.code().to_string()),
        ["default_size"] => Ok(storefront.default_size.clone()),
        ["storage", "cart"] => Ok(storefront.storage.cart.clone()),
        ["storage", "wishlist_count"] => Ok(storefront.storage.wishlist_count.clone()),
        ["storage", "wishlist_items"] => Ok(storefront.storage.wishlist_items.clone()),
        ["notifications", "general_ms"] => Ok(storefront.notifications.general_ms.to_string()),
        ["notifications", "cart_ms"] => Ok(storefront.notifications.cart_ms.to_string()),
        ["cli", "storage_path"] => Ok(config.cli.storage_path.clone()),
        ["cli", "catalog"] => Ok(config.cli.catalog.clone().unwrap_or_default()),
        _ => bail!("Unknown config key: {}", key),
    }
}
