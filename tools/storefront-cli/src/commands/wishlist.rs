//! Wishlist commands.

use anyhow::Result;
use dialoguer::Confirm;
use serde::Serialize;
use storefront_commerce::ids::ProductId;

use super::{WishlistArgs, WishlistCommand};
use crate::context::Context;
use crate::output::badge;

/// Run the wishlist command.
pub fn run(args: WishlistArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(WishlistCommand::Show) {
        WishlistCommand::Show => show(ctx),
        WishlistCommand::Toggle { product } => toggle(&product, ctx),
        WishlistCommand::Clear { yes } => clear(yes, ctx),
    }
}

#[derive(Serialize)]
struct WishlistView<'a> {
    count: u32,
    products: &'a [ProductId],
    untracked: u32,
}

fn show(ctx: &Context) -> Result<()> {
    let shop = ctx.open_storefront();
    let wishlist = shop.wishlist().wishlist();

    if ctx.output.is_json() {
        ctx.output.json(&WishlistView {
            count: wishlist.count(),
            products: wishlist.members(),
            untracked: wishlist.untracked(),
        });
        return Ok(());
    }

    ctx.output.header("Wishlist");
    println!("  {}", badge("Wishlist", &shop.wishlist().badge()));
    for product in wishlist.members() {
        ctx.output.list_item(product.as_str());
    }
    if wishlist.untracked() > 0 {
        ctx.output.kv(
            "saved before product tracking",
            &wishlist.untracked().to_string(),
        );
    }
    Ok(())
}

fn toggle(product: &str, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_storefront();
    shop.wishlist_mut().toggle(&ProductId::new(product))?;
    if !ctx.output.is_json() {
        println!("  {}", badge("Wishlist", &shop.wishlist().badge()));
    }
    Ok(())
}

fn clear(yes: bool, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_storefront();
    if shop.wishlist().count() == 0 {
        ctx.output.info("Wishlist is already empty");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} product(s) from the wishlist?",
                shop.wishlist().count()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cancelled");
            return Ok(());
        }
    }

    shop.wishlist_mut().clear()?;
    ctx.output.success("Wishlist cleared");
    Ok(())
}
