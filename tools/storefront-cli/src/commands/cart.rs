//! Cart commands.

use anyhow::{bail, Context as _, Result};
use dialoguer::Confirm;
use storefront_commerce::cart::{DetailSelection, NewLineItem};
use storefront_commerce::ids::{ItemId, ProductId};

use super::{to_index, CartArgs, CartCommand};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    match args.command.unwrap_or(CartCommand::List) {
        CartCommand::List => list(ctx),
        CartCommand::Add {
            product,
            title,
            price,
            image,
            quantity,
            catalog,
        } => add(product, title, price, image, quantity, catalog, ctx),
        CartCommand::AddDetail {
            title,
            price,
            image,
            size,
            quantity,
        } => add_detail(
            DetailSelection {
                title,
                price,
                image,
                size,
                quantity,
            },
            ctx,
        ),
        CartCommand::Set { position, quantity } => set(position, quantity, ctx),
        CartCommand::Inc { position } => inc(position, ctx),
        CartCommand::Dec { position } => dec(position, ctx),
        CartCommand::Remove { position } => remove(position, ctx),
        CartCommand::Clear { yes } => clear(yes, ctx),
        CartCommand::Checkout => checkout(ctx),
    }
}

fn list(ctx: &Context) -> Result<()> {
    let shop = ctx.open_storefront();
    ctx.output.cart_summary(&shop.cart().summary());
    Ok(())
}

fn add(
    product: Option<String>,
    title: Option<String>,
    price: Option<String>,
    image: String,
    quantity: u32,
    catalog: Option<String>,
    ctx: &Context,
) -> Result<()> {
    let item = match (product, title, price) {
        (Some(id), _, _) => {
            let catalog = ctx.load_catalog(catalog.as_deref())?;
            let card = catalog
                .find(&ProductId::new(id.as_str()))
                .with_context(|| format!("Product '{}' is not in the catalog", id))?;
            card.to_line_item()
        }
        (None, Some(title), Some(price)) => NewLineItem::new(ItemId::generate(), title, price, image),
        _ => bail!("Give a product id, or both --title and --price"),
    };

    let mut shop = ctx.open_storefront();
    let index = shop.cart_mut().add_item(item, quantity)?;
    ctx.output.debug(&format!("line {} updated", index + 1));
    ctx.output.cart_summary(&shop.cart().summary());
    Ok(())
}

fn add_detail(selection: DetailSelection, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_storefront();
    shop.cart_mut().add_from_detail(selection)?;
    ctx.output.cart_summary(&shop.cart().summary());
    Ok(())
}

fn set(position: usize, quantity: u32, ctx: &Context) -> Result<()> {
    let index = to_index(position)?;
    let mut shop = ctx.open_storefront();
    if !shop.cart_mut().set_quantity(index, quantity)? {
        ctx.output.warn("Quantity must be at least 1; nothing changed");
    }
    ctx.output.cart_summary(&shop.cart().summary());
    Ok(())
}

fn inc(position: usize, ctx: &Context) -> Result<()> {
    let index = to_index(position)?;
    let mut shop = ctx.open_storefront();
    shop.cart_mut().increment_quantity(index)?;
    ctx.output.cart_summary(&shop.cart().summary());
    Ok(())
}

fn dec(position: usize, ctx: &Context) -> Result<()> {
    let index = to_index(position)?;
    let mut shop = ctx.open_storefront();
    if !shop.cart_mut().decrement_quantity(index)? {
        ctx.output
            .info("Quantity is already 1; use `storefront cart remove` to drop the line");
    }
    ctx.output.cart_summary(&shop.cart().summary());
    Ok(())
}

fn remove(position: usize, ctx: &Context) -> Result<()> {
    let index = to_index(position)?;
    let mut shop = ctx.open_storefront();
    let removed = shop.cart_mut().remove_item(index)?;
    ctx.output.success(&format!("Removed {}", removed.title));
    ctx.output.cart_summary(&shop.cart().summary());
    Ok(())
}

fn clear(yes: bool, ctx: &Context) -> Result<()> {
    let mut shop = ctx.open_storefront();
    if shop.cart().items().is_empty() {
        ctx.output.info("Cart is already empty");
        return Ok(());
    }

    if !yes && !ctx.output.is_json() {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Remove all {} item(s) from the cart?",
                shop.cart().total_item_count()
            ))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.info("Cancelled");
            return Ok(());
        }
    }

    shop.cart_mut().clear()?;
    ctx.output.success("Cart cleared");
    Ok(())
}

fn checkout(ctx: &Context) -> Result<()> {
    let shop = ctx.open_storefront();
    if !shop.cart().checkout() {
        bail!("Checkout needs at least one item");
    }
    ctx.output.kv("Total", &shop.cart().compute_total().display());
    Ok(())
}
