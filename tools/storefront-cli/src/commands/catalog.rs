//! Catalog commands.

use anyhow::Result;
use storefront_commerce::catalog::{CategoryFilter, PageQuery, ProductCard};

use super::{CatalogArgs, CatalogCommand};
use crate::context::Context;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog_path = args.catalog.as_deref();
    match args.command {
        CatalogCommand::List { category, label } => {
            list(category.as_deref(), label.as_deref(), catalog_path, ctx)
        }
        CatalogCommand::Search { term } => search(&term, catalog_path, ctx),
        CatalogCommand::Query { query: raw } => query(&raw, catalog_path, ctx),
    }
}

fn print_cards(cards: &[&ProductCard], ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(&cards);
        return;
    }
    let widths = [16, 32, 10, 12];
    ctx.output.table_row(&["Id", "Title", "Price", "Category"], &widths);
    for card in cards {
        let id = card.id.as_ref().map(|id| id.as_str()).unwrap_or("-");
        let category = card.category.as_ref().map(|c| c.as_str()).unwrap_or("-");
        ctx.output.table_row(
            &[id, card.title.as_str(), card.price.as_str(), category],
            &widths,
        );
    }
}

fn list(category: Option<&str>, label: Option<&str>, path: Option<&str>, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(path)?;
    let shop = ctx.open_storefront();

    let cards = match category {
        Some(category) => {
            let filter = CategoryFilter::parse(category);
            shop.apply_category_filter(&catalog, &filter, label)
        }
        None => catalog.cards().iter().collect(),
    };
    print_cards(&cards, ctx);
    Ok(())
}

fn search(term: &str, path: Option<&str>, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(path)?;
    let shop = ctx.open_storefront();

    let cards: Vec<&ProductCard> = shop
        .search(&catalog, term)
        .into_iter()
        .filter_map(|i| catalog.cards().get(i))
        .collect();
    if !cards.is_empty() {
        print_cards(&cards, ctx);
    }
    Ok(())
}

fn query(raw: &str, path: Option<&str>, ctx: &Context) -> Result<()> {
    let query_string = match raw.split_once('?') {
        Some((_, query)) => query,
        None => raw,
    };
    let query = PageQuery::parse(query_string);
    ctx.output.debug(&format!("parsed {:?}", query));

    let catalog = ctx.load_catalog(path)?;
    let shop = ctx.open_storefront();
    let (cards, product) = shop.resolve_query(&catalog, &query);

    if let Some(product) = product {
        if ctx.output.is_json() {
            ctx.output.json(product);
            return Ok(());
        }
        ctx.output.header(&product.title);
        ctx.output.kv("price", &product.price);
        if !product.image.is_empty() {
            ctx.output.kv("image", &product.image);
        }
        return Ok(());
    }
    if let Some(id) = &query.product_id {
        ctx.output.warn(&format!("Product '{}' is not in the catalog", id));
    }
    print_cards(&cards, ctx);
    Ok(())
}
