//! Catalog listing.

use anyhow::Result;
use shopfront_commerce::presentation::ProductCard;

use super::CatalogArgs;
use crate::context::Context;
use crate::output::stock_badge;

/// Run the catalog command.
pub fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;

    if ctx.output.is_json() {
        ctx.output.json(&catalog);
        return Ok(());
    }

    ctx.output.header(&format!(
        "Catalog ({} products, {})",
        catalog.len(),
        catalog.currency()
    ));

    if catalog.is_empty() {
        ctx.output.info("The catalog has no products.");
        return Ok(());
    }

    let threshold = ctx.config.presentation.low_stock_threshold;
    for product in catalog.products() {
        ctx.output.header(&format!("{} [{}]", product.name, product.id));
        if let Some(description) = &product.description {
            ctx.output.kv("description", description);
        }

        let card = ProductCard::new(product, ctx.config.presentation);
        if card.selected_variant().is_none() {
            ctx.output.info("No variants available.");
            continue;
        }

        for variant in &product.variants {
            let price = variant.price.display();
            let status = stock_badge(variant.stock_status(threshold));
            ctx.output.table_row(
                &[variant.id.as_str(), &variant.name, &price, &status],
                &[10, 18, 10, 0],
            );
        }
    }

    Ok(())
}
