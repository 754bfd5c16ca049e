//! One in-memory cart session.

use anyhow::Result;
use shopfront_commerce::cart::CartStore;
use shopfront_commerce::catalog::Catalog;
use shopfront_commerce::context::{use_cart, CartProvider, Scope};
use shopfront_commerce::ids::{ProductId, VariantId};
use shopfront_commerce::presentation::{badge_label, AddOutcome, ProductCard};

use super::{CartAction, CartArgs};
use crate::context::Context;

/// Run the cart command.
pub fn run(args: CartArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.load_catalog(args.catalog.as_deref())?;

    // The header reads totals, the product grid writes; both sit under the provider.
    let app = CartProvider::new(catalog.currency()).mount(&Scope::root());
    let header = app.child();
    let grid = app.child();

    for action in &args.actions {
        tracing::debug!(%action, "applying cart action");
        apply(action, &catalog, &grid, ctx)?;
    }

    let cart = use_cart(&header)?;
    let summary = cart.summary();

    if ctx.output.is_json() {
        ctx.output.json(&summary);
        return Ok(());
    }

    ctx.output.header("Cart");
    if summary.is_empty() {
        ctx.output.info("Your cart is empty.");
    }
    for line in &summary.items {
        let item = &line.item;
        let quantity = format!("x{}", item.quantity);
        let total = line.line_total.display();
        ctx.output.table_row(
            &[&item.product_name, &item.variant_name, &quantity, &total],
            &[30, 16, 5, 10],
        );
    }

    ctx.output.kv("items", &summary.total_items.to_string());
    ctx.output.kv("total", &summary.total_price.display());
    if let Some(label) = badge_label(summary.total_items, ctx.config.presentation.badge_cap) {
        ctx.output.kv("badge", &label);
    }

    Ok(())
}

fn apply(action: &CartAction, catalog: &Catalog, scope: &Scope, ctx: &Context) -> Result<()> {
    let cart = use_cart(scope)?;

    match action {
        CartAction::Add(product_id, variant_id) => {
            let Some(product) = catalog.product(product_id) else {
                ctx.output.warn(&format!("Unknown product '{}'", product_id));
                return Ok(());
            };

            let mut card = ProductCard::new(product, ctx.config.presentation);
            if !card.select_variant(variant_id) {
                ctx.output
                    .warn(&format!("Unknown variant '{}' for {}", variant_id, product.name));
                return Ok(());
            }

            match card.add_to_cart(&cart) {
                outcome @ AddOutcome::Added { .. } => {
                    if let Some(message) = outcome.message() {
                        ctx.output.success(&message);
                    }
                }
                AddOutcome::SoldOut => {
                    ctx.output
                        .warn(&format!("{} ({}) is sold out", product.name, variant_id));
                }
                AddOutcome::NoVariant => {
                    ctx.output.warn(&format!("{} has no variants", product.name));
                }
            }
        }
        CartAction::Remove(product_id, variant_id) => {
            if remove_line(&cart, product_id, variant_id) {
                ctx.output
                    .list_item(&format!("Removed {}/{}", product_id, variant_id));
            } else {
                ctx.output
                    .warn(&format!("{}/{} is not in the cart", product_id, variant_id));
            }
        }
        CartAction::Clear => {
            cart.clear_cart();
            ctx.output.list_item("Cleared cart");
        }
    }

    Ok(())
}

/// Remove a line, reporting whether the cart held it.
fn remove_line(cart: &CartStore, product_id: &ProductId, variant_id: &VariantId) -> bool {
    let present = cart.state().get(product_id, variant_id).is_some();
    cart.remove_from_cart(product_id, variant_id);
    present
}
