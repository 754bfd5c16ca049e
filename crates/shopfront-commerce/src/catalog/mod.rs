//! Product catalog module.
//!
//! Read-only products and variants that the storefront renders and that
//! line items are built from.

#[allow(clippy::module_inception)]
mod catalog;
mod product;

pub use catalog::Catalog;
pub use product::{Product, ProductVariant, StockStatus, DEFAULT_LOW_STOCK_THRESHOLD};
