//! Cart state and catalog types for the Shopfront storefront.
//!
//! - **Cart**: the shared cart store, its line items and derived totals
//! - **Catalog**: read-only products and variants, loadable from TOML/JSON
//! - **Context**: component scopes and the `CartProvider` composition root
//! - **Presentation**: product card selection, stock gating, cart badge
//!
//! # Example
//!
//! ```rust
//! use shopfront_commerce::prelude::*;
//!
//! let app = CartProvider::new(Currency::USD).mount(&Scope::root());
//! let cart = use_cart(&app)?;
//!
//! cart.add_to_cart(NewLineItem::new(
//!     "1",
//!     "black",
//!     "Premium Wireless Headphones",
//!     "Midnight Black",
//!     Money::from_decimal(299.99, Currency::USD),
//!     "/headphones.jpg",
//! ));
//!
//! assert_eq!(cart.total_items(), 1);
//! assert_eq!(cart.total_price().display(), "$299.99");
//! # Ok::<(), CommerceError>(())
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod cart;
pub mod catalog;
pub mod context;
pub mod presentation;

pub use error::CommerceError;
pub use ids::{ProductId, VariantId};
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::CommerceError;
    pub use crate::ids::{ProductId, VariantId};
    pub use crate::money::{Currency, Money};

    // Cart
    pub use crate::cart::{
        CartState, CartStore, CartSummary, LineItem, LineItemKey, LineSummary, NewLineItem,
    };

    // Catalog
    pub use crate::catalog::{Catalog, Product, ProductVariant, StockStatus};

    // Composition root
    pub use crate::context::{use_cart, CartProvider, Scope};

    // Presentation
    pub use crate::presentation::{badge_label, AddOutcome, PresentationConfig, ProductCard};
}
