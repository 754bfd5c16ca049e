//! Commerce error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// Cart mutations themselves never fail; these cover the composition root
/// and catalog loading.
#[derive(Error, Debug)]
pub enum CommerceError {
    /// The cart store was accessed from a scope no `CartProvider` covers.
    #[error("Cart store not initialized: use_cart must be called within a CartProvider scope")]
    StoreNotInitialized,

    /// Product not found in the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Variant not found on a product.
    #[error("Variant not found: {product_id}/{variant_id}")]
    VariantNotFound {
        product_id: String,
        variant_id: String,
    },

    /// Catalog data violates a catalog rule.
    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    /// Catalog file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file could not be parsed.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for CommerceError {
    fn from(e: serde_json::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}

impl From<toml::de::Error> for CommerceError {
    fn from(e: toml::de::Error) -> Self {
        CommerceError::SerializationError(e.to_string())
    }
}
