//! Product and variant types.

use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Variants with stock at or below this count are shown as running low.
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Image URI, also copied onto line items.
    pub image: String,
    /// Optional marketing description.
    pub description: Option<String>,
    /// Purchasable variants, in display order.
    pub variants: Vec<ProductVariant>,
}

impl Product {
    /// Create a product with no variants.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image: image.into(),
            description: None,
            variants: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Append a variant.
    pub fn with_variant(mut self, variant: ProductVariant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Look up a variant by ID.
    pub fn variant(&self, variant_id: &VariantId) -> Option<&ProductVariant> {
        self.variants.iter().find(|v| &v.id == variant_id)
    }

    /// The variant a card selects initially.
    pub fn default_variant(&self) -> Option<&ProductVariant> {
        self.variants.first()
    }

    /// Check if any variant can be added to a cart.
    pub fn is_available(&self) -> bool {
        self.variants.iter().any(ProductVariant::is_in_stock)
    }
}

/// A purchasable variant of a product (e.g. a colour).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductVariant {
    /// Variant identifier, unique within its product.
    pub id: VariantId,
    /// Display name (e.g. "Midnight Black").
    pub name: String,
    /// Unit price.
    pub price: Money,
    /// Units in stock.
    pub stock: u32,
}

impl ProductVariant {
    pub fn new(
        id: impl Into<VariantId>,
        name: impl Into<String>,
        price: Money,
        stock: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            stock,
        }
    }

    /// Check if this variant is in stock.
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Classify the stock level against a low-stock threshold.
    pub fn stock_status(&self, low_stock_threshold: u32) -> StockStatus {
        match self.stock {
            0 => StockStatus::OutOfStock,
            n if n <= low_stock_threshold => StockStatus::LowStock(n),
            _ => StockStatus::InStock,
        }
    }
}

/// Stock level as the storefront presents it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StockStatus {
    /// Sold out; cannot be added to a cart.
    OutOfStock,
    /// Only this many left.
    LowStock(u32),
    InStock,
}

impl StockStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StockStatus::OutOfStock => "sold out",
            StockStatus::LowStock(_) => "low stock",
            StockStatus::InStock => "in stock",
        }
    }

    pub fn is_available(&self) -> bool {
        !matches!(self, StockStatus::OutOfStock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    fn headphones() -> Product {
        Product::new("1", "Premium Wireless Headphones", "/headphones.jpg")
            .with_variant(ProductVariant::new(
                "black",
                "Midnight Black",
                Money::new(29999, Currency::USD),
                12,
            ))
            .with_variant(ProductVariant::new(
                "blue",
                "Ocean Blue",
                Money::new(31999, Currency::USD),
                0,
            ))
    }

    #[test]
    fn test_variant_lookup() {
        let product = headphones();
        assert_eq!(
            product.variant(&VariantId::new("blue")).map(|v| v.name.as_str()),
            Some("Ocean Blue")
        );
        assert!(product.variant(&VariantId::new("red")).is_none());
        assert_eq!(product.default_variant().unwrap().id, VariantId::new("black"));
    }

    #[test]
    fn test_stock_status() {
        let price = Money::new(100, Currency::USD);
        let threshold = DEFAULT_LOW_STOCK_THRESHOLD;
        assert_eq!(
            ProductVariant::new("a", "A", price, 0).stock_status(threshold),
            StockStatus::OutOfStock
        );
        assert_eq!(
            ProductVariant::new("a", "A", price, 3).stock_status(threshold),
            StockStatus::LowStock(3)
        );
        assert_eq!(
            ProductVariant::new("a", "A", price, 5).stock_status(threshold),
            StockStatus::LowStock(5)
        );
        assert_eq!(
            ProductVariant::new("a", "A", price, 6).stock_status(threshold),
            StockStatus::InStock
        );
    }

    #[test]
    fn test_product_availability() {
        assert!(headphones().is_available());
        assert!(!Product::new("2", "Empty", "").is_available());
    }
}
