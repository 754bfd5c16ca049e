//! Line item types.

use crate::ids::{ProductId, VariantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Identity of a line item: the (product, variant) pair.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItemKey {
    pub product_id: ProductId,
    pub variant_id: VariantId,
}

impl LineItemKey {
    pub fn new(product_id: impl Into<ProductId>, variant_id: impl Into<VariantId>) -> Self {
        Self {
            product_id: product_id.into(),
            variant_id: variant_id.into(),
        }
    }
}

/// A selection to add to the cart: a line item without a quantity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewLineItem {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    pub product_name: String,
    pub variant_name: String,
    /// Unit price. Not validated; the store accepts any amount.
    pub price: Money,
    /// Image URI.
    pub image: String,
}

impl NewLineItem {
    pub fn new(
        product_id: impl Into<ProductId>,
        variant_id: impl Into<VariantId>,
        product_name: impl Into<String>,
        variant_name: impl Into<String>,
        price: Money,
        image: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            variant_id: variant_id.into(),
            product_name: product_name.into(),
            variant_name: variant_name.into(),
            price,
            image: image.into(),
        }
    }

    pub fn matches(&self, product_id: &ProductId, variant_id: &VariantId) -> bool {
        &self.product_id == product_id && &self.variant_id == variant_id
    }
}

/// One distinct (product, variant) selection in the cart.
///
/// Quantity is always at least 1; an item that would drop to zero is
/// removed from the cart instead.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    pub product_id: ProductId,
    pub variant_id: VariantId,
    /// Product name (denormalized for display).
    pub product_name: String,
    /// Variant name (e.g. "Pearl White").
    pub variant_name: String,
    /// Unit price captured when the item was first added.
    pub price: Money,
    pub quantity: u32,
    pub image: String,
}

impl LineItem {
    pub fn key(&self) -> LineItemKey {
        LineItemKey {
            product_id: self.product_id.clone(),
            variant_id: self.variant_id.clone(),
        }
    }

    /// Exact match on both halves of the key.
    pub fn matches(&self, product_id: &ProductId, variant_id: &VariantId) -> bool {
        &self.product_id == product_id && &self.variant_id == variant_id
    }

    /// Copy of this item with one more unit. Descriptive fields are kept.
    pub fn incremented(&self) -> Self {
        Self {
            quantity: self.quantity.saturating_add(1),
            ..self.clone()
        }
    }

    /// Unit price times quantity.
    pub fn total_price(&self) -> Money {
        self.price.saturating_mul(u64::from(self.quantity))
    }
}

impl From<NewLineItem> for LineItem {
    fn from(entry: NewLineItem) -> Self {
        Self {
            product_id: entry.product_id,
            variant_id: entry.variant_id,
            product_name: entry.product_name,
            variant_name: entry.variant_name,
            price: entry.price,
            quantity: 1,
            image: entry.image,
        }
    }
}
