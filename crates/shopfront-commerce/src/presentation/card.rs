//! Product card state and the add-to-cart action.

use crate::cart::{CartStore, NewLineItem};
use crate::catalog::{Product, ProductVariant, StockStatus};
use crate::ids::VariantId;
use crate::presentation::PresentationConfig;

/// What happened when a card's add-to-cart button was pressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// One unit was added.
    Added {
        product_name: String,
        variant_name: String,
    },
    /// The selected variant has no stock; the cart was not touched.
    SoldOut,
    /// The product has no variants to add.
    NoVariant,
}

impl AddOutcome {
    pub fn is_added(&self) -> bool {
        matches!(self, AddOutcome::Added { .. })
    }

    /// Confirmation text for a notification.
    pub fn message(&self) -> Option<String> {
        match self {
            AddOutcome::Added {
                product_name,
                variant_name,
            } => Some(format!(
                "{} ({}) has been added to your cart.",
                product_name, variant_name
            )),
            AddOutcome::SoldOut | AddOutcome::NoVariant => None,
        }
    }
}

/// Per-card UI state: a product and the variant currently selected.
#[derive(Debug, Clone)]
pub struct ProductCard<'a> {
    product: &'a Product,
    selected: usize,
    config: PresentationConfig,
}

impl<'a> ProductCard<'a> {
    /// A card with the product's first variant selected.
    pub fn new(product: &'a Product, config: PresentationConfig) -> Self {
        Self {
            product,
            selected: 0,
            config,
        }
    }

    pub fn product(&self) -> &'a Product {
        self.product
    }

    /// The selected variant, or `None` for a product without variants.
    pub fn selected_variant(&self) -> Option<&'a ProductVariant> {
        self.product.variants.get(self.selected)
    }

    /// Select a variant by ID. Unknown IDs leave the selection unchanged.
    pub fn select_variant(&mut self, variant_id: &VariantId) -> bool {
        match self.product.variants.iter().position(|v| &v.id == variant_id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Only products with more than one variant show a picker.
    pub fn has_variant_picker(&self) -> bool {
        self.product.variants.len() > 1
    }

    /// Stock status of the selected variant.
    pub fn stock_status(&self) -> Option<StockStatus> {
        self.selected_variant()
            .map(|v| v.stock_status(self.config.low_stock_threshold))
    }

    /// Whether the add-to-cart button is enabled.
    pub fn can_add(&self) -> bool {
        self.stock_status().is_some_and(|s| s.is_available())
    }

    /// The cart entry for the selected variant. The product image is used
    /// for the line item.
    pub fn cart_entry(&self) -> Option<NewLineItem> {
        let variant = self.selected_variant()?;
        Some(NewLineItem {
            product_id: self.product.id.clone(),
            variant_id: variant.id.clone(),
            product_name: self.product.name.clone(),
            variant_name: variant.name.clone(),
            price: variant.price,
            image: self.product.image.clone(),
        })
    }

    /// Add the selected variant to `cart` if it is in stock.
    pub fn add_to_cart(&self, cart: &CartStore) -> AddOutcome {
        let Some(entry) = self.cart_entry() else {
            return AddOutcome::NoVariant;
        };
        if !self.can_add() {
            tracing::debug!(
                product_id = %entry.product_id,
                variant_id = %entry.variant_id,
                "variant sold out, not adding"
            );
            return AddOutcome::SoldOut;
        }

        let outcome = AddOutcome::Added {
            product_name: entry.product_name.clone(),
            variant_name: entry.variant_name.clone(),
        };
        cart.add_to_cart(entry);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Currency, Money};

    fn headphones() -> Product {
        let price = Money::new(29999, Currency::USD);
        Product::new("1", "Premium Wireless Headphones", "/headphones.jpg")
            .with_variant(ProductVariant::new("black", "Midnight Black", price, 12))
            .with_variant(ProductVariant::new("white", "Pearl White", price, 3))
            .with_variant(ProductVariant::new(
                "blue",
                "Ocean Blue",
                Money::new(31999, Currency::USD),
                0,
            ))
    }

    #[test]
    fn test_first_variant_selected() {
        let product = headphones();
        let card = ProductCard::new(&product, PresentationConfig::default());
        assert_eq!(card.selected_variant().unwrap().id, VariantId::new("black"));
        assert_eq!(card.stock_status(), Some(StockStatus::InStock));
        assert!(card.has_variant_picker());
    }

    #[test]
    fn test_select_variant() {
        let product = headphones();
        let mut card = ProductCard::new(&product, PresentationConfig::default());
        assert!(card.select_variant(&VariantId::new("white")));
        assert_eq!(card.stock_status(), Some(StockStatus::LowStock(3)));

        assert!(!card.select_variant(&VariantId::new("green")));
        assert_eq!(card.selected_variant().unwrap().id, VariantId::new("white"));
    }

    #[test]
    fn test_add_uses_product_image_and_variant_price() {
        let product = headphones();
        let cart = CartStore::new(Currency::USD);
        let card = ProductCard::new(&product, PresentationConfig::default());

        let outcome = card.add_to_cart(&cart);
        assert!(outcome.is_added());
        assert_eq!(
            outcome.message().unwrap(),
            "Premium Wireless Headphones (Midnight Black) has been added to your cart."
        );

        let items = cart.items();
        assert_eq!(items[0].image, "/headphones.jpg");
        assert_eq!(items[0].variant_name, "Midnight Black");
        assert_eq!(items[0].price.amount_cents, 29999);
    }

    #[test]
    fn test_sold_out_variant_is_not_added() {
        let product = headphones();
        let cart = CartStore::new(Currency::USD);
        let mut card = ProductCard::new(&product, PresentationConfig::default());
        card.select_variant(&VariantId::new("blue"));

        assert!(!card.can_add());
        assert_eq!(card.add_to_cart(&cart), AddOutcome::SoldOut);
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_product_without_variants() {
        let product = Product::new("4", "Coming Soon", "/soon.jpg");
        let cart = CartStore::new(Currency::USD);
        let card = ProductCard::new(&product, PresentationConfig::default());

        assert!(card.selected_variant().is_none());
        assert!(!card.has_variant_picker());
        assert_eq!(card.add_to_cart(&cart), AddOutcome::NoVariant);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_custom_low_stock_threshold() {
        let product = headphones();
        let config = PresentationConfig {
            low_stock_threshold: 12,
            ..PresentationConfig::default()
        };
        let card = ProductCard::new(&product, config);
        assert_eq!(card.stock_status(), Some(StockStatus::LowStock(12)));
    }
}
