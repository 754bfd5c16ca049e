//! The cart store: shared owner of the cart's line items.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::cart::{CartState, CartSummary, LineItem, NewLineItem};
use crate::ids::{ProductId, VariantId};
use crate::money::{Currency, Money};

/// Handle to a cart's contents.
///
/// Clones share the same underlying cart, so every component holding a
/// handle sees every other component's changes. Reads return immutable
/// snapshots; the only writes are [`add_to_cart`](Self::add_to_cart),
/// [`remove_from_cart`](Self::remove_from_cart) and
/// [`clear_cart`](Self::clear_cart).
///
/// The handle is single-threaded (`!Send`), matching a UI event loop.
#[derive(Clone)]
pub struct CartStore {
    state: Rc<RefCell<CartState>>,
    currency: Currency,
}

impl CartStore {
    /// Create an empty cart whose totals are reported in `currency`.
    pub fn new(currency: Currency) -> Self {
        Self {
            state: Rc::new(RefCell::new(CartState::new())),
            currency,
        }
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Add one unit of a (product, variant) selection.
    ///
    /// Re-adding a key already in the cart only bumps its quantity; the
    /// name, price and image from the first add are kept.
    pub fn add_to_cart(&self, entry: NewLineItem) {
        if entry.price.currency != self.currency {
            tracing::warn!(
                product_id = %entry.product_id,
                variant_id = %entry.variant_id,
                item_currency = %entry.price.currency,
                cart_currency = %self.currency,
                "line item priced in a different currency than the cart"
            );
        }
        tracing::debug!(
            product_id = %entry.product_id,
            variant_id = %entry.variant_id,
            "add to cart"
        );

        let next = self.state.borrow().with_added(entry);
        *self.state.borrow_mut() = next;
    }

    /// Remove the line item keyed by both IDs. Missing keys are ignored.
    pub fn remove_from_cart(&self, product_id: &ProductId, variant_id: &VariantId) {
        let next = self.state.borrow().without(product_id, variant_id);
        let removed = next.len() != self.state.borrow().len();
        tracing::debug!(%product_id, %variant_id, removed, "remove from cart");
        *self.state.borrow_mut() = next;
    }

    /// Empty the cart.
    pub fn clear_cart(&self) {
        tracing::debug!(items = self.state.borrow().len(), "clear cart");
        *self.state.borrow_mut() = CartState::new();
    }

    /// Sum of quantities over all line items.
    pub fn total_items(&self) -> u64 {
        self.state.borrow().total_items()
    }

    /// Sum of unit price times quantity over all line items, in the cart's
    /// currency.
    ///
    /// Lines priced in another currency are not converted: their minor units
    /// are added as-is.
    pub fn total_price(&self) -> Money {
        self.state.borrow().total_price(self.currency)
    }

    /// Snapshot of the line items in insertion order.
    pub fn items(&self) -> Rc<Vec<LineItem>> {
        self.state.borrow().items()
    }

    /// Snapshot of the whole cart state.
    pub fn state(&self) -> CartState {
        self.state.borrow().clone()
    }

    /// Items and totals taken from one consistent snapshot.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_state(&self.state(), self.currency)
    }

    /// Whether two handles refer to the same cart.
    pub fn same_cart(&self, other: &CartStore) -> bool {
        Rc::ptr_eq(&self.state, &other.state)
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new(Currency::default())
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("CartStore")
            .field("currency", &self.currency)
            .field("line_items", &state.len())
            .field("total_items", &state.total_items())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(product: &str, variant: &str, cents: i64) -> NewLineItem {
        NewLineItem::new(
            product,
            variant,
            format!("Product {}", product),
            format!("Variant {}", variant),
            Money::new(cents, Currency::USD),
            format!("/{}.jpg", product),
        )
    }

    #[test]
    fn test_store_starts_empty() {
        let cart = CartStore::new(Currency::USD);
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_price(), Money::zero(Currency::USD));
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_clones_share_state() {
        let header = CartStore::new(Currency::USD);
        let card = header.clone();

        card.add_to_cart(entry("1", "black", 29999));
        assert_eq!(header.total_items(), 1);
        assert!(header.same_cart(&card));
        assert!(!header.same_cart(&CartStore::new(Currency::USD)));
    }

    #[test]
    fn test_repeat_add_keeps_first_fields() {
        let cart = CartStore::new(Currency::USD);
        cart.add_to_cart(entry("1", "v1", 1000));
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price().amount_cents, 1000);

        let mut changed = entry("1", "v1", 5000);
        changed.product_name = "Renamed".to_string();
        changed.image = "/other.jpg".to_string();
        cart.add_to_cart(changed);

        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().amount_cents, 2000);
        let items = cart.items();
        assert_eq!(items[0].product_name, "Product 1");
        assert_eq!(items[0].image, "/1.jpg");
    }

    #[test]
    fn test_remove_whole_line() {
        let cart = CartStore::new(Currency::USD);
        cart.add_to_cart(entry("1", "v1", 1000));
        cart.add_to_cart(entry("2", "v2", 500));
        assert_eq!(cart.total_items(), 2);
        assert_eq!(cart.total_price().amount_cents, 1500);

        cart.remove_from_cart(&ProductId::new("1"), &VariantId::new("v1"));
        assert_eq!(cart.total_items(), 1);
        assert_eq!(cart.total_price().amount_cents, 500);
    }

    #[test]
    fn test_remove_on_empty_cart_is_noop() {
        let cart = CartStore::new(Currency::USD);
        cart.remove_from_cart(&ProductId::new("3"), &VariantId::new("v3"));
        assert_eq!(cart.total_items(), 0);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_snapshot_is_not_affected_by_later_writes() {
        let cart = CartStore::new(Currency::USD);
        cart.add_to_cart(entry("1", "v1", 1000));
        let snapshot = cart.items();

        cart.add_to_cart(entry("1", "v1", 1000));
        cart.clear_cart();

        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].quantity, 1);
        assert!(cart.items().is_empty());
    }

    #[test]
    fn test_clear_cart() {
        let cart = CartStore::new(Currency::USD);
        cart.add_to_cart(entry("1", "v1", 1000));
        cart.add_to_cart(entry("2", "v2", 500));
        cart.clear_cart();
        assert_eq!(cart.total_items(), 0);
        assert!(cart.total_price().is_zero());
    }

    #[test]
    fn test_foreign_currency_item_is_still_added() {
        let cart = CartStore::new(Currency::USD);
        let mut item = entry("1", "v1", 1000);
        item.price.currency = Currency::EUR;
        cart.add_to_cart(item);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn test_foreign_currency_minor_units_summed_unconverted() {
        let cart = CartStore::new(Currency::USD);
        cart.add_to_cart(entry("1", "v1", 1000));
        let mut yen = entry("2", "v2", 100);
        yen.price.currency = Currency::JPY;
        cart.add_to_cart(yen);

        let total = cart.total_price();
        assert_eq!(total.currency, Currency::USD);
        assert_eq!(total.amount_cents, 1100);
    }

    #[test]
    fn test_debug_output() {
        let cart = CartStore::new(Currency::USD);
        cart.add_to_cart(entry("1", "v1", 1000));
        let debug = format!("{:?}", cart);
        assert!(debug.contains("total_items: 1"));
    }
}
