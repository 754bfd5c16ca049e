//! Immutable cart contents.
//!
//! Every mutation builds a new item list and leaves the previous one intact,
//! so snapshots handed out earlier never change underneath their holders.

use std::rc::Rc;

use crate::cart::{LineItem, NewLineItem};
use crate::ids::{ProductId, VariantId};
use crate::money::{Currency, Money};

/// The ordered line items of a cart at one point in time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CartState {
    items: Rc<Vec<LineItem>>,
}

impl CartState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared, read-only view of the items in insertion order.
    pub fn items(&self) -> Rc<Vec<LineItem>> {
        Rc::clone(&self.items)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Find a line item by key.
    pub fn get(&self, product_id: &ProductId, variant_id: &VariantId) -> Option<&LineItem> {
        self.items.iter().find(|i| i.matches(product_id, variant_id))
    }

    /// State after adding one unit of `entry`.
    ///
    /// An existing key is incremented in place and keeps its original
    /// descriptive fields; a new key is appended with quantity 1.
    pub fn with_added(&self, entry: NewLineItem) -> Self {
        let items: Vec<LineItem> = if self.get(&entry.product_id, &entry.variant_id).is_some() {
            self.items
                .iter()
                .map(|item| {
                    if item.matches(&entry.product_id, &entry.variant_id) {
                        item.incremented()
                    } else {
                        item.clone()
                    }
                })
                .collect()
        } else {
            let mut items = Vec::with_capacity(self.items.len() + 1);
            items.extend(self.items.iter().cloned());
            items.push(LineItem::from(entry));
            items
        };
        Self {
            items: Rc::new(items),
        }
    }

    /// State without the item keyed by (`product_id`, `variant_id`).
    ///
    /// Returns a state sharing the same list when nothing matches.
    pub fn without(&self, product_id: &ProductId, variant_id: &VariantId) -> Self {
        if self.get(product_id, variant_id).is_none() {
            return self.clone();
        }
        let items: Vec<LineItem> = self
            .items
            .iter()
            .filter(|i| !i.matches(product_id, variant_id))
            .cloned()
            .collect();
        Self {
            items: Rc::new(items),
        }
    }

    /// Sum of quantities.
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|i| u64::from(i.quantity)).sum()
    }

    /// Sum of unit price times quantity, labelled `currency`. Item currencies
    /// are not converted.
    pub fn total_price(&self, currency: Currency) -> Money {
        self.items
            .iter()
            .fold(Money::zero(currency), |acc, item| {
                acc.saturating_add(&item.total_price())
            })
    }
}
