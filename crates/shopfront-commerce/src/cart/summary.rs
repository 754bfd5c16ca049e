//! Cart totals for display.

use crate::cart::{CartState, LineItem};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Items and totals read from a single cart snapshot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartSummary {
    /// Line items in insertion order.
    pub items: Vec<LineSummary>,
    /// Sum of quantities.
    pub total_items: u64,
    /// Sum of line totals.
    pub total_price: Money,
}

impl CartSummary {
    pub fn from_state(state: &CartState, currency: Currency) -> Self {
        Self {
            items: state.items().iter().map(LineSummary::from).collect(),
            total_items: state.total_items(),
            total_price: state.total_price(currency),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct line items.
    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }
}

/// One line of a [`CartSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineSummary {
    #[serde(flatten)]
    pub item: LineItem,
    /// Unit price times quantity.
    pub line_total: Money,
}

impl From<&LineItem> for LineSummary {
    fn from(item: &LineItem) -> Self {
        Self {
            line_total: item.total_price(),
            item: item.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::NewLineItem;

    fn state() -> CartState {
        let lamp = NewLineItem::new(
            "3",
            "white",
            "Minimalist Desk Lamp",
            "Arctic White",
            Money::new(8999, Currency::USD),
            "/lamp.jpg",
        );
        CartState::new()
            .with_added(lamp.clone())
            .with_added(lamp)
    }

    #[test]
    fn test_summary_totals() {
        let summary = CartSummary::from_state(&state(), Currency::USD);
        assert_eq!(summary.total_items, 2);
        assert_eq!(summary.total_price.display(), "$179.98");
        assert_eq!(summary.unique_item_count(), 1);
        assert_eq!(summary.items[0].line_total.amount_cents, 17998);
    }

    #[test]
    fn test_summary_json_is_flat() {
        let summary = CartSummary::from_state(&state(), Currency::USD);
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["items"][0]["product_id"], "3");
        assert_eq!(json["items"][0]["quantity"], 2);
        assert_eq!(json["total_items"], 2);
    }

    #[test]
    fn test_empty_summary() {
        let summary = CartSummary::from_state(&CartState::new(), Currency::GBP);
        assert!(summary.is_empty());
        assert_eq!(summary.total_price, Money::zero(Currency::GBP));
    }
}
