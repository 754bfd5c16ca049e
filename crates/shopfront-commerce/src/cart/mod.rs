//! Shopping cart module.
//!
//! Contains the line item types, the immutable cart state and the shared
//! store handle the storefront's components call into.

mod line_item;
mod state;
mod store;
mod summary;

pub use line_item::{LineItem, LineItemKey, NewLineItem};
pub use state::CartState;
pub use store::CartStore;
pub use summary::{CartSummary, LineSummary};
