//! Presentation-side helpers.
//!
//! The non-rendering logic of the storefront's components: which variant a
//! product card has selected, whether it may be added, and what the cart
//! badge shows.

mod badge;
mod card;

pub use badge::{badge_label, DEFAULT_BADGE_CAP};
pub use card::{AddOutcome, ProductCard};

use crate::catalog::DEFAULT_LOW_STOCK_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Display thresholds used by cards and the cart badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresentationConfig {
    /// Stock at or below this count is flagged as low.
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
    /// Badge counts above this are shown as "{cap}+".
    #[serde(default = "default_badge_cap")]
    pub badge_cap: u64,
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

fn default_badge_cap() -> u64 {
    DEFAULT_BADGE_CAP
}

impl Default for PresentationConfig {
    fn default() -> Self {
        Self {
            low_stock_threshold: default_low_stock_threshold(),
            badge_cap: default_badge_cap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: PresentationConfig = toml::from_str("badge_cap = 9").unwrap();
        assert_eq!(config.badge_cap, 9);
        assert_eq!(config.low_stock_threshold, 5);
    }
}
