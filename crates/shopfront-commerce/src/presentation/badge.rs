//! Cart badge label.

/// Largest count the badge shows verbatim.
pub const DEFAULT_BADGE_CAP: u64 = 99;

/// Text for the cart icon's count badge.
///
/// `None` hides the badge (empty cart); counts above `cap` collapse to
/// `"{cap}+"`.
pub fn badge_label(total_items: u64, cap: u64) -> Option<String> {
    match total_items {
        0 => None,
        n if n > cap => Some(format!("{}+", cap)),
        n => Some(n.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_badge_label() {
        assert_eq!(badge_label(0, DEFAULT_BADGE_CAP), None);
        assert_eq!(badge_label(1, DEFAULT_BADGE_CAP).as_deref(), Some("1"));
        assert_eq!(badge_label(99, DEFAULT_BADGE_CAP).as_deref(), Some("99"));
        assert_eq!(badge_label(100, DEFAULT_BADGE_CAP).as_deref(), Some("99+"));
        assert_eq!(badge_label(12, 9).as_deref(), Some("9+"));
    }
}
