//! Price tier formatting.

/// Symbol repeated once per price tier.
pub const CURRENCY_SYMBOL: char = '$';

/// Render a price tier as `n` currency symbols.
///
/// No upper bound is enforced; callers constrain `n` to the tiers they
/// actually use.
pub fn price_to_symbols(n: usize) -> String {
    std::iter::repeat(CURRENCY_SYMBOL).take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_tier() {
        assert_eq!(price_to_symbols(1), "$");
    }

    #[test]
    fn test_two_tiers() {
        assert_eq!(price_to_symbols(2), "$$");
    }

    #[test]
    fn test_no_upper_bound() {
        assert_eq!(price_to_symbols(5), "$$$$$");
    }

    #[test]
    fn test_zero_is_empty() {
        assert_eq!(price_to_symbols(0), "");
    }
}
