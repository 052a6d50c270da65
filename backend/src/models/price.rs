//! Price tiers.
//!
//! A tier is an ordinal proxy for relative cost, shown to readers as
//! repeated currency symbols (`$`, `$$`, `$$$`).

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::services::pricing::price_to_symbols;

/// Ordinal price tier in the range `1..=3`.
#[derive(
    Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct PriceTier(u8);

impl PriceTier {
    pub const MIN: PriceTier = PriceTier(1);
    pub const MAX: PriceTier = PriceTier(3);

    /// Build a tier, rejecting values outside `1..=3`.
    pub fn new(value: u8) -> Option<Self> {
        (Self::MIN.0..=Self::MAX.0)
            .contains(&value)
            .then_some(PriceTier(value))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Currency-symbol rendering of this tier.
    pub fn symbols(&self) -> String {
        price_to_symbols(self.0 as usize)
    }

    /// Every tier from cheapest to most expensive.
    pub fn all() -> impl Iterator<Item = PriceTier> {
        (Self::MIN.0..=Self::MAX.0).map(PriceTier)
    }
}

impl Default for PriceTier {
    /// The widest budget, so an untouched filter matches every venue.
    fn default() -> Self {
        Self::MAX
    }
}

impl TryFrom<u8> for PriceTier {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        PriceTier::new(value).ok_or_else(|| {
            format!(
                "price tier must be between {} and {}, got {}",
                Self::MIN.0,
                Self::MAX.0,
                value
            )
        })
    }
}

impl From<PriceTier> for u8 {
    fn from(tier: PriceTier) -> Self {
        tier.0
    }
}

impl fmt::Display for PriceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_valid_range() {
        assert_eq!(PriceTier::new(1).map(|t| t.value()), Some(1));
        assert_eq!(PriceTier::new(3).map(|t| t.value()), Some(3));
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(PriceTier::new(0).is_none());
        assert!(PriceTier::new(4).is_none());
    }

    #[test]
    fn test_default_is_max() {
        assert_eq!(PriceTier::default(), PriceTier::MAX);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(PriceTier::MIN.symbols(), "$");
        assert_eq!(PriceTier::MAX.symbols(), "$$$");
    }

    #[test]
    fn test_serde_rejects_invalid_tier() {
        let ok: PriceTier = serde_json::from_str("2").unwrap();
        assert_eq!(ok.value(), 2);
        assert!(serde_json::from_str::<PriceTier>("7").is_err());
    }

    #[test]
    fn test_all_is_ordered() {
        let tiers: Vec<u8> = PriceTier::all().map(|t| t.value()).collect();
        assert_eq!(tiers, vec![1, 2, 3]);
    }
}
