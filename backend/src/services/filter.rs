//! Venue filter engine.
//!
//! A filter is four independent predicates combined with AND:
//!
//! - **text**: empty query, or a case-insensitive substring of the venue name
//!   or of its tags joined by a single space. The query is one substring and
//!   is never split into words.
//! - **area** / **cuisine**: empty selection, or exact case-sensitive equality.
//! - **price**: venue tier at most the selected maximum.
//!
//! Filtering preserves catalog order and has no hidden state, so the same
//! inputs always produce the same output.

use serde::{Deserialize, Serialize};

use crate::models::{PriceTier, Venue};

/// User-selected filter inputs. Empty strings act as wildcards.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueFilter {
    #[serde(default)]
    pub query: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub cuisine: String,
    #[serde(default)]
    pub max_price: PriceTier,
}

impl VenueFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_area(mut self, area: impl Into<String>) -> Self {
        self.area = area.into();
        self
    }

    pub fn with_cuisine(mut self, cuisine: impl Into<String>) -> Self {
        self.cuisine = cuisine.into();
        self
    }

    pub fn with_max_price(mut self, max_price: PriceTier) -> Self {
        self.max_price = max_price;
        self
    }

    /// True when every input is at its wildcard value.
    pub fn is_identity(&self) -> bool {
        self.query.is_empty()
            && self.area.is_empty()
            && self.cuisine.is_empty()
            && self.max_price == PriceTier::MAX
    }

    /// Check a single venue against all four predicates.
    pub fn matches(&self, venue: &Venue) -> bool {
        self.matches_lowered(venue, &self.query.to_lowercase())
    }

    /// `needle` is the query already lowercased, so a whole catalog pass
    /// lowercases it once.
    fn matches_lowered(&self, venue: &Venue, needle: &str) -> bool {
        self.matches_query(venue, needle)
            && self.matches_area(venue)
            && self.matches_cuisine(venue)
            && self.matches_price(venue)
    }

    fn matches_query(&self, venue: &Venue, needle: &str) -> bool {
        needle.is_empty()
            || venue.name.to_lowercase().contains(needle)
            || venue.tag_line().to_lowercase().contains(needle)
    }

    fn matches_area(&self, venue: &Venue) -> bool {
        self.area.is_empty() || venue.area == self.area
    }

    fn matches_cuisine(&self, venue: &Venue) -> bool {
        self.cuisine.is_empty() || venue.cuisine == self.cuisine
    }

    fn matches_price(&self, venue: &Venue) -> bool {
        venue.price <= self.max_price
    }
}

/// Return the venues matching `filter`, in their original order.
pub fn filter_venues<'a>(venues: &'a [Venue], filter: &VenueFilter) -> Vec<&'a Venue> {
    let needle = filter.query.to_lowercase();
    let matched: Vec<&Venue> = venues
        .iter()
        .filter(|venue| filter.matches_lowered(venue, &needle))
        .collect();

    log::debug!(
        "filter {:?} matched {} of {} venues",
        filter,
        matched.len(),
        venues.len()
    );
    matched
}
