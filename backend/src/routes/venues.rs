use serde::{Deserialize, Serialize};

use crate::models::{AffiliateNetworks, Venue, VenueId};
use crate::services::affiliate::with_affiliate;

/// Outbound booking button with tracking parameters applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingLink {
    pub label: String,
    pub href: String,
    pub network: String,
}

/// Everything a venue card displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VenueCard {
    pub id: VenueId,
    pub name: String,
    pub area: String,
    pub cuisine: String,
    pub price: u8,
    pub price_label: String,
    pub rating: f64,
    pub blurb: String,
    pub image: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking: Option<BookingLink>,
}

impl VenueCard {
    /// Build a card, composing the affiliate URL when the venue has one.
    ///
    /// Venues without an affiliate entry, or whose entry has an empty URL, get
    /// no booking link.
    pub fn from_venue(venue: &Venue, networks: &AffiliateNetworks) -> Self {
        let booking = venue
            .affiliate
            .as_ref()
            .filter(|link| !link.url.is_empty())
            .map(|link| BookingLink {
                label: link.label.clone(),
                href: with_affiliate(&link.url, &link.network, networks),
                network: link.network.clone(),
            });

        Self {
            id: venue.id.clone(),
            name: venue.name.clone(),
            area: venue.area.clone(),
            cuisine: venue.cuisine.clone(),
            price: venue.price.value(),
            price_label: venue.price.symbols(),
            rating: venue.rating,
            blurb: venue.blurb.clone(),
            image: venue.image.clone(),
            tags: venue.tags.clone(),
            booking,
        }
    }
}

pub const SEARCH_VENUES: &str = "search_venues";
pub const GET_VENUE: &str = "get_venue";
