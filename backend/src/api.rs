//! Public API surface for the storefront.
//!
//! This file consolidates the catalog entities and the view/DTO types served
//! over HTTP. All types derive Serialize/Deserialize for JSON serialization.

pub use crate::models::{
    AffiliateLink, AffiliateNetwork, AffiliateNetworks, Brand, Catalog, Post, PostSlug,
    PriceTier, Venue, VenueId,
};
pub use crate::routes::landing::FilterOptions;
pub use crate::routes::landing::LandingPage;
pub use crate::routes::landing::PriceOption;
pub use crate::routes::posts::PostSummary;
pub use crate::routes::venues::BookingLink;
pub use crate::routes::venues::VenueCard;
pub use crate::services::filter::VenueFilter;
