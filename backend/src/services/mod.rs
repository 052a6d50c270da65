//! Pure storefront logic.
//!
//! Filtering, affiliate link composition, price formatting and page
//! rendering. None of these touch the repository; callers hand them catalog
//! data and get plain values back.

pub mod affiliate;

pub mod filter;

pub mod pricing;

pub mod render;

#[cfg(test)]
#[path = "filter_tests.rs"]
mod filter_tests;

pub use affiliate::with_affiliate;
pub use filter::{filter_venues, VenueFilter};
pub use pricing::price_to_symbols;
pub use render::render_landing_page;
