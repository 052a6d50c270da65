use serde::{Deserialize, Serialize};

use super::posts::PostSummary;
use super::venues::VenueCard;
use crate::models::{Brand, Catalog, PriceTier};
use crate::services::filter::{filter_venues, VenueFilter};

/// One stop on the budget slider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceOption {
    pub tier: u8,
    pub label: String,
}

/// Choices offered by the area, cuisine and budget controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    pub areas: Vec<String>,
    pub cuisines: Vec<String>,
    pub price_tiers: Vec<PriceOption>,
}

impl FilterOptions {
    pub fn from_catalog(catalog: &Catalog) -> Self {
        Self {
            areas: catalog.areas.clone(),
            cuisines: catalog.cuisines.clone(),
            price_tiers: PriceTier::all()
                .map(|tier| PriceOption {
                    tier: tier.value(),
                    label: tier.symbols(),
                })
                .collect(),
        }
    }
}

/// View model of the storefront page for one filter state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LandingPage {
    pub brand: Brand,
    pub filter: VenueFilter,
    pub options: FilterOptions,
    pub venues: Vec<VenueCard>,
    pub result_count: usize,
    pub result_label: String,
    pub posts: Vec<PostSummary>,
    /// Copyright year shown in the footer
    pub year: i32,
}

impl LandingPage {
    /// Run the filter engine over the catalog and assemble the page.
    pub fn build(catalog: &Catalog, filter: VenueFilter, year: i32) -> Self {
        let venues: Vec<VenueCard> = filter_venues(&catalog.venues, &filter)
            .into_iter()
            .map(|venue| VenueCard::from_venue(venue, &catalog.affiliates))
            .collect();
        let result_count = venues.len();

        Self {
            brand: catalog.brand.clone(),
            filter,
            options: FilterOptions::from_catalog(catalog),
            venues,
            result_count,
            result_label: result_label(result_count),
            posts: catalog.posts.iter().map(PostSummary::from).collect(),
            year,
        }
    }
}

/// "1 result", otherwise "N results" (including "0 results").
pub fn result_label(count: usize) -> String {
    if count == 1 {
        "1 result".to_string()
    } else {
        format!("{} results", count)
    }
}

pub const RENDER_LANDING: &str = "render_landing";
pub const LIST_FILTERS: &str = "list_filters";
