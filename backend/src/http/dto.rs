//! Data Transfer Objects for the HTTP API.
//!
//! Card and option types are re-exported from the routes module since they
//! already derive Serialize/Deserialize.

use serde::{Deserialize, Serialize};

pub use crate::api::{BookingLink, FilterOptions, PostSummary, PriceOption, VenueCard};
use crate::models::PriceTier;
use crate::services::filter::VenueFilter;

use super::error::AppError;

/// Query parameters shared by the storefront page and the venue search API.
///
/// Missing parameters take their wildcard value; `max_price` defaults to the
/// top tier.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SearchQuery {
    /// Free-text query matched against names and tags
    #[serde(default)]
    pub q: Option<String>,
    /// Exact area, empty for all areas
    #[serde(default)]
    pub area: Option<String>,
    /// Exact cuisine, empty for all cuisines
    #[serde(default)]
    pub cuisine: Option<String>,
    /// Maximum price tier (1-3, inclusive). Kept as text so malformed values
    /// are reported through [`AppError`].
    #[serde(default)]
    pub max_price: Option<String>,
}

impl SearchQuery {
    /// Validate the parameters and turn them into filter inputs.
    pub fn into_filter(self) -> Result<VenueFilter, AppError> {
        let max_price = match self.max_price.as_deref().map(str::trim) {
            None | Some("") => PriceTier::default(),
            Some(raw) => parse_price_tier(raw)?,
        };

        Ok(VenueFilter {
            query: self.q.unwrap_or_default(),
            area: self.area.unwrap_or_default(),
            cuisine: self.cuisine.unwrap_or_default(),
            max_price,
        })
    }
}

fn parse_price_tier(raw: &str) -> Result<PriceTier, AppError> {
    let value: i64 = raw.parse().map_err(|_| {
        AppError::BadRequest(format!(
            "max_price must be a whole number between {} and {}, got {:?}",
            PriceTier::MIN,
            PriceTier::MAX,
            raw
        ))
    })?;
    u8::try_from(value)
        .ok()
        .and_then(PriceTier::new)
        .ok_or_else(|| {
            AppError::BadRequest(format!(
                "price tier must be between {} and {}, got {}",
                PriceTier::MIN,
                PriceTier::MAX,
                value
            ))
        })
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Catalog status
    pub catalog: String,
}

/// Venue search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueListResponse {
    pub venues: Vec<VenueCard>,
    pub total: usize,
    /// Display form of the count, e.g. "1 result"
    pub label: String,
}

/// Post list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostListResponse {
    pub posts: Vec<PostSummary>,
    pub total: usize,
}
