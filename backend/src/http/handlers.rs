//! HTTP handlers for the storefront and its JSON API.
//!
//! Each handler parses the request, delegates to the service layer and
//! serializes the result. Filtering is recomputed from scratch per request.

use axum::{
    extract::{Path, Query, State},
    http::Uri,
    response::Html,
    Json,
};
use chrono::Datelike;
use tracing::debug;

use super::dto::{
    FilterOptions, HealthResponse, PostListResponse, SearchQuery, VenueCard, VenueListResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::db::services as db_services;
use crate::models::VenueId;
use crate::routes::landing::{result_label, LIST_FILTERS, RENDER_LANDING};
use crate::routes::posts::LIST_POSTS;
use crate::routes::venues::{GET_VENUE, SEARCH_VENUES};
use crate::services::render::render_landing_page;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Storefront
// =============================================================================

/// GET /
///
/// Render the storefront page for the filter state in the query string.
pub async fn landing(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<Html<String>, AppError> {
    let filter = query.into_filter()?;
    let year = chrono::Utc::now().year();

    let page = db_services::landing_page(state.repository.as_ref(), filter, year).await?;
    debug!(operation = RENDER_LANDING, results = page.result_count, "rendering landing page");

    Ok(Html(render_landing_page(&page)))
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the catalog is loaded.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let catalog_status = match db_services::health_check(state.repository.as_ref()).await {
        Ok(true) => "loaded".to_string(),
        Ok(false) => "empty".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        catalog: catalog_status,
    }))
}

// =============================================================================
// Catalog API
// =============================================================================

/// GET /v1/venues
///
/// Filtered venue cards, using the same query parameters as the storefront page.
pub async fn list_venues(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> HandlerResult<VenueListResponse> {
    let filter = query.into_filter()?;
    let venues = db_services::search_venues(state.repository.as_ref(), &filter).await?;
    let total = venues.len();
    debug!(operation = SEARCH_VENUES, total, "venue search");

    Ok(Json(VenueListResponse {
        venues,
        total,
        label: result_label(total),
    }))
}

/// GET /v1/venues/{venue_id}
///
/// Get a single venue card.
pub async fn get_venue(
    State(state): State<AppState>,
    Path(venue_id): Path<String>,
) -> HandlerResult<VenueCard> {
    let venue_id = VenueId::new(venue_id);
    debug!(operation = GET_VENUE, venue_id = %venue_id, "venue lookup");
    let card = db_services::get_venue_card(state.repository.as_ref(), &venue_id).await?;
    Ok(Json(card))
}

/// GET /v1/posts
///
/// List editorial post teasers.
pub async fn list_posts(State(state): State<AppState>) -> HandlerResult<PostListResponse> {
    let posts = db_services::list_post_summaries(state.repository.as_ref()).await?;
    let total = posts.len();
    debug!(operation = LIST_POSTS, total, "post list");
    Ok(Json(PostListResponse { posts, total }))
}

/// GET /v1/filters
///
/// Options for the area, cuisine and budget controls.
pub async fn get_filters(State(state): State<AppState>) -> HandlerResult<FilterOptions> {
    let options = db_services::filter_options(state.repository.as_ref()).await?;
    debug!(
        operation = LIST_FILTERS,
        areas = options.areas.len(),
        cuisines = options.cuisines.len(),
        "filter options"
    );
    Ok(Json(options))
}

/// Fallback for unknown paths, including the not yet served `/{slug}` post pages.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
