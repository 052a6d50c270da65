//! Router configuration for the storefront.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{http::Method, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // Read-only API: GET from anywhere
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers(Any);

    let api_v1 = Router::new()
        .route("/venues", get(handlers::list_venues))
        .route("/venues/{venue_id}", get(handlers::get_venue))
        .route("/posts", get(handlers::list_posts))
        .route("/filters", get(handlers::get_filters));

    Router::new()
        .route("/", get(handlers::landing))
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        .fallback(handlers::not_found)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
