//! # MakanList
//!
//! Curated restaurant listings for a Singapore food-discovery site.
//!
//! The crate serves a single storefront page over a static, in-memory catalog
//! of venues and editorial posts. Readers narrow the venue grid by free text,
//! area, cuisine and budget; outbound booking links carry affiliate tracking
//! parameters for the partner network they point at.
//!
//! ## Architecture
//!
//! - [`models`]: catalog entities and the built-in sample catalog
//! - [`services`]: filter engine, affiliate link composer, price formatter, HTML renderer
//! - [`routes`]: view models (venue cards, post summaries, landing page)
//! - [`db`]: repository pattern over the catalog plus the service layer
//! - [`config`]: TOML site configuration
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Behavior notes
//!
//! - Free-text search is one case-insensitive substring over the venue name
//!   or the space-joined tags; it is never split into words.
//! - Affiliate suffixes are concatenated verbatim onto the booking URL.
//!   Unknown networks leave the URL untouched.

pub mod api;

pub mod config;
pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
