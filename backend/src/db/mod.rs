//! Catalog storage.
//!
//! Access goes through the Repository pattern so the HTTP layer never depends
//! on where the catalog lives.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers                                          │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! │  - filter engine + link composer over repository data   │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  CatalogRepository trait                                │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//!     ┌───────────────▼──────────────────────────────┐
//!     │             Local Repository                 │
//!     │               (in-memory)                    │
//!     └──────────────────────────────────────────────┘
//! ```

pub mod factory;
pub mod repositories;
pub mod repository;
pub mod services;

pub use services::{
    filter_options, get_venue_card, health_check, landing_page, list_post_summaries,
    search_venues,
};

pub use factory::RepositoryFactory;
pub use repositories::LocalRepository;
pub use repository::{CatalogRepository, ErrorContext, RepositoryError, RepositoryResult};
