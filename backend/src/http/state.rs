//! Application state for the HTTP server.

use std::sync::Arc;

use crate::db::repository::CatalogRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Catalog the storefront serves
    pub repository: Arc<dyn CatalogRepository>,
}

impl AppState {
    /// Create a new application state with the given repository.
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self { repository }
    }
}
