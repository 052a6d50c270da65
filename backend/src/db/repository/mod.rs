//! Repository trait for catalog access.
//!
//! The storefront only reads. Implementations hand out shared, immutable
//! catalog data; nothing here mutates it after construction.

pub mod error;

use async_trait::async_trait;
use std::sync::Arc;

use crate::models::{Catalog, Post, Venue, VenueId};

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

/// Read access to the storefront catalog.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Check that the catalog is loaded and usable.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Shared snapshot of the whole catalog, venues in catalog order.
    async fn catalog(&self) -> RepositoryResult<Arc<Catalog>>;

    /// Look up a single venue by key.
    async fn get_venue(&self, id: &VenueId) -> RepositoryResult<Venue>;

    /// All editorial posts in catalog order.
    async fn list_posts(&self) -> RepositoryResult<Vec<Post>>;
}
