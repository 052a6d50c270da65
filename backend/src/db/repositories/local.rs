//! In-memory catalog repository.

use async_trait::async_trait;
use log::debug;
use std::collections::HashSet;
use std::sync::Arc;

use crate::db::repository::{CatalogRepository, ErrorContext, RepositoryError, RepositoryResult};
use crate::models::{sample_catalog, Catalog, Post, Venue, VenueId};
use crate::routes::venues::GET_VENUE;

/// Repository serving a catalog held in process memory.
#[derive(Debug, Clone)]
pub struct LocalRepository {
    catalog: Arc<Catalog>,
}

impl LocalRepository {
    /// Repository over the built-in sample catalog.
    pub fn new() -> Self {
        Self {
            catalog: Arc::new(sample_catalog().clone()),
        }
    }

    /// Repository over a caller-supplied catalog.
    ///
    /// Venue ids and post slugs must be unique.
    pub fn with_catalog(catalog: Catalog) -> RepositoryResult<Self> {
        validate_catalog(&catalog)?;
        debug!(
            "Local catalog ready: {} venues, {} posts, {} affiliate networks",
            catalog.venues.len(),
            catalog.posts.len(),
            catalog.affiliates.len()
        );
        Ok(Self {
            catalog: Arc::new(catalog),
        })
    }
}

impl Default for LocalRepository {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_catalog(catalog: &Catalog) -> RepositoryResult<()> {
    let mut ids = HashSet::new();
    for venue in &catalog.venues {
        if !ids.insert(&venue.id) {
            return Err(RepositoryError::validation_with_context(
                format!("Duplicate venue id {}", venue.id),
                ErrorContext::new("validate_catalog")
                    .with_entity("venue")
                    .with_entity_id(&venue.id),
            ));
        }
    }

    let mut slugs = HashSet::new();
    for post in &catalog.posts {
        if !slugs.insert(&post.slug) {
            return Err(RepositoryError::validation_with_context(
                format!("Duplicate post slug {}", post.slug),
                ErrorContext::new("validate_catalog")
                    .with_entity("post")
                    .with_entity_id(&post.slug),
            ));
        }
    }

    Ok(())
}

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(!self.catalog.venues.is_empty())
    }

    async fn catalog(&self) -> RepositoryResult<Arc<Catalog>> {
        Ok(Arc::clone(&self.catalog))
    }

    async fn get_venue(&self, id: &VenueId) -> RepositoryResult<Venue> {
        self.catalog.venue(id).cloned().ok_or_else(|| {
            RepositoryError::not_found_with_context(
                format!("Venue {} not found", id),
                ErrorContext::new(GET_VENUE)
                    .with_entity("venue")
                    .with_entity_id(id),
            )
        })
    }

    async fn list_posts(&self) -> RepositoryResult<Vec<Post>> {
        Ok(self.catalog.posts.clone())
    }
}
