//! Repository factory for dependency injection.
//!
//! Builds repository instances from runtime configuration so the HTTP layer
//! only ever sees `Arc<dyn CatalogRepository>`.

use std::sync::Arc;

use super::repositories::LocalRepository;
use super::repository::{CatalogRepository, RepositoryResult};
use crate::config::SiteConfig;
use crate::models::{sample_catalog, Catalog};

/// Repository factory for creating repository instances.
///
/// # Example
/// ```ignore
/// use makanlist::config::SiteConfig;
/// use makanlist::db::RepositoryFactory;
///
/// let config = SiteConfig::from_default_location()?;
/// let repo = RepositoryFactory::from_config(&config)?;
/// ```
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create an in-memory repository over the built-in catalog.
    pub fn create_local() -> Arc<dyn CatalogRepository> {
        Arc::new(LocalRepository::new())
    }

    /// Create an in-memory repository over a caller-supplied catalog.
    pub fn with_catalog(catalog: Catalog) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        Ok(Arc::new(LocalRepository::with_catalog(catalog)?))
    }

    /// Create the built-in catalog with brand and affiliate overrides from
    /// `config` applied.
    pub fn from_config(config: &SiteConfig) -> RepositoryResult<Arc<dyn CatalogRepository>> {
        let mut catalog = sample_catalog().clone();
        config.apply_to_catalog(&mut catalog);
        Self::with_catalog(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::AffiliateNetwork;

    #[tokio::test]
    async fn test_create_local() {
        let repo = RepositoryFactory::create_local();
        assert!(repo.health_check().await.unwrap());
    }

    #[tokio::test]
    async fn test_from_config_applies_overrides() {
        let mut config = SiteConfig::default();
        config.affiliates.insert(
            "chope".to_string(),
            AffiliateNetwork {
                base: "https://www.chope.co/".to_string(),
                utm: "?utm_source=makanlist".to_string(),
            },
        );

        let repo = RepositoryFactory::from_config(&config).unwrap();
        let catalog = repo.catalog().await.unwrap();
        assert_eq!(
            catalog.affiliates.get("chope").unwrap().utm,
            "?utm_source=makanlist"
        );
        // The shared sample stays untouched
        assert_eq!(
            sample_catalog().affiliates.get("chope").unwrap().utm,
            "?utm_source=your-site&utm_medium=affiliate"
        );
    }
}
