//! Service layer over the catalog repository.
//!
//! These functions combine repository reads with the pure storefront logic in
//! [`crate::services`]. They work with any [`CatalogRepository`]; use them
//! from handlers and tests rather than calling the repository directly.

use log::debug;

use super::repository::{CatalogRepository, RepositoryResult};
use crate::models::VenueId;
use crate::routes::landing::{FilterOptions, LandingPage};
use crate::routes::posts::PostSummary;
use crate::routes::venues::VenueCard;
use crate::services::filter::{filter_venues, VenueFilter};

/// Check that the repository is serving a usable catalog.
pub async fn health_check<R: CatalogRepository + ?Sized>(repo: &R) -> RepositoryResult<bool> {
    repo.health_check().await
}

/// Filter the catalog and return venue cards with booking links composed.
pub async fn search_venues<R: CatalogRepository + ?Sized>(
    repo: &R,
    filter: &VenueFilter,
) -> RepositoryResult<Vec<VenueCard>> {
    let catalog = repo.catalog().await?;
    let cards: Vec<VenueCard> = filter_venues(&catalog.venues, filter)
        .into_iter()
        .map(|venue| VenueCard::from_venue(venue, &catalog.affiliates))
        .collect();
    debug!("search_venues returned {} cards", cards.len());
    Ok(cards)
}

/// Card for a single venue.
pub async fn get_venue_card<R: CatalogRepository + ?Sized>(
    repo: &R,
    id: &VenueId,
) -> RepositoryResult<VenueCard> {
    let venue = repo.get_venue(id).await?;
    let catalog = repo.catalog().await?;
    Ok(VenueCard::from_venue(&venue, &catalog.affiliates))
}

/// Teasers for every editorial post, in catalog order.
pub async fn list_post_summaries<R: CatalogRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<Vec<PostSummary>> {
    let posts = repo.list_posts().await?;
    Ok(posts.iter().map(PostSummary::from).collect())
}

/// Choices for the area, cuisine and budget controls.
pub async fn filter_options<R: CatalogRepository + ?Sized>(
    repo: &R,
) -> RepositoryResult<FilterOptions> {
    let catalog = repo.catalog().await?;
    Ok(FilterOptions::from_catalog(&catalog))
}

/// Assemble the storefront page for one filter state.
pub async fn landing_page<R: CatalogRepository + ?Sized>(
    repo: &R,
    filter: VenueFilter,
    year: i32,
) -> RepositoryResult<LandingPage> {
    let catalog = repo.catalog().await?;
    Ok(LandingPage::build(&catalog, filter, year))
}
