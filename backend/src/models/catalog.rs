//! Catalog entities: venues, editorial posts, brand and affiliate networks.
//!
//! Everything here is immutable once the catalog has been built. Area and
//! cuisine are plain strings; membership in the enumerated lists is expected
//! but not enforced.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::price::PriceTier;

crate::define_key_type!(VenueId);
crate::define_key_type!(PostSlug);

/// Outbound booking link attached to a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffiliateLink {
    /// Button text, e.g. "Book on Klook"
    pub label: String,
    /// Destination URL before tracking parameters are appended
    pub url: String,
    /// Affiliate network identifier ("klook", "chope", ...)
    pub network: String,
}

/// A single eating/drinking establishment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: VenueId,
    pub name: String,
    pub area: String,
    pub cuisine: String,
    pub price: PriceTier,
    pub rating: f64,
    pub blurb: String,
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliate: Option<AffiliateLink>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Venue {
    /// Tags joined by a single space, the form free-text search runs against.
    pub fn tag_line(&self) -> String {
        self.tags.join(" ")
    }
}

/// Editorial listicle referencing a curated set of venues by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub slug: PostSlug,
    pub title: String,
    pub summary: String,
    pub hero: String,
    /// Venue names, display only
    #[serde(default)]
    pub picks: Vec<String>,
}

/// Tracking configuration for one affiliate network.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliateNetwork {
    /// Landing page of the partner
    pub base: String,
    /// Query-string fragment appended to outbound links
    pub utm: String,
}

/// Network identifier to tracking configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AffiliateNetworks(BTreeMap<String, AffiliateNetwork>);

impl AffiliateNetworks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, network: &str) -> Option<&AffiliateNetwork> {
        self.0.get(network)
    }

    /// Add a network, replacing any existing entry with the same identifier.
    pub fn insert(&mut self, network: impl Into<String>, config: AffiliateNetwork) {
        self.0.insert(network.into(), config);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AffiliateNetwork)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, AffiliateNetwork)> for AffiliateNetworks {
    fn from_iter<I: IntoIterator<Item = (K, AffiliateNetwork)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Site identity and page metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub name: String,
    pub tagline: String,
    /// CSS color of the header logo mark
    pub primary_color: String,
    /// Document `<title>`
    pub title: String,
    /// Meta description
    pub description: String,
}

/// The complete, immutable content of the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    pub brand: Brand,
    pub affiliates: AffiliateNetworks,
    pub areas: Vec<String>,
    pub cuisines: Vec<String>,
    pub venues: Vec<Venue>,
    pub posts: Vec<Post>,
}

impl Catalog {
    pub fn venue(&self, id: &VenueId) -> Option<&Venue> {
        self.venues.iter().find(|v| &v.id == id)
    }
}
