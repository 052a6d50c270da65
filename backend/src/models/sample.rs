//! Built-in MakanList catalog.
//!
//! Built once per process on first access and never mutated afterwards.

use std::sync::OnceLock;

use super::catalog::{
    AffiliateLink, AffiliateNetwork, AffiliateNetworks, Brand, Catalog, Post, PostSlug, Venue,
    VenueId,
};
use super::price::PriceTier;

static SAMPLE_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Shared reference to the sample catalog.
pub fn sample_catalog() -> &'static Catalog {
    SAMPLE_CATALOG.get_or_init(build_sample_catalog)
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn tier(value: u8) -> PriceTier {
    PriceTier::new(value).unwrap_or_default()
}

fn build_sample_catalog() -> Catalog {
    let affiliates: AffiliateNetworks = [
        (
            "klook",
            AffiliateNetwork {
                base: "https://www.klook.com/en-SG/".to_string(),
                utm: "?aid=YOUR_AFFILIATE_ID&aff_adid=LISTICLE2025".to_string(),
            },
        ),
        (
            "chope",
            AffiliateNetwork {
                base: "https://www.chope.co/singapore-restaurants/".to_string(),
                utm: "?utm_source=your-site&utm_medium=affiliate".to_string(),
            },
        ),
    ]
    .into_iter()
    .collect();

    let venues = vec![
        Venue {
            id: VenueId::new("ramen-orchard-01"),
            name: "Ramen Gokoro".to_string(),
            area: "Orchard".to_string(),
            cuisine: "Japanese".to_string(),
            price: tier(2),
            rating: 4.5,
            blurb: "Rich tonkotsu, springy noodles, under $15 lunch sets.".to_string(),
            image: "https://images.unsplash.com/photo-1544025162-d76694265947?q=80&w=1600&auto=format&fit=crop".to_string(),
            affiliate: Some(AffiliateLink {
                label: "Book on Klook".to_string(),
                url: "https://www.klook.com/en-SG/city/14-singapore/".to_string(),
                network: "klook".to_string(),
            }),
            tags: strings(&["ramen", "noodles", "lunch deals"]),
        },
        Venue {
            id: VenueId::new("bbq-tanjong-02"),
            name: "Seoul Charcoal BBQ".to_string(),
            area: "CBD".to_string(),
            cuisine: "Korean".to_string(),
            price: tier(3),
            rating: 4.3,
            blurb: "Premium cuts, smokeless grills, great for groups.".to_string(),
            image: "https://images.unsplash.com/photo-1536007164800-b7f11331f35e?q=80&w=1600&auto=format&fit=crop".to_string(),
            affiliate: Some(AffiliateLink {
                label: "Reserve on Chope".to_string(),
                url: "https://www.chope.co/singapore-restaurants/".to_string(),
                network: "chope".to_string(),
            }),
            tags: strings(&["bbq", "date night", "group"]),
        },
        Venue {
            id: VenueId::new("dessert-bugis-03"),
            name: "Snow & Sago".to_string(),
            area: "Bugis".to_string(),
            cuisine: "Desserts".to_string(),
            price: tier(1),
            rating: 4.2,
            blurb: "Shaved ice towers, mango sago, wallet-friendly.".to_string(),
            image: "https://images.unsplash.com/photo-1460306855393-0410f61241c7?q=80&w=1600&auto=format&fit=crop".to_string(),
            affiliate: Some(AffiliateLink {
                label: "Deals on Klook".to_string(),
                url: "https://www.klook.com/en-SG/city/14-singapore/".to_string(),
                network: "klook".to_string(),
            }),
            tags: strings(&["dessert", "late night", "sweet"]),
        },
    ];

    let posts = vec![
        Post {
            slug: PostSlug::new("best-ramen-orchard"),
            title: "7 Best Ramen Places in Orchard (2025)".to_string(),
            summary: "From budget bowls to premium tonkotsu – slurp through Orchard without breaking the bank.".to_string(),
            hero: "https://images.unsplash.com/photo-1544025162-d76694265947?q=80&w=1600&auto=format&fit=crop".to_string(),
            picks: strings(&["Ramen Gokoro", "Umai Ramen Lab", "Tonkotsu Street"]),
        },
        Post {
            slug: PostSlug::new("affordable-buffets-under-40"),
            title: "10 Affordable Buffets in SG Under $40".to_string(),
            summary: "All-you-can-eat without the tax shock.".to_string(),
            hero: "https://images.unsplash.com/photo-1515003197210-e0cd71810b5f?q=80&w=1600&auto=format&fit=crop".to_string(),
            picks: strings(&["Seoul Charcoal BBQ", "Haru Hotpot", "Eat-All-Day Noodle Bar"]),
        },
    ];

    Catalog {
        brand: Brand {
            name: "MakanList".to_string(),
            tagline: "Find great eats across Singapore, fast.".to_string(),
            primary_color: "#0ea5e9".to_string(),
            title: "MakanList · Find great eats across Singapore, fast.".to_string(),
            description: "Singapore food & drinks listicles, curated picks, and deals.".to_string(),
        },
        affiliates,
        areas: strings(&["Orchard", "Bugis", "Tiong Bahru", "Katong", "CBD", "Novena"]),
        cuisines: strings(&[
            "Japanese", "Korean", "Chinese", "Malay", "Indian", "Western", "Vegan", "Seafood",
            "Desserts",
        ]),
        venues,
        posts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_sample_catalog_is_shared() {
        let a = sample_catalog() as *const Catalog;
        let b = sample_catalog() as *const Catalog;
        assert_eq!(a, b);
    }

    #[test]
    fn test_venue_ids_are_unique() {
        let catalog = sample_catalog();
        let ids: HashSet<_> = catalog.venues.iter().map(|v| &v.id).collect();
        assert_eq!(ids.len(), catalog.venues.len());
    }

    #[test]
    fn test_venues_use_enumerated_areas_and_cuisines() {
        let catalog = sample_catalog();
        for venue in &catalog.venues {
            assert!(catalog.areas.contains(&venue.area), "{}", venue.area);
            assert!(catalog.cuisines.contains(&venue.cuisine), "{}", venue.cuisine);
        }
    }

    #[test]
    fn test_every_affiliate_network_is_configured() {
        let catalog = sample_catalog();
        for venue in &catalog.venues {
            let link = venue.affiliate.as_ref().unwrap();
            assert!(catalog.affiliates.get(&link.network).is_some());
        }
    }

    #[test]
    fn test_price_tiers_match_source_data() {
        let prices: Vec<u8> = sample_catalog()
            .venues
            .iter()
            .map(|v| v.price.value())
            .collect();
        assert_eq!(prices, vec![2, 3, 1]);
    }
}
