#[cfg(test)]
mod tests {
    use crate::models::{sample_catalog, PriceTier, Venue, VenueId};
    use crate::services::filter::{filter_venues, VenueFilter};

    fn names(venues: &[&Venue]) -> Vec<String> {
        venues.iter().map(|v| v.name.clone()).collect()
    }

    fn tier(value: u8) -> PriceTier {
        PriceTier::new(value).unwrap()
    }

    fn create_test_venue(id: &str, name: &str, area: &str, tags: &[&str]) -> Venue {
        Venue {
            id: VenueId::new(id),
            name: name.to_string(),
            area: area.to_string(),
            cuisine: "Western".to_string(),
            price: tier(2),
            rating: 4.0,
            blurb: String::new(),
            image: String::new(),
            affiliate: None,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn test_identity_filter_returns_full_catalog() {
        let venues = &sample_catalog().venues;
        let filter = VenueFilter::new();
        assert!(filter.is_identity());

        let result = filter_venues(venues, &filter);
        assert_eq!(result.len(), venues.len());
        for (got, expected) in result.iter().zip(venues.iter()) {
            assert_eq!(*got, expected);
        }
    }

    #[test]
    fn test_query_matches_name() {
        let result = filter_venues(
            &sample_catalog().venues,
            &VenueFilter::new().with_query("ramen"),
        );
        assert_eq!(names(&result), vec!["Ramen Gokoro"]);
    }

    #[test]
    fn test_query_matches_tag() {
        let result = filter_venues(
            &sample_catalog().venues,
            &VenueFilter::new().with_query("bbq"),
        );
        assert_eq!(names(&result), vec!["Seoul Charcoal BBQ"]);
    }

    #[test]
    fn test_query_is_case_insensitive() {
        let result = filter_venues(
            &sample_catalog().venues,
            &VenueFilter::new().with_query("SNOW"),
        );
        assert_eq!(names(&result), vec!["Snow & Sago"]);
    }

    #[test]
    fn test_max_price_one_returns_cheapest_only() {
        let result = filter_venues(
            &sample_catalog().venues,
            &VenueFilter::new().with_max_price(tier(1)),
        );
        assert_eq!(names(&result), vec!["Snow & Sago"]);
    }

    #[test]
    fn test_max_price_is_inclusive() {
        let result = filter_venues(
            &sample_catalog().venues,
            &VenueFilter::new().with_max_price(tier(2)),
        );
        assert_eq!(names(&result), vec!["Ramen Gokoro", "Snow & Sago"]);
    }

    #[test]
    fn test_query_spanning_adjacent_tags() {
        // "noodles lunch" only exists across the tag separator
        let result = filter_venues(
            &sample_catalog().venues,
            &VenueFilter::new().with_query("noodles lunch"),
        );
        assert_eq!(names(&result), vec!["Ramen Gokoro"]);
    }

    #[test]
    fn test_multi_word_query_is_not_tokenized() {
        let result = filter_venues(
            &sample_catalog().venues,
            &VenueFilter::new().with_query("ramen orchard"),
        );
        assert!(result.is_empty());
    }

    #[test]
    fn test_area_is_exact_match() {
        let venues = &sample_catalog().venues;
        let result = filter_venues(venues, &VenueFilter::new().with_area("Bugis"));
        assert_eq!(names(&result), vec!["Snow & Sago"]);

        let result = filter_venues(venues, &VenueFilter::new().with_area("bugis"));
        assert!(result.is_empty());
    }

    #[test]
    fn test_cuisine_filter() {
        let result = filter_venues(
            &sample_catalog().venues,
            &VenueFilter::new().with_cuisine("Korean"),
        );
        assert_eq!(names(&result), vec!["Seoul Charcoal BBQ"]);
    }

    #[test]
    fn test_all_predicates_are_combined() {
        let venues = &sample_catalog().venues;
        let filter = VenueFilter::new()
            .with_query("ramen")
            .with_area("Orchard")
            .with_cuisine("Japanese")
            .with_max_price(tier(1));
        assert!(filter_venues(venues, &filter).is_empty());

        let filter = filter.with_max_price(tier(2));
        assert_eq!(names(&filter_venues(venues, &filter)), vec!["Ramen Gokoro"]);
    }

    #[test]
    fn test_area_outside_enumerated_list_never_matches_selection() {
        let venues = vec![create_test_venue("x", "Hidden Gem", "Jurong", &[])];
        assert!(filter_venues(&venues, &VenueFilter::new().with_area("Orchard")).is_empty());
        assert_eq!(filter_venues(&venues, &VenueFilter::new()).len(), 1);
    }

    #[test]
    fn test_empty_catalog() {
        assert!(filter_venues(&[], &VenueFilter::new().with_query("ramen")).is_empty());
    }

    #[test]
    fn test_matches_agrees_with_filter_venues() {
        let venues = &sample_catalog().venues;
        let filter = VenueFilter::new().with_query("late night");
        let expected: Vec<&Venue> = venues.iter().filter(|v| filter.matches(v)).collect();
        assert_eq!(filter_venues(venues, &filter), expected);
        assert_eq!(names(&expected), vec!["Snow & Sago"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let venues = vec![
            create_test_venue("c", "Cafe C", "CBD", &["coffee"]),
            create_test_venue("a", "Cafe A", "CBD", &["coffee"]),
            create_test_venue("b", "Bistro B", "CBD", &["wine"]),
        ];
        let result = filter_venues(&venues, &VenueFilter::new().with_query("cafe"));
        assert_eq!(names(&result), vec!["Cafe C", "Cafe A"]);
    }

    #[test]
    fn test_filter_is_idempotent() {
        let venues = &sample_catalog().venues;
        let filter = VenueFilter::new().with_query("a").with_max_price(tier(2));
        assert_eq!(filter_venues(venues, &filter), filter_venues(venues, &filter));
    }
}
