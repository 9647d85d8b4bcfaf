//! Shared builders for the ranking integration tests.

use careatlas_core::{Distance, PlaceListing, PlanTier, ProviderListing, SearchRadius};

/// Build a provider listing with an optional known distance.
pub fn provider(name: &str, tier: PlanTier, miles: Option<f64>) -> ProviderListing {
    ProviderListing::new(name, name, "Edison", tier).with_distance(distance(miles))
}

/// Build a featured provider listing.
pub fn featured_provider(name: &str, tier: PlanTier, miles: Option<f64>) -> ProviderListing {
    provider(name, tier, miles).featured()
}

/// Build a place listing with an optional known distance.
pub fn place(name: &str, miles: Option<f64>) -> PlaceListing {
    PlaceListing::new(name, name, "Newark").with_distance(distance(miles))
}

/// Build a validated radius.
pub fn radius(miles: f64) -> SearchRadius {
    SearchRadius::miles(miles).expect("test radius is valid")
}

fn distance(miles: Option<f64>) -> Distance {
    miles.map_or_else(Distance::unknown, |m| {
        Distance::miles(m).expect("test distance is valid")
    })
}
