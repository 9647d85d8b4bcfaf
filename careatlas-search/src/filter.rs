//! Case-insensitive free-text filtering of candidate listings.
//!
//! Matches the behavior of the directory's client-side query filter:
//! provider listings match on agency name, headline, summary, or city;
//! supplementary places match on name or city.

use careatlas_core::{PlaceListing, ProviderListing};

fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

pub(crate) fn matches_provider(listing: &ProviderListing, needle_lower: &str) -> bool {
    contains_ci(&listing.name, needle_lower)
        || listing
            .headline
            .as_deref()
            .is_some_and(|h| contains_ci(h, needle_lower))
        || listing
            .summary
            .as_deref()
            .is_some_and(|s| contains_ci(s, needle_lower))
        || contains_ci(&listing.city, needle_lower)
}

pub(crate) fn matches_place(place: &PlaceListing, needle_lower: &str) -> bool {
    contains_ci(&place.name, needle_lower) || contains_ci(&place.city, needle_lower)
}
