//! Facade crate for the CareAtlas search ranking engine.
//!
//! This crate re-exports the core ranking domain and exposes the combined
//! search pipeline behind a feature flag.

#![forbid(unsafe_code)]

pub use careatlas_core::{
    Candidate, Distance, DistanceError, Page, PageError, PageRequest, PlaceListing, PlanTier,
    ProviderListing, RadiusError, SearchRadius, Section, SectionedCandidate, SectionedResults,
    SubscriptionStatus, by_distance, paginate, section_by_radius, section_statewide,
    tier_then_distance,
};

#[cfg(feature = "search")]
pub use careatlas_search::{
    DEFAULT_PAGE_SIZE, DEFAULT_RADIUS_MILES, PlaceRecord, ProviderRecord, SearchError, SearchPage,
    SearchQuery, search,
};
