//! Combined provider and place search for the CareAtlas directory.
//!
//! The data layer fetches every matching first-party provider row and
//! supplementary place row for the searched region; this crate performs the
//! pure remainder of the request: resolve effective tiers and searcher
//! distances, apply the free-text filter, section the combined candidates
//! (Featured, Nearby, Other), and paginate into one result page.
//!
//! # Examples
//!
//! ```
//! use careatlas_core::PlanTier;
//! use careatlas_search::{ProviderRecord, SearchQuery, search};
//!
//! # fn main() -> Result<(), careatlas_search::SearchError> {
//! let providers = vec![ProviderRecord::new("a", "Bright Steps ABA", "Edison", PlanTier::Free)];
//! let page = search(providers, Vec::new(), &SearchQuery::new())?;
//! assert_eq!(page.total, 1);
//! assert_eq!(page.provider_count, 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod filter;
mod ingest;
mod query;

pub use ingest::{PlaceRecord, ProviderRecord};
pub use query::{DEFAULT_PAGE_SIZE, DEFAULT_RADIUS_MILES, SearchQuery};

use careatlas_core::{
    PageError, PageRequest, RadiusError, SearchRadius, SectionedCandidate, SectionedResults,
    paginate, section_by_radius, section_statewide,
};
use log::debug;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One page of combined search results with section and source metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchPage {
    /// Results on this page, in display order.
    pub results: Vec<SectionedCandidate>,
    /// First-party candidates that survived the text filter, across all
    /// pages.
    pub provider_count: usize,
    /// Supplementary candidates that survived the text filter, across all
    /// pages.
    pub place_count: usize,
    /// Featured results across all pages.
    pub featured_count: usize,
    /// Nearby results across all pages.
    pub nearby_count: usize,
    /// Beyond-radius results across all pages.
    pub other_count: usize,
    /// Radius the Nearby section was cut at, in miles.
    pub radius_miles: f64,
    /// Combined result count across all pages.
    pub total: usize,
    /// The 1-based page number served.
    pub page: usize,
    /// Number of pages the combined results span.
    pub total_pages: usize,
    /// Whether pages exist after this one.
    pub has_more: bool,
}

/// Errors returned by [`search`].
#[derive(Debug, Error, PartialEq)]
pub enum SearchError {
    /// The requested radius was out of contract.
    #[error("invalid search radius")]
    InvalidRadius(#[from] RadiusError),
    /// The requested pagination was out of contract.
    #[error("invalid pagination request")]
    InvalidPagination(#[from] PageError),
}

/// Run the combined search over already-fetched candidate rows.
///
/// With an origin on the query, candidates are sectioned around the
/// query's radius; without one the search is state-wide and every
/// non-featured candidate lands in the Nearby section. Pagination is
/// applied after sectioning so featured and paid placements hold their
/// position on every page.
///
/// # Errors
/// Returns [`SearchError`] when the query's radius, page, or limit is out
/// of contract.
pub fn search(
    providers: Vec<ProviderRecord>,
    places: Vec<PlaceRecord>,
    query: &SearchQuery,
) -> Result<SearchPage, SearchError> {
    let radius = SearchRadius::miles(query.radius_miles)?;
    let request = PageRequest::new(query.page, query.limit)?;

    let mut provider_listings: Vec<_> = providers
        .into_iter()
        .map(|record| record.into_listing(query.origin))
        .collect();
    let mut place_listings: Vec<_> = places
        .into_iter()
        .map(|record| record.into_listing(query.origin))
        .collect();

    if let Some(text) = query.text.as_deref() {
        let needle = text.to_lowercase();
        provider_listings.retain(|listing| filter::matches_provider(listing, &needle));
        place_listings.retain(|place| filter::matches_place(place, &needle));
    }

    let provider_count = provider_listings.len();
    let place_count = place_listings.len();
    debug!("search: {provider_count} providers, {place_count} places after filtering");

    let sectioned = if query.origin.is_some() {
        section_by_radius(provider_listings, place_listings, radius)
    } else {
        section_statewide(provider_listings, place_listings)
    };
    let SectionedResults {
        results,
        featured_count,
        nearby_count,
        other_count,
    } = sectioned;
    debug!("search: featured={featured_count} nearby={nearby_count} other={other_count}");

    let page = paginate(results, request);

    Ok(SearchPage {
        results: page.items,
        provider_count,
        place_count,
        featured_count,
        nearby_count,
        other_count,
        radius_miles: radius.as_miles(),
        total: page.total,
        page: page.page,
        total_pages: page.total_pages,
        has_more: page.has_more,
    })
}
