//! Core ranking domain for the CareAtlas provider directory.
//!
//! The crate models search candidates (first-party provider listings and
//! supplementary place listings), normalizes searcher-to-listing distances,
//! and implements the result pipeline the directory's search pages rely on:
//! tier-aware ranking, Featured/Nearby/Other sectioning, and pagination.
//!
//! Everything here is a pure, synchronous transformation over candidate
//! lists that a calling layer has already materialized. Constructors return
//! `Result` to surface invalid input early; the ranking and sectioning
//! functions themselves are total.
//!
//! # Examples
//!
//! ```
//! use careatlas_core::{
//!     Distance, PlanTier, ProviderListing, SearchRadius, section_by_radius,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let providers = vec![
//!     ProviderListing::new("a", "Bright Steps ABA", "Edison", PlanTier::Pro)
//!         .with_distance(Distance::miles(12.0)?),
//!     ProviderListing::new("b", "Open Door Therapy", "Trenton", PlanTier::Free)
//!         .with_distance(Distance::miles(40.0)?),
//! ];
//! let sectioned = section_by_radius(providers, Vec::new(), SearchRadius::miles(25.0)?);
//! assert_eq!(sectioned.nearby_count, 1);
//! assert_eq!(sectioned.other_count, 1);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod distance;
pub mod listing;
pub mod page;
pub mod rank;
pub mod section;
pub mod tier;

pub use distance::{Distance, DistanceError, RadiusError, SearchRadius};
pub use listing::{Candidate, PlaceListing, ProviderListing};
pub use page::{Page, PageError, PageRequest, paginate};
pub use rank::{by_distance, tier_then_distance};
pub use section::{
    Section, SectionedCandidate, SectionedResults, section_by_radius, section_statewide,
};
pub use tier::{PlanTier, SubscriptionStatus};
