//! Partition ranked candidates into Featured, Nearby, and Other sections.
//!
//! Featured provider listings always lead the results regardless of
//! distance. The remaining candidates split on the search radius: within it
//! they are Nearby, beyond it (or with no distance on record) they are
//! Other. Provider listings precede supplementary places inside each of the
//! Nearby and Other sections, and each bucket is sorted with the
//! comparators from [`crate::rank`].

use crate::distance::SearchRadius;
use crate::listing::{Candidate, PlaceListing, ProviderListing};
use crate::rank::{by_distance, tier_then_distance};

/// Display section assigned to a result while sectioning.
///
/// # Examples
/// ```
/// use careatlas_core::Section;
///
/// assert_eq!(Section::Nearby.as_str(), "nearby");
/// assert_eq!("featured".parse::<Section>(), Ok(Section::Featured));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Section {
    /// Paid promotional placement; always first.
    Featured,
    /// Within the search radius.
    Nearby,
    /// Beyond the radius, or no distance on record.
    Other,
}

impl Section {
    /// Return the section as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Featured => "featured",
            Self::Nearby => "nearby",
            Self::Other => "other",
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "featured" => Ok(Self::Featured),
            "nearby" => Ok(Self::Nearby),
            "other" => Ok(Self::Other),
            _ => Err(format!("unknown section '{s}'")),
        }
    }
}

/// A candidate tagged with the section it was emitted into.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionedCandidate {
    /// Section assigned during sectioning.
    pub section: Section,
    /// The tagged candidate.
    pub candidate: Candidate,
}

/// The ordered, tagged output of the sectioning engine.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SectionedResults {
    /// All candidates in final display order.
    pub results: Vec<SectionedCandidate>,
    /// Number of featured results.
    pub featured_count: usize,
    /// Number of nearby results, first-party and supplementary combined.
    pub nearby_count: usize,
    /// Number of results beyond the radius, both sources combined.
    pub other_count: usize,
}

impl SectionedResults {
    /// Total number of sectioned candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Reports whether no candidates were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }

    /// Consume the wrapper and return the ordered results.
    #[must_use]
    pub fn into_results(self) -> Vec<SectionedCandidate> {
        self.results
    }
}

fn sort_providers(listings: &mut [ProviderListing]) {
    listings.sort_by(tier_then_distance);
}

fn sort_places(places: &mut [PlaceListing]) {
    places.sort_by(by_distance);
}

fn emit(
    results: &mut Vec<SectionedCandidate>,
    section: Section,
    providers: Vec<ProviderListing>,
    places: Vec<PlaceListing>,
) {
    results.extend(providers.into_iter().map(|listing| SectionedCandidate {
        section,
        candidate: Candidate::Provider(listing),
    }));
    results.extend(places.into_iter().map(|place| SectionedCandidate {
        section,
        candidate: Candidate::Place(place),
    }));
}

/// Section candidates around a proximity radius.
///
/// Global ordering is fixed: all Featured, then Nearby (providers before
/// places), then Other (providers before places). Featured providers land
/// in Featured regardless of distance; places can never be Featured.
/// Radius membership is inclusive and unknown distances are never Nearby.
///
/// # Examples
/// ```
/// use careatlas_core::{
///     Distance, PlanTier, PlaceListing, ProviderListing, SearchRadius, Section,
///     section_by_radius,
/// };
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let providers = vec![
///     ProviderListing::new("a", "Close Agency", "Edison", PlanTier::Free)
///         .with_distance(Distance::miles(10.0)?),
/// ];
/// let places = vec![
///     PlaceListing::new("p", "Remote Place", "Camden").with_distance(Distance::miles(80.0)?),
/// ];
/// let sectioned = section_by_radius(providers, places, SearchRadius::miles(25.0)?);
/// let sections: Vec<Section> = sectioned.results.iter().map(|r| r.section).collect();
/// assert_eq!(sections, vec![Section::Nearby, Section::Other]);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn section_by_radius(
    providers: Vec<ProviderListing>,
    places: Vec<PlaceListing>,
    radius: SearchRadius,
) -> SectionedResults {
    let (mut featured, non_featured): (Vec<_>, Vec<_>) =
        providers.into_iter().partition(|p| p.is_featured);
    let (mut nearby_providers, mut other_providers): (Vec<_>, Vec<_>) = non_featured
        .into_iter()
        .partition(|p| radius.contains(p.distance));
    let (mut nearby_places, mut other_places): (Vec<_>, Vec<_>) =
        places.into_iter().partition(|p| radius.contains(p.distance));

    sort_providers(&mut featured);
    sort_providers(&mut nearby_providers);
    sort_providers(&mut other_providers);
    sort_places(&mut nearby_places);
    sort_places(&mut other_places);

    let featured_count = featured.len();
    let nearby_count = nearby_providers.len() + nearby_places.len();
    let other_count = other_providers.len() + other_places.len();

    let mut results = Vec::with_capacity(featured_count + nearby_count + other_count);
    emit(&mut results, Section::Featured, featured, Vec::new());
    emit(&mut results, Section::Nearby, nearby_providers, nearby_places);
    emit(&mut results, Section::Other, other_providers, other_places);

    SectionedResults {
        results,
        featured_count,
        nearby_count,
        other_count,
    }
}

/// Section candidates without a proximity origin.
///
/// State-wide searches have no meaningful radius, so there is no Other
/// section: featured providers lead, then every remaining provider (paid
/// before free), then every place, all tagged Nearby.
#[must_use]
pub fn section_statewide(
    providers: Vec<ProviderListing>,
    mut places: Vec<PlaceListing>,
) -> SectionedResults {
    let (mut featured, mut non_featured): (Vec<_>, Vec<_>) =
        providers.into_iter().partition(|p| p.is_featured);

    sort_providers(&mut featured);
    sort_providers(&mut non_featured);
    sort_places(&mut places);

    let featured_count = featured.len();
    let nearby_count = non_featured.len() + places.len();

    let mut results = Vec::with_capacity(featured_count + nearby_count);
    emit(&mut results, Section::Featured, featured, Vec::new());
    emit(&mut results, Section::Nearby, non_featured, places);

    SectionedResults {
        results,
        featured_count,
        nearby_count,
        other_count: 0,
    }
}
