//! Search candidates: first-party provider listings and supplementary
//! place listings.
//!
//! The two shapes are kept distinct behind the [`Candidate`] sum so the
//! ranking code dispatches exhaustively instead of sniffing fields at
//! runtime. Supplementary listings carry no tier and can never be featured.

use crate::distance::Distance;
use crate::tier::PlanTier;

/// A listing sourced from the platform's own provider database.
///
/// # Examples
/// ```
/// use careatlas_core::{Distance, PlanTier, ProviderListing};
///
/// # fn main() -> Result<(), careatlas_core::DistanceError> {
/// let listing = ProviderListing::new("loc-1", "Bright Steps ABA", "Edison", PlanTier::Pro)
///     .with_headline("Early intervention specialists")
///     .with_distance(Distance::miles(4.2)?);
/// assert!(listing.tier.is_paid());
/// assert!(!listing.is_featured);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProviderListing {
    /// Location identifier from the provider database.
    pub id: String,
    /// Agency display name.
    pub name: String,
    /// Optional marketing headline.
    pub headline: Option<String>,
    /// Optional listing summary.
    pub summary: Option<String>,
    /// City of this location.
    pub city: String,
    /// Effective plan tier used as a ranking signal.
    pub tier: PlanTier,
    /// Whether the location holds a featured placement.
    pub is_featured: bool,
    /// Normalized distance from the searcher.
    pub distance: Distance,
}

impl ProviderListing {
    /// Construct a listing with no headline or summary, not featured, and
    /// an unknown distance.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        city: impl Into<String>,
        tier: PlanTier,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            headline: None,
            summary: None,
            city: city.into(),
            tier,
            is_featured: false,
            distance: Distance::unknown(),
        }
    }

    /// Set the marketing headline while returning `self` for chaining.
    #[must_use]
    pub fn with_headline(mut self, headline: impl Into<String>) -> Self {
        self.headline = Some(headline.into());
        self
    }

    /// Set the summary while returning `self` for chaining.
    #[must_use]
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Mark the listing as a featured placement.
    #[must_use]
    pub const fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Set the searcher distance while returning `self` for chaining.
    #[must_use]
    pub const fn with_distance(mut self, distance: Distance) -> Self {
        self.distance = distance;
        self
    }
}

/// A listing sourced from an external data provider, shown to fill out
/// sparse results.
///
/// # Examples
/// ```
/// use careatlas_core::{Distance, PlaceListing};
///
/// # fn main() -> Result<(), careatlas_core::DistanceError> {
/// let place = PlaceListing::new("place-1", "Sunrise Behavioral", "Newark")
///     .with_distance(Distance::miles(18.0)?);
/// assert_eq!(place.name, "Sunrise Behavioral");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceListing {
    /// Identifier from the external data provider.
    pub id: String,
    /// Business display name.
    pub name: String,
    /// City of the place.
    pub city: String,
    /// Normalized distance from the searcher.
    pub distance: Distance,
}

impl PlaceListing {
    /// Construct a place listing with an unknown distance.
    pub fn new(id: impl Into<String>, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            distance: Distance::unknown(),
        }
    }

    /// Set the searcher distance while returning `self` for chaining.
    #[must_use]
    pub const fn with_distance(mut self, distance: Distance) -> Self {
        self.distance = distance;
        self
    }
}

/// Either kind of search candidate.
///
/// # Examples
/// ```
/// use careatlas_core::{Candidate, PlaceListing};
///
/// let candidate = Candidate::Place(PlaceListing::new("p", "Sunrise Behavioral", "Newark"));
/// assert!(candidate.is_supplementary());
/// assert_eq!(candidate.display_name(), "Sunrise Behavioral");
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "source", rename_all = "snake_case"))]
pub enum Candidate {
    /// A first-party provider listing.
    Provider(ProviderListing),
    /// A supplementary place listing.
    Place(PlaceListing),
}

impl Candidate {
    /// Name shown on the result card.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Provider(listing) => &listing.name,
            Self::Place(place) => &place.name,
        }
    }

    /// City of the listing.
    #[must_use]
    pub fn city(&self) -> &str {
        match self {
            Self::Provider(listing) => &listing.city,
            Self::Place(place) => &place.city,
        }
    }

    /// Normalized distance from the searcher.
    #[must_use]
    pub const fn distance(&self) -> Distance {
        match self {
            Self::Provider(listing) => listing.distance,
            Self::Place(place) => place.distance,
        }
    }

    /// Reports whether the candidate came from the external data provider.
    #[must_use]
    pub const fn is_supplementary(&self) -> bool {
        matches!(self, Self::Place(_))
    }
}
