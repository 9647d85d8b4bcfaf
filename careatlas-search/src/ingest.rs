//! Turn raw candidate rows into ranked-search listings.
//!
//! Records carry what the data layer returns: stored tier plus
//! subscription status, and optional coordinates. Ingestion resolves the
//! effective tier and normalizes the searcher distance exactly once, so
//! everything downstream works with [`careatlas_core`] types.

use careatlas_core::{Distance, PlaceListing, PlanTier, ProviderListing, SubscriptionStatus};
use careatlas_geo::distance_miles;
use geo::Coord;

/// A first-party provider row as fetched from the data layer.
///
/// # Examples
/// ```
/// use careatlas_core::{PlanTier, SubscriptionStatus};
/// use careatlas_search::ProviderRecord;
///
/// let record = ProviderRecord::new("loc-1", "Bright Steps ABA", "Edison", PlanTier::Pro)
///     .with_subscription(SubscriptionStatus::Active)
///     .with_coordinates(40.52, -74.41);
/// let listing = record.into_listing(None);
/// assert_eq!(listing.tier, PlanTier::Pro);
/// assert!(!listing.distance.is_known());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRecord {
    /// Location identifier.
    pub id: String,
    /// Agency display name.
    pub name: String,
    /// Optional marketing headline.
    pub headline: Option<String>,
    /// Optional listing summary.
    pub summary: Option<String>,
    /// City of this location.
    pub city: String,
    /// Latitude on record, if geocoded.
    pub latitude: Option<f64>,
    /// Longitude on record, if geocoded.
    pub longitude: Option<f64>,
    /// Plan tier as stored; may be downgraded by the subscription status.
    pub tier: PlanTier,
    /// Billing status of the owning account, when one exists.
    pub subscription: Option<SubscriptionStatus>,
    /// Whether the location holds a featured placement.
    pub is_featured: bool,
}

impl ProviderRecord {
    /// Construct a record with no optional fields set.
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
            latitude: None,
            longitude: None,
            tier,
            subscription: None,
            is_featured: false,
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

    /// Set the geocoded position while returning `self` for chaining.
    #[must_use]
    pub const fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Set the subscription status while returning `self` for chaining.
    #[must_use]
    pub const fn with_subscription(mut self, status: SubscriptionStatus) -> Self {
        self.subscription = Some(status);
        self
    }

    /// Mark the record as a featured placement.
    #[must_use]
    pub const fn featured(mut self) -> Self {
        self.is_featured = true;
        self
    }

    /// Resolve the record into a ranked-search listing.
    ///
    /// The stored tier downgrades to free unless the subscription entitles
    /// paid features, and the distance from `origin` is computed when both
    /// the origin and the record's coordinates are present.
    #[must_use]
    pub fn into_listing(self, origin: Option<Coord<f64>>) -> ProviderListing {
        let distance = resolve_distance(origin, self.latitude, self.longitude);
        let mut listing = ProviderListing::new(
            self.id,
            self.name,
            self.city,
            self.tier.effective(self.subscription),
        )
        .with_distance(distance);
        listing.headline = self.headline;
        listing.summary = self.summary;
        listing.is_featured = self.is_featured;
        listing
    }
}

/// A supplementary place row as fetched from the external provider.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceRecord {
    /// Identifier from the external data provider.
    pub id: String,
    /// Business display name.
    pub name: String,
    /// City of the place.
    pub city: String,
    /// Latitude on record, if any.
    pub latitude: Option<f64>,
    /// Longitude on record, if any.
    pub longitude: Option<f64>,
}

impl PlaceRecord {
    /// Construct a record with no coordinates.
    pub fn new(id: impl Into<String>, name: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            city: city.into(),
            latitude: None,
            longitude: None,
        }
    }

    /// Set the geocoded position while returning `self` for chaining.
    #[must_use]
    pub const fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = Some(latitude);
        self.longitude = Some(longitude);
        self
    }

    /// Resolve the record into a ranked-search listing.
    #[must_use]
    pub fn into_listing(self, origin: Option<Coord<f64>>) -> PlaceListing {
        let distance = resolve_distance(origin, self.latitude, self.longitude);
        PlaceListing::new(self.id, self.name, self.city).with_distance(distance)
    }
}

/// Normalize a record's searcher distance.
///
/// Absent origin or coordinates mean no distance; degenerate coordinates
/// that produce a non-finite mileage also normalize to unknown.
fn resolve_distance(
    origin: Option<Coord<f64>>,
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Distance {
    match (origin, latitude, longitude) {
        (Some(from), Some(lat), Some(lng)) => {
            Distance::miles(distance_miles(from, Coord { x: lng, y: lat }))
                .unwrap_or(Distance::unknown())
        }
        _ => Distance::unknown(),
    }
}
