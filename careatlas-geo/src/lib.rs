//! Great-circle distance utilities for proximity search.
//!
//! Coordinates are WGS84 `geo::Coord` values with `x = longitude` and
//! `y = latitude`. Distances are haversine miles, which is accurate to
//! well under a percent at the scale of a state-wide provider search.

#![forbid(unsafe_code)]

use geo::Coord;

/// Mean Earth radius in miles, as used by the haversine formula.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Approximate miles spanned by one degree of latitude.
const MILES_PER_DEGREE_LAT: f64 = 69.0;

/// Haversine distance between two coordinates, in miles.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use careatlas_geo::distance_miles;
///
/// let los_angeles = Coord { x: -118.2437, y: 34.0522 };
/// let new_york = Coord { x: -74.0060, y: 40.7128 };
/// let miles = distance_miles(los_angeles, new_york);
/// assert!((miles - 2_445.0).abs() < 10.0);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "haversine is inherently floating-point"
)]
pub fn distance_miles(a: Coord<f64>, b: Coord<f64>) -> f64 {
    let lat_a = a.y.to_radians();
    let lat_b = b.y.to_radians();
    let delta_lat = (b.y - a.y).to_radians();
    let delta_lng = (b.x - a.x).to_radians();

    let half_chord = (delta_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (delta_lng / 2.0).sin().powi(2);
    let central_angle = 2.0 * half_chord.sqrt().atan2((1.0 - half_chord).sqrt());

    EARTH_RADIUS_MILES * central_angle
}

/// Reports whether `point` lies within `radius_miles` of `center`
/// (inclusive).
#[must_use]
pub fn within_radius(center: Coord<f64>, point: Coord<f64>, radius_miles: f64) -> bool {
    distance_miles(center, point) <= radius_miles
}

/// An axis-aligned coordinate box around a search center.
///
/// Useful as a cheap database pre-filter before exact distance checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Southern latitude bound.
    pub min_lat: f64,
    /// Northern latitude bound.
    pub max_lat: f64,
    /// Western longitude bound.
    pub min_lng: f64,
    /// Eastern longitude bound.
    pub max_lng: f64,
}

/// Approximate bounding box for a center and radius.
///
/// The latitude delta uses a flat miles-per-degree figure; the longitude
/// delta widens toward the poles with `cos(latitude)`.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use careatlas_geo::bounding_box;
///
/// let edison = Coord { x: -74.41, y: 40.52 };
/// let bbox = bounding_box(edison, 25.0);
/// assert!(bbox.min_lat < 40.52 && 40.52 < bbox.max_lat);
/// assert!(bbox.min_lng < -74.41 && -74.41 < bbox.max_lng);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "degree-per-mile conversion is inherently floating-point"
)]
pub fn bounding_box(center: Coord<f64>, radius_miles: f64) -> BoundingBox {
    let lat_delta = radius_miles / MILES_PER_DEGREE_LAT;
    let lng_delta = radius_miles / (MILES_PER_DEGREE_LAT * center.y.to_radians().cos());

    BoundingBox {
        min_lat: center.y - lat_delta,
        max_lat: center.y + lat_delta,
        min_lng: center.x - lng_delta,
        max_lng: center.x + lng_delta,
    }
}

/// Format a distance for result cards.
///
/// # Examples
/// ```
/// use careatlas_geo::format_distance;
///
/// assert_eq!(format_distance(0.05), "< 0.1 mi");
/// assert_eq!(format_distance(3.25), "3.2 mi");
/// assert_eq!(format_distance(42.6), "43 mi");
/// ```
#[must_use]
pub fn format_distance(miles: f64) -> String {
    if miles < 0.1 {
        "< 0.1 mi".to_owned()
    } else if miles < 10.0 {
        format!("{miles:.1} mi")
    } else {
        format!("{} mi", miles.round())
    }
}
