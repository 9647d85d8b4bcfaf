//! Normalized searcher-to-listing distances and search radii.
//!
//! A candidate's distance from the searcher is either known in miles or
//! unknown (no coordinates on record, or no search origin supplied). The
//! normalization happens once, here, at construction: an unknown distance
//! orders after every known one, so comparison sites never repeat an
//! "absent means infinity" conversion.

use std::cmp::Ordering;

use thiserror::Error;

/// Distance between the searcher and a candidate listing.
///
/// Known distances are finite, non-negative miles. Ordering is total:
/// known distances compare by value and an unknown distance sorts last.
///
/// # Examples
/// ```
/// use careatlas_core::Distance;
///
/// # fn main() -> Result<(), careatlas_core::DistanceError> {
/// let near = Distance::miles(5.0)?;
/// let far = Distance::miles(60.0)?;
/// assert!(near < far);
/// assert!(far < Distance::unknown());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Distance(Option<f64>);

/// Errors returned by [`Distance::miles`].
#[derive(Debug, Error, PartialEq)]
pub enum DistanceError {
    /// The supplied mileage was negative.
    #[error("distance must be non-negative, got {miles}")]
    Negative {
        /// Value rejected by the constructor.
        miles: f64,
    },
    /// The supplied mileage was NaN or infinite.
    #[error("distance must be finite, got {miles}")]
    NotFinite {
        /// Value rejected by the constructor.
        miles: f64,
    },
}

impl Distance {
    /// Validates and constructs a known distance.
    ///
    /// # Errors
    /// Returns [`DistanceError`] when `miles` is negative, NaN, or infinite.
    pub fn miles(miles: f64) -> Result<Self, DistanceError> {
        if !miles.is_finite() {
            return Err(DistanceError::NotFinite { miles });
        }
        if miles < 0.0 {
            return Err(DistanceError::Negative { miles });
        }
        Ok(Self(Some(miles)))
    }

    /// Constructs the unknown distance.
    ///
    /// # Examples
    /// ```
    /// use careatlas_core::Distance;
    ///
    /// assert!(Distance::unknown().known_miles().is_none());
    /// ```
    #[must_use]
    pub const fn unknown() -> Self {
        Self(None)
    }

    /// Returns the mileage when known.
    #[must_use]
    pub const fn known_miles(self) -> Option<f64> {
        self.0
    }

    /// Reports whether a mileage is on record.
    #[must_use]
    pub const fn is_known(self) -> bool {
        self.0.is_some()
    }
}

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

// Known values are finite by construction, so `total_cmp` yields a
// consistent total order and `Eq` is sound.
impl Eq for Distance {}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Distance {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

/// A nearby-section radius threshold in miles.
///
/// Membership is inclusive: a known distance equal to the radius is nearby.
/// An unknown distance is never nearby.
///
/// # Examples
/// ```
/// use careatlas_core::{Distance, SearchRadius};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let radius = SearchRadius::miles(25.0)?;
/// assert!(radius.contains(Distance::miles(25.0)?));
/// assert!(!radius.contains(Distance::miles(25.1)?));
/// assert!(!radius.contains(Distance::unknown()));
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchRadius(f64);

/// Errors returned by [`SearchRadius::miles`].
#[derive(Debug, Error, PartialEq)]
pub enum RadiusError {
    /// The supplied radius was negative.
    #[error("search radius must be non-negative, got {miles}")]
    Negative {
        /// Value rejected by the constructor.
        miles: f64,
    },
    /// The supplied radius was NaN or infinite.
    #[error("search radius must be finite, got {miles}")]
    NotFinite {
        /// Value rejected by the constructor.
        miles: f64,
    },
}

impl SearchRadius {
    /// Validates and constructs a radius.
    ///
    /// A radius of zero is permitted; only exact-distance-zero candidates
    /// then qualify as nearby.
    ///
    /// # Errors
    /// Returns [`RadiusError`] when `miles` is negative, NaN, or infinite.
    pub fn miles(miles: f64) -> Result<Self, RadiusError> {
        if !miles.is_finite() {
            return Err(RadiusError::NotFinite { miles });
        }
        if miles < 0.0 {
            return Err(RadiusError::Negative { miles });
        }
        Ok(Self(miles))
    }

    /// Returns the radius in miles.
    #[must_use]
    pub const fn as_miles(self) -> f64 {
        self.0
    }

    /// Reports whether a distance falls within the radius (inclusive).
    #[must_use]
    pub fn contains(self, distance: Distance) -> bool {
        distance.known_miles().is_some_and(|miles| miles <= self.0)
    }
}
