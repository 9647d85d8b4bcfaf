//! Search query parameters with directory defaults.

use geo::Coord;

/// Radius used when the caller does not supply one, in miles.
pub const DEFAULT_RADIUS_MILES: f64 = 25.0;

/// Results per page when the caller does not supply a limit.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Parameters of one combined search, typically derived from request query
/// strings by the calling layer.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use careatlas_search::SearchQuery;
///
/// let query = SearchQuery::new()
///     .with_text("aba")
///     .with_origin(Coord { x: -74.41, y: 40.52 })
///     .with_page(2);
/// assert_eq!(query.page, 2);
/// assert_eq!(query.radius_miles, careatlas_search::DEFAULT_RADIUS_MILES);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    /// Free-text needle matched against listing names and copy.
    pub text: Option<String>,
    /// Searcher coordinates; absent for state-wide searches.
    pub origin: Option<Coord<f64>>,
    /// Nearby-section radius in miles.
    pub radius_miles: f64,
    /// 1-based page number.
    pub page: usize,
    /// Results per page.
    pub limit: usize,
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self {
            text: None,
            origin: None,
            radius_miles: DEFAULT_RADIUS_MILES,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SearchQuery {
    /// Construct a query with directory defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text filter while returning `self` for chaining.
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Set the searcher origin while returning `self` for chaining.
    #[must_use]
    pub const fn with_origin(mut self, origin: Coord<f64>) -> Self {
        self.origin = Some(origin);
        self
    }

    /// Set the nearby radius while returning `self` for chaining.
    #[must_use]
    pub const fn with_radius_miles(mut self, radius_miles: f64) -> Self {
        self.radius_miles = radius_miles;
        self
    }

    /// Set the page number while returning `self` for chaining.
    #[must_use]
    pub const fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the page size while returning `self` for chaining.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}
