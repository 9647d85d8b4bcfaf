//! Slice an ordered result list into fixed-size pages.
//!
//! Pagination happens after ranking and sectioning so that featured and
//! paid placements hold their position across every page.

use thiserror::Error;

/// A validated pagination request: 1-based page number and positive page
/// size.
///
/// # Examples
/// ```
/// use careatlas_core::PageRequest;
///
/// # fn main() -> Result<(), careatlas_core::PageError> {
/// let request = PageRequest::new(2, 50)?;
/// assert_eq!(request.offset(), 50);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    page: usize,
    limit: usize,
}

/// Errors returned by [`PageRequest::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageError {
    /// Page numbers are 1-based; zero was supplied.
    #[error("page numbers are 1-based; got 0")]
    ZeroPage,
    /// A page must hold at least one item.
    #[error("page size must be positive")]
    ZeroLimit,
}

impl PageRequest {
    /// Validates and constructs a pagination request.
    ///
    /// # Errors
    /// Returns [`PageError`] when `page` or `limit` is zero.
    pub const fn new(page: usize, limit: usize) -> Result<Self, PageError> {
        if page == 0 {
            return Err(PageError::ZeroPage);
        }
        if limit == 0 {
            return Err(PageError::ZeroLimit);
        }
        Ok(Self { page, limit })
    }

    /// The requested 1-based page number.
    #[must_use]
    pub const fn page(self) -> usize {
        self.page
    }

    /// The requested page size.
    #[must_use]
    pub const fn limit(self) -> usize {
        self.limit
    }

    /// Index of the first item on the requested page.
    #[must_use]
    pub const fn offset(self) -> usize {
        (self.page - 1).saturating_mul(self.limit)
    }
}

/// One page of an ordered result list, with pagination metadata.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Page<T> {
    /// Items on this page, in overall result order.
    pub items: Vec<T>,
    /// Length of the full result list.
    pub total: usize,
    /// The 1-based page number that was requested.
    pub page: usize,
    /// Number of pages the full list spans; zero when the list is empty.
    pub total_pages: usize,
    /// Whether pages exist after this one.
    pub has_more: bool,
}

/// Slice `items` into the requested page.
///
/// A page past the end of the list yields an empty page with correct
/// `total` and `total_pages`.
///
/// # Examples
/// ```
/// use careatlas_core::{PageRequest, paginate};
///
/// # fn main() -> Result<(), careatlas_core::PageError> {
/// let page = paginate((0..100).collect::<Vec<_>>(), PageRequest::new(2, 50)?);
/// assert_eq!(page.items.first(), Some(&50));
/// assert_eq!(page.total_pages, 2);
/// assert!(!page.has_more);
/// # Ok(())
/// # }
/// ```
#[must_use]
pub fn paginate<T>(items: Vec<T>, request: PageRequest) -> Page<T> {
    let total = items.len();
    let total_pages = total.div_ceil(request.limit());
    let paged: Vec<T> = items
        .into_iter()
        .skip(request.offset())
        .take(request.limit())
        .collect();
    Page {
        items: paged,
        total,
        page: request.page(),
        total_pages,
        has_more: request.page() < total_pages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn zero_page_is_rejected() {
        assert_eq!(PageRequest::new(0, 50), Err(PageError::ZeroPage));
    }

    #[rstest]
    fn zero_limit_is_rejected() {
        assert_eq!(PageRequest::new(1, 0), Err(PageError::ZeroLimit));
    }

    #[rstest]
    #[case(1, 50, 0)]
    #[case(2, 50, 50)]
    #[case(3, 20, 40)]
    fn offset_is_zero_based(#[case] page: usize, #[case] limit: usize, #[case] expected: usize) {
        let request = PageRequest::new(page, limit).expect("valid request");
        assert_eq!(request.offset(), expected);
    }

    #[rstest]
    fn partial_last_page_keeps_metadata() {
        let request = PageRequest::new(2, 50).expect("valid request");
        let page = paginate((0..75).collect::<Vec<_>>(), request);
        assert_eq!(page.items.len(), 25);
        assert_eq!(page.items.first(), Some(&50));
        assert_eq!(page.total, 75);
        assert_eq!(page.total_pages, 2);
        assert!(!page.has_more);
    }

    #[rstest]
    fn page_past_the_end_is_empty_with_correct_totals() {
        let request = PageRequest::new(5, 50).expect("valid request");
        let page = paginate((0..50).collect::<Vec<_>>(), request);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 50);
        assert_eq!(page.total_pages, 1);
        assert!(!page.has_more);
    }

    #[rstest]
    fn empty_input_yields_zero_pages() {
        let request = PageRequest::new(1, 50).expect("valid request");
        let page = paginate(Vec::<u8>::new(), request);
        assert!(page.items.is_empty());
        assert_eq!(page.total, 0);
        assert_eq!(page.total_pages, 0);
        assert!(!page.has_more);
    }
}
