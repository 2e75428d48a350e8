//! Page requests parsed from query strings.

use std::num::IntErrorKind;

use url::form_urlencoded;

use crate::{Order, PaginationError, Sort};

/// Page size used when the caller does not supply one.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Largest page size honoured; bigger requests are clamped to this value.
pub const MAX_PAGE_SIZE: u32 = 2000;

/// Zero-based page index, page size, and requested sort.
///
/// ## Invariants
/// - `size` is between 1 and [`MAX_PAGE_SIZE`] inclusive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    page: u32,
    size: u32,
    sort: Sort,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort: Sort::unsorted(),
        }
    }
}

impl PageRequest {
    /// Build an unsorted request, clamping `size` to [`MAX_PAGE_SIZE`].
    ///
    /// # Errors
    /// Returns [`PaginationError::SizeTooSmall`] when `size` is zero.
    ///
    /// # Examples
    /// ```
    /// use pagination::{MAX_PAGE_SIZE, PageRequest};
    ///
    /// let request = PageRequest::new(3, 10_000)?;
    /// assert_eq!(request.size(), MAX_PAGE_SIZE);
    /// assert!(PageRequest::new(0, 0).is_err());
    /// # Ok::<(), pagination::PaginationError>(())
    /// ```
    pub fn new(page: u32, size: u32) -> Result<Self, PaginationError> {
        if size == 0 {
            return Err(PaginationError::SizeTooSmall);
        }
        Ok(Self {
            page,
            size: size.min(MAX_PAGE_SIZE),
            sort: Sort::unsorted(),
        })
    }

    /// Replace the requested sort.
    #[must_use]
    pub fn with_sort(mut self, sort: Sort) -> Self {
        self.sort = sort;
        self
    }

    /// Parse `page`, `size`, and repeated `sort` parameters from a raw query
    /// string. Unrelated parameters are ignored; absent ones take defaults.
    ///
    /// # Errors
    /// Returns [`PaginationError`] when `page` is negative or beyond
    /// `u32::MAX`, `size` is below one, or either is not a whole number.
    /// Sizes above [`MAX_PAGE_SIZE`] are clamped rather than rejected.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Order, PageRequest};
    ///
    /// let request = PageRequest::from_query("sort=name&sort=city%2Cdesc&size=5")?;
    /// assert_eq!(request.page(), 0);
    /// assert_eq!(request.size(), 5);
    /// assert_eq!(
    ///     request.sort().orders(),
    ///     &[Order::asc("name"), Order::desc("city")]
    /// );
    /// # Ok::<(), pagination::PaginationError>(())
    /// ```
    pub fn from_query(query: &str) -> Result<Self, PaginationError> {
        let mut page = None;
        let mut size = None;
        let mut sort = Sort::unsorted();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                "page" => page = Some(parse_page(&value)?),
                "size" => size = Some(parse_size(&value)?),
                "sort" => sort.extend(Order::parse_all(&value)),
                _ => {}
            }
        }

        Ok(Self::new(page.unwrap_or(0), size.unwrap_or(DEFAULT_PAGE_SIZE))?.with_sort(sort))
    }

    /// Zero-based page index.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Maximum number of elements on the page.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Requested sort; may be unsorted.
    #[must_use]
    pub const fn sort(&self) -> &Sort {
        &self.sort
    }

    /// Number of elements preceding the first element of this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page) * u64::from(self.size)
    }
}

/// Parse a whole number, saturating values beyond the `i64` range.
fn parse_whole(parameter: &'static str, value: &str) -> Result<i64, PaginationError> {
    match value.trim().parse::<i64>() {
        Ok(number) => Ok(number),
        Err(err) => match err.kind() {
            IntErrorKind::PosOverflow => Ok(i64::MAX),
            IntErrorKind::NegOverflow => Ok(i64::MIN),
            _ => Err(PaginationError::NotANumber {
                parameter,
                value: value.to_owned(),
            }),
        },
    }
}

fn parse_page(value: &str) -> Result<u32, PaginationError> {
    let page = parse_whole("page", value)?;
    if page < 0 {
        return Err(PaginationError::NegativePage);
    }
    u32::try_from(page).map_err(|_| PaginationError::PageTooLarge)
}

fn parse_size(value: &str) -> Result<u32, PaginationError> {
    let size = parse_whole("size", value)?;
    if size < 1 {
        return Err(PaginationError::SizeTooSmall);
    }
    Ok(u32::try_from(size).unwrap_or(MAX_PAGE_SIZE))
}
