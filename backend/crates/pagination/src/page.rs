//! Page envelope returned by list endpoints.

use serde::Serialize;

use crate::{PageRequest, Sort};

/// One slice of a result set plus the metadata clients need to navigate it.
///
/// Serialises with camelCase keys: `content`, `totalElements`, `totalPages`,
/// `number`, `size`, `numberOfElements`, `first`, `last`, `empty`, `sort`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    content: Vec<T>,
    total_elements: u64,
    total_pages: u64,
    number: u32,
    size: u32,
    number_of_elements: usize,
    first: bool,
    last: bool,
    empty: bool,
    sort: Sort,
}

impl<T> Page<T> {
    /// Assemble a page from its content, the request that produced it, and
    /// the total number of elements across all pages.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Page, PageRequest};
    ///
    /// let request = PageRequest::new(0, 10)?;
    /// let page: Page<u8> = Page::new(Vec::new(), &request, 0);
    /// assert!(page.is_empty());
    /// assert_eq!(page.total_pages(), 0);
    /// assert!(page.is_first() && page.is_last());
    /// # Ok::<(), pagination::PaginationError>(())
    /// ```
    #[must_use]
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: u64) -> Self {
        let total_pages = total_elements.div_ceil(u64::from(request.size()));
        let number = request.page();
        Self {
            number_of_elements: content.len(),
            empty: content.is_empty(),
            content,
            total_elements,
            total_pages,
            number,
            size: request.size(),
            first: number == 0,
            last: u64::from(number) + 1 >= total_pages,
            sort: request.sort().clone(),
        }
    }

    /// Convert every element, keeping the paging metadata.
    ///
    /// # Examples
    /// ```
    /// use pagination::{Page, PageRequest};
    ///
    /// let request = PageRequest::new(0, 2)?;
    /// let page = Page::new(vec![1, 2], &request, 3).map(|n| n * 10);
    /// assert_eq!(page.content(), &[10, 20]);
    /// assert_eq!(page.total_elements(), 3);
    /// # Ok::<(), pagination::PaginationError>(())
    /// ```
    #[must_use]
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
            number_of_elements: self.number_of_elements,
            first: self.first,
            last: self.last,
            empty: self.empty,
            sort: self.sort,
        }
    }

    /// Elements on this page.
    #[must_use]
    pub fn content(&self) -> &[T] {
        &self.content
    }

    /// Number of elements across all pages.
    #[must_use]
    pub const fn total_elements(&self) -> u64 {
        self.total_elements
    }

    /// Number of pages at the requested size.
    #[must_use]
    pub const fn total_pages(&self) -> u64 {
        self.total_pages
    }

    /// Zero-based index of this page.
    #[must_use]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Requested page size.
    #[must_use]
    pub const fn size(&self) -> u32 {
        self.size
    }

    /// Sort that produced this page.
    #[must_use]
    pub const fn sort(&self) -> &Sort {
        &self.sort
    }

    /// Whether this is the first page.
    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.first
    }

    /// Whether no page follows this one.
    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.last
    }

    /// Whether the page carries no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.empty
    }
}
