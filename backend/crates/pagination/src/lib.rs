//! Offset pagination primitives shared by backend list endpoints.
//!
//! The crate models the three pieces every paged listing needs:
//!
//! - [`PageRequest`]: zero-based page index, page size, and requested
//!   [`Sort`], parsed from `page`, `size`, and repeated `sort` query
//!   parameters.
//! - [`Sort`] and [`Order`]: ordered sort keys with an ascending or
//!   descending [`Direction`].
//! - [`Page`]: the response envelope carrying one slice of content together
//!   with the total element count and derived paging metadata.
//!
//! Storage concerns stay with the caller: adapters translate the requested
//! orders into their own query language and report the total count.
//!
//! # Example
//!
//! ```
//! use pagination::{Direction, Page, PageRequest};
//!
//! let request = PageRequest::from_query("page=1&size=2&sort=name,desc")?;
//! assert_eq!(request.offset(), 2);
//! assert_eq!(request.sort().orders()[0].direction(), Direction::Desc);
//!
//! let page = Page::new(vec!["c", "d"], &request, 5);
//! assert_eq!(page.total_pages(), 3);
//! assert!(!page.is_last());
//! # Ok::<(), pagination::PaginationError>(())
//! ```

mod error;
mod page;
mod request;
mod sort;

pub use error::PaginationError;
pub use page::Page;
pub use request::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageRequest};
pub use sort::{Direction, Order, Sort};
