//! Errors raised while interpreting pagination input.

use thiserror::Error;

/// Failures produced when a page request cannot be built from caller input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaginationError {
    /// The requested page index was negative.
    #[error("Page number must be 0 or greater.")]
    NegativePage,
    /// The requested page index does not fit in 32 bits.
    #[error("Page number must be {max} or less.", max = u32::MAX)]
    PageTooLarge,
    /// The requested page size was zero or negative.
    #[error("Page size must be 1 or greater.")]
    SizeTooSmall,
    /// A numeric parameter could not be parsed.
    #[error("{parameter} must be a whole number, got '{value}'")]
    NotANumber {
        /// Query parameter that failed to parse.
        parameter: &'static str,
        /// Raw value supplied by the caller.
        value: String,
    },
    /// A sort direction other than `asc` or `desc` was supplied.
    #[error("sort direction must be 'asc' or 'desc', got '{value}'")]
    InvalidDirection {
        /// Raw direction supplied by the caller.
        value: String,
    },
}

impl PaginationError {
    /// Name of the query parameter the error refers to.
    ///
    /// # Examples
    /// ```
    /// use pagination::PaginationError;
    ///
    /// assert_eq!(PaginationError::SizeTooSmall.parameter(), "size");
    /// ```
    #[must_use]
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::NegativePage | Self::PageTooLarge => "page",
            Self::SizeTooSmall => "size",
            Self::NotANumber { parameter, .. } => parameter,
            Self::InvalidDirection { .. } => "sort",
        }
    }
}
