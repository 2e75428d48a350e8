//! Shared validation helpers for inbound HTTP adapters.
//!
//! Each helper turns a parsing failure into an invalid-request [`Error`] whose
//! details name the offending field and a stable code.

use pagination::{PageRequest, PaginationError};
use serde_json::json;

use crate::domain::{Error, LocationValidationError};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    BlankField,
    InvalidPagination,
}

impl ErrorCode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::BlankField => "blank_field",
            Self::InvalidPagination => "invalid_pagination",
        }
    }
}

fn field_error(message: String, field: &str, code: ErrorCode) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field,
        "code": code.as_str(),
    }))
}

pub(crate) fn location_validation_error(error: &LocationValidationError) -> Error {
    match error {
        LocationValidationError::Blank { field } => {
            field_error(error.to_string(), field.as_str(), ErrorCode::BlankField)
        }
    }
}

pub(crate) fn pagination_error(error: &PaginationError) -> Error {
    field_error(
        error.to_string(),
        error.parameter(),
        ErrorCode::InvalidPagination,
    )
}

/// Parse `page`, `size`, and `sort` from a raw query string.
pub(crate) fn parse_page_request(query: &str) -> Result<PageRequest, Error> {
    PageRequest::from_query(query).map_err(|err| pagination_error(&err))
}
