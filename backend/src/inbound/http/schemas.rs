//! OpenAPI schema definitions for paging types.
//!
//! The `pagination` crate stays free of utoipa, so the page envelope and its
//! sort entries are described here with wrapper types that mirror their
//! serialised shape.

use utoipa::ToSchema;

use crate::inbound::http::location_dto::LocationResponse;

/// OpenAPI schema for [`pagination::Direction`].
#[derive(ToSchema)]
#[schema(as = SortDirection)]
pub enum DirectionSchema {
    /// Smallest values first.
    #[schema(rename = "ASC")]
    Asc,
    /// Largest values first.
    #[schema(rename = "DESC")]
    Desc,
}

/// OpenAPI schema for [`pagination::Order`].
#[derive(ToSchema)]
#[schema(as = SortOrder)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct OrderSchema {
    /// Location property the order applies to.
    #[schema(example = "createdAt")]
    property: String,
    /// Direction of the order.
    direction: DirectionSchema,
}

/// OpenAPI schema for [`pagination::Page`] of [`LocationResponse`].
///
/// One page of locations plus navigation metadata.
#[derive(ToSchema)]
#[schema(as = LocationPage, rename_all = "camelCase")]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct LocationPageSchema {
    /// Locations on this page.
    content: Vec<LocationResponse>,
    /// Number of locations across all pages.
    #[schema(example = 42)]
    total_elements: u64,
    /// Number of pages at the requested size.
    #[schema(example = 3)]
    total_pages: u64,
    /// Zero-based index of this page.
    #[schema(example = 0)]
    number: u32,
    /// Requested page size.
    #[schema(example = 20)]
    size: u32,
    /// Number of locations on this page.
    #[schema(example = 20)]
    number_of_elements: u32,
    /// Whether this is the first page.
    first: bool,
    /// Whether this is the last page.
    last: bool,
    /// Whether this page has no content.
    empty: bool,
    /// Sort applied to the listing.
    sort: Vec<OrderSchema>,
}
