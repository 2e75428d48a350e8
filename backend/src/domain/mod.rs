//! Domain primitives, services, and ports.
//!
//! Purpose: hold the location model and its use-cases independent of HTTP and
//! storage. Adapters under `inbound` and `outbound` depend on this module,
//! never the reverse.
//!
//! Public surface:
//! - [`Location`], [`LocationDraft`], [`LocationId`], [`NewLocation`]: the
//!   record, its validated write input, and its identifier.
//! - [`LocationListQuery`] and friends: typed sort keys for listings.
//! - [`LocationService`]: implementation of the driving ports.
//! - [`Error`] and [`ErrorCode`]: transport-agnostic failures.
//! - [`TraceId`]: request correlation identifier.

pub mod error;
pub mod location;
pub mod location_service;
pub mod location_sort;
pub mod ports;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::location::{
    Location, LocationDraft, LocationField, LocationId, LocationValidationError, NewLocation,
};
pub use self::location_service::LocationService;
pub use self::location_sort::{
    LocationListQuery, LocationOrder, LocationSortKey, UnknownSortProperty,
};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
