//! Location management backend library.
//!
//! Layout follows a hexagonal split:
//! - [`domain`]: location model, use-case ports, and the service implementing them.
//! - [`inbound`]: HTTP adapter (actix-web handlers, DTOs, error rendering).
//! - [`outbound`]: repository adapters (PostgreSQL via Diesel, in-memory).
//! - [`middleware`]: request-scoped trace identifiers.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
