//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every location endpoint, the health checks, and the
//! payload schemas. The paging envelope is described through wrapper types in
//! [`crate::inbound::http::schemas`] so the `pagination` crate stays free of
//! utoipa.
//!
//! The generated specification is served by Swagger UI (debug builds) and
//! exported via `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::error::ErrorBody;
use crate::inbound::http::location_dto::{LocationRequest, LocationResponse};
use crate::inbound::http::schemas::{DirectionSchema, LocationPageSchema, OrderSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
/// Swagger UI is enabled in debug builds only and used by tooling.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Location management API",
        description = "Create, read, update, delete, and page through named locations."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::locations::create_location,
        crate::inbound::http::locations::list_locations,
        crate::inbound::http::locations::get_location,
        crate::inbound::http::locations::update_location,
        crate::inbound::http::locations::delete_location,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        LocationRequest,
        LocationResponse,
        LocationPageSchema,
        OrderSchema,
        DirectionSchema,
        ErrorBody
    )),
    tags(
        (name = "locations", description = "Location records"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
