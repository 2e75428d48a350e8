//! Location HTTP handlers.
//!
//! ```text
//! POST   /api/locations
//! GET    /api/locations
//! GET    /api/locations/{id}
//! PUT    /api/locations/{id}
//! DELETE /api/locations/{id}
//! ```

use actix_web::{HttpRequest, HttpResponse, delete, get, post, put, web};

use crate::domain::{LocationDraft, LocationId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::{
    ErrorBody, WithRequestPath, json_error_handler, path_error_handler,
};
use crate::inbound::http::location_dto::{LocationRequest, LocationResponse, location_page};
use crate::inbound::http::schemas::LocationPageSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_page_request;

/// Base path of the location resource.
pub const LOCATIONS_PATH: &str = "/api/locations";

fn deleted_message(id: LocationId) -> String {
    format!("Location with ID {id} deleted successfully!")
}

/// Create a location.
#[utoipa::path(
    post,
    path = "/api/locations",
    request_body = LocationRequest,
    responses(
        (status = 201, description = "Location created", body = LocationResponse),
        (status = 400, description = "Blank field or malformed body", body = ErrorBody),
        (status = 503, description = "Location store unavailable", body = ErrorBody)
    ),
    tags = ["locations"],
    operation_id = "createLocation"
)]
#[post("")]
pub async fn create_location(
    state: web::Data<HttpState>,
    request: HttpRequest,
    payload: web::Json<LocationRequest>,
) -> ApiResult<HttpResponse> {
    let draft = LocationDraft::try_from(payload.into_inner()).at(&request)?;
    let location = state.locations.create(draft).await.at(&request)?;
    Ok(HttpResponse::Created().json(LocationResponse::from(location)))
}

/// List locations one page at a time.
#[utoipa::path(
    get,
    path = "/api/locations",
    params(
        ("page" = Option<u32>, Query, description = "Zero-based page index", example = 0),
        ("size" = Option<u32>, Query, description = "Page size, at most 2000", example = 20),
        (
            "sort" = Option<Vec<String>>,
            Query,
            description = "Repeatable `property[,asc|desc]`; defaults to `createdAt,asc`",
            example = json!(["name,desc"])
        )
    ),
    responses(
        (status = 200, description = "One page of locations", body = LocationPageSchema),
        (status = 400, description = "Invalid paging or sort", body = ErrorBody)
    ),
    tags = ["locations"],
    operation_id = "listLocations"
)]
#[get("")]
pub async fn list_locations(
    state: web::Data<HttpState>,
    request: HttpRequest,
) -> ApiResult<HttpResponse> {
    let page_request = parse_page_request(request.query_string()).at(&request)?;
    let page = state
        .locations_query
        .list(page_request)
        .await
        .at(&request)?;
    Ok(HttpResponse::Ok().json(location_page(page)))
}

/// Fetch one location.
#[utoipa::path(
    get,
    path = "/api/locations/{id}",
    params(("id" = i64, Path, description = "Location identifier")),
    responses(
        (status = 200, description = "Location", body = LocationResponse),
        (status = 400, description = "Non-numeric identifier", body = ErrorBody),
        (status = 404, description = "No location with this identifier", body = ErrorBody)
    ),
    tags = ["locations"],
    operation_id = "getLocation"
)]
#[get("/{id}")]
pub async fn get_location(
    state: web::Data<HttpState>,
    request: HttpRequest,
    path: web::Path<i64>,
) -> ApiResult<web::Json<LocationResponse>> {
    let id = LocationId::new(path.into_inner());
    let location = state.locations_query.get(id).await.at(&request)?;
    Ok(web::Json(LocationResponse::from(location)))
}

/// Overwrite the fields of an existing location.
#[utoipa::path(
    put,
    path = "/api/locations/{id}",
    params(("id" = i64, Path, description = "Location identifier")),
    request_body = LocationRequest,
    responses(
        (status = 200, description = "Updated location", body = LocationResponse),
        (status = 400, description = "Blank field or malformed body", body = ErrorBody),
        (status = 404, description = "No location with this identifier", body = ErrorBody)
    ),
    tags = ["locations"],
    operation_id = "updateLocation"
)]
#[put("/{id}")]
pub async fn update_location(
    state: web::Data<HttpState>,
    request: HttpRequest,
    path: web::Path<i64>,
    payload: web::Json<LocationRequest>,
) -> ApiResult<web::Json<LocationResponse>> {
    let id = LocationId::new(path.into_inner());
    let draft = LocationDraft::try_from(payload.into_inner()).at(&request)?;
    let location = state.locations.update(id, draft).await.at(&request)?;
    Ok(web::Json(LocationResponse::from(location)))
}

/// Delete a location.
#[utoipa::path(
    delete,
    path = "/api/locations/{id}",
    params(("id" = i64, Path, description = "Location identifier")),
    responses(
        (
            status = 200,
            description = "Confirmation message",
            body = String,
            content_type = "text/plain",
            example = json!("Location with ID 1 deleted successfully!")
        ),
        (status = 404, description = "No location with this identifier", body = ErrorBody)
    ),
    tags = ["locations"],
    operation_id = "deleteLocation"
)]
#[delete("/{id}")]
pub async fn delete_location(
    state: web::Data<HttpState>,
    request: HttpRequest,
    path: web::Path<i64>,
) -> ApiResult<HttpResponse> {
    let id = LocationId::new(path.into_inner());
    state.locations.delete(id).await.at(&request)?;
    Ok(HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(deleted_message(id)))
}

/// Register the location resource with its extractor error handlers.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope(LOCATIONS_PATH)
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::PathConfig::default().error_handler(path_error_handler))
            .service(create_location)
            .service(list_locations)
            .service(get_location)
            .service(update_location)
            .service(delete_location),
    );
}

#[cfg(test)]
#[path = "locations_tests.rs"]
mod tests;
