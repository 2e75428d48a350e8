//! Tests for HTTP error mapping.

use super::*;
use actix_web::body::to_bytes;
use actix_web::test::TestRequest;
use rstest::{fixture, rstest};
use serde_json::json;

const TRACE_ID: &str = "00000000-0000-0000-0000-000000000000";
const PATH: &str = "/api/locations/42";

#[fixture]
fn internal_error() -> ApiError {
    ApiError::new(
        Error::internal("connection string leaked")
            .with_trace_id(TRACE_ID)
            .with_details(json!({ "secret": "x" })),
        PATH,
    )
}

async fn render(error: &ApiError) -> (StatusCode, Option<String>, ErrorBody) {
    let response = error.error_response();
    let status = response.status();
    let trace_id = response
        .headers()
        .get(TRACE_ID_HEADER)
        .map(|value| value.to_str().expect("ascii header").to_owned());
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body = serde_json::from_slice(&bytes).expect("error body deserialises");
    (status, trace_id, body)
}

#[rstest]
#[case(ErrorCode::InvalidRequest, StatusCode::BAD_REQUEST)]
#[case(ErrorCode::NotFound, StatusCode::NOT_FOUND)]
#[case(ErrorCode::ServiceUnavailable, StatusCode::SERVICE_UNAVAILABLE)]
#[case(ErrorCode::InternalError, StatusCode::INTERNAL_SERVER_ERROR)]
fn status_code_matches_error_code(#[case] code: ErrorCode, #[case] expected: StatusCode) {
    let error = ApiError::new(Error::new(code, "message"), PATH);
    assert_eq!(error.status_code(), expected);
}

#[rstest]
#[actix_web::test]
async fn not_found_body_carries_status_reason_message_and_path() {
    let error = ApiError::new(
        Error::not_found("Location is not exists with given id: 42").with_trace_id(TRACE_ID),
        PATH,
    );

    let (status, trace_id, body) = render(&error).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(trace_id.as_deref(), Some(TRACE_ID));
    assert_eq!(body.status, 404);
    assert_eq!(body.error, "Not Found");
    assert_eq!(body.message, "Location is not exists with given id: 42");
    assert_eq!(body.path, PATH);
}

#[rstest]
#[actix_web::test]
async fn internal_errors_are_redacted(internal_error: ApiError) {
    let (status, _, body) = render(&internal_error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body.error, "Internal Server Error");
    assert_eq!(body.message, "Internal server error");
}

#[rstest]
#[actix_web::test]
async fn error_without_trace_id_omits_header() {
    let error = ApiError::new(Error::invalid_request("bad"), PATH);
    let (status, trace_id, body) = render(&error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(trace_id.is_none());
    assert_eq!(body.error, "Bad Request");
}

#[rstest]
#[actix_web::test]
async fn with_request_path_uses_the_request_path() {
    let req = TestRequest::get().uri("/api/locations/7?x=1").to_http_request();
    let result: Result<(), Error> = Err(Error::not_found("missing"));

    let err = result.at(&req).expect_err("error is preserved");
    let (status, _, body) = render(&err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body.path, "/api/locations/7");
}

#[rstest]
#[actix_web::test]
async fn json_content_type_failures_render_as_bad_request() {
    let req = TestRequest::post().uri("/api/locations").to_http_request();
    let error = json_error_handler(JsonPayloadError::ContentType, &req);

    let response = error.error_response();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body())
        .await
        .expect("reading response body succeeds");
    let body: ErrorBody = serde_json::from_slice(&bytes).expect("error body deserialises");
    assert_eq!(body.message, "Content type must be application/json");
    assert_eq!(body.path, "/api/locations");
}
