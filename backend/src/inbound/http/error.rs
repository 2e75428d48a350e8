//! HTTP adapter mapping for domain errors.
//!
//! Purpose: keep [`Error`] HTTP-agnostic while giving every failed request the
//! same JSON body: `{timestamp, status, error, message, path}`. The request
//! path is not known to the domain, so handlers pair it with the error through
//! [`ApiError`].

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

const REDACTED_MESSAGE: &str = "Internal server error";

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Instant the response was rendered.
    pub timestamp: DateTime<Utc>,
    /// Numeric HTTP status.
    #[schema(example = 404)]
    pub status: u16,
    /// Reason phrase of the status.
    #[schema(example = "Not Found")]
    pub error: String,
    /// Human-readable description of the failure.
    #[schema(example = "Location is not exists with given id: 42")]
    pub message: String,
    /// Path of the failed request.
    #[schema(example = "/api/locations/42")]
    pub path: String,
}

/// Domain error bound to the request path that produced it.
#[derive(Debug, thiserror::Error)]
#[error("{error} ({path})")]
pub struct ApiError {
    error: Error,
    path: String,
}

impl ApiError {
    /// Pair `error` with the request `path`.
    pub fn new(error: Error, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
        }
    }

    fn body(&self, timestamp: DateTime<Utc>) -> ErrorBody {
        let status = self.status_code();
        let message = if matches!(self.error.code(), ErrorCode::InternalError) {
            REDACTED_MESSAGE.to_owned()
        } else {
            self.error.message().to_owned()
        };
        ErrorBody {
            timestamp,
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or_default().to_owned(),
            message,
            path: self.path.clone(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.error.code())
    }

    fn error_response(&self) -> HttpResponse {
        if matches!(
            self.error.code(),
            ErrorCode::InternalError | ErrorCode::ServiceUnavailable
        ) {
            error!(
                error = %self.error,
                path = %self.path,
                trace_id = self.error.trace_id(),
                "request failed"
            );
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.error.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self.body(Utc::now()))
    }
}

/// Attach the request path to a domain result.
pub trait WithRequestPath<T> {
    /// Convert a domain failure into an [`ApiError`] for `req`.
    ///
    /// # Errors
    /// Returns the wrapped error when `self` is `Err`.
    fn at(self, req: &HttpRequest) -> ApiResult<T>;
}

impl<T> WithRequestPath<T> for Result<T, Error> {
    fn at(self, req: &HttpRequest) -> ApiResult<T> {
        self.map_err(|error| ApiError::new(error, req.path()))
    }
}

/// Render JSON body extraction failures with the shared error body.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    let message = match &err {
        JsonPayloadError::ContentType => "Content type must be application/json".to_owned(),
        other => format!("Malformed JSON request: {other}"),
    };
    let error = Error::invalid_request(message).with_details(json!({
        "code": "malformed_body",
    }));
    ApiError::new(error, req.path()).into()
}

/// Render path parameter extraction failures with the shared error body.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    let error = Error::invalid_request(format!("Invalid path parameter: {err}")).with_details(
        json!({
            "code": "invalid_path",
        }),
    );
    ApiError::new(error, req.path()).into()
}

#[cfg(test)]
mod tests;
