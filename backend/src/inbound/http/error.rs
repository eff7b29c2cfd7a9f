//! HTTP adapter mapping for domain errors.
//!
//! Keeps [`Error`] HTTP-agnostic while giving every REST failure the same JSON
//! body: `{timestamp, status, error, message, path, code, traceId}`.

use std::fmt;

use actix_web::error::{JsonPayloadError, PathError};
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, ApiError>;

const INTERNAL_MESSAGE: &str = "Internal server error";

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest | ErrorCode::ReferentialIntegrity => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// JSON error body returned by every REST endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    /// When the error response was produced.
    pub timestamp: DateTime<Utc>,
    /// HTTP status code.
    #[schema(example = 404)]
    pub status: u16,
    /// Canonical reason phrase for the status.
    #[schema(example = "Not Found")]
    pub error: String,
    #[schema(example = "Reservation not found with id: 7")]
    pub message: String,
    /// Request path that failed.
    #[schema(example = "/api/reservations/7")]
    pub path: String,
    /// Stable machine-readable error code.
    #[schema(value_type = String, example = "not_found")]
    pub code: ErrorCode,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

/// Domain error bound to the request path it was raised for.
#[derive(Debug, Clone)]
pub struct ApiError {
    error: Error,
    path: String,
}

impl ApiError {
    pub fn new(error: Error, path: impl Into<String>) -> Self {
        Self {
            error,
            path: path.into(),
        }
    }

    /// Wrapped domain error.
    pub fn error(&self) -> &Error {
        &self.error
    }

    fn body(&self) -> ErrorBody {
        let status = status_for(self.error.code());
        let internal = self.error.code() == ErrorCode::InternalError;
        ErrorBody {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_owned(),
            message: if internal {
                INTERNAL_MESSAGE.to_owned()
            } else {
                self.error.message().to_owned()
            },
            path: self.path.clone(),
            code: self.error.code(),
            trace_id: self.error.trace_id().map(str::to_owned),
            details: if internal {
                None
            } else {
                self.error.details().cloned()
            },
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.error, self.path)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        status_for(self.error.code())
    }

    fn error_response(&self) -> HttpResponse {
        match self.error.code() {
            ErrorCode::InternalError | ErrorCode::ServiceUnavailable => error!(
                code = %self.error.code(),
                message = self.error.message(),
                path = %self.path,
                "REST request failed"
            ),
            _ => warn!(
                code = %self.error.code(),
                message = self.error.message(),
                path = %self.path,
                "REST request rejected"
            ),
        }

        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.error.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(self.body())
    }
}

/// Attach the request path to a domain result.
pub trait AtPath<T> {
    fn at(self, req: &HttpRequest) -> ApiResult<T>;
}

impl<T> AtPath<T> for Result<T, Error> {
    fn at(self, req: &HttpRequest) -> ApiResult<T> {
        self.map_err(|err| ApiError::new(err, req.path()))
    }
}

/// Turn JSON extractor failures into the REST error body.
pub fn json_error_handler(err: JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    ApiError::new(
        Error::invalid_request(format!("malformed JSON body: {err}")),
        req.path(),
    )
    .into()
}

/// Turn path-segment parse failures into the REST error body.
pub fn path_error_handler(err: PathError, req: &HttpRequest) -> actix_web::Error {
    ApiError::new(
        Error::invalid_request(format!("invalid path parameter: {err}")),
        req.path(),
    )
    .into()
}
