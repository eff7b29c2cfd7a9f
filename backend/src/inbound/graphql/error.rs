//! Domain error to GraphQL error translation.
//!
//! Errors surface as `errors[]` entries whose `extensions.code` carries an
//! upper-case error code.

use async_graphql::ErrorExtensions;
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode};

const REDACTED_MESSAGE: &str = "Internal server error";

/// Extension code for a domain error code.
pub fn extension_code(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::InvalidRequest => "INVALID_REQUEST",
        ErrorCode::NotFound => "NOT_FOUND",
        ErrorCode::ReferentialIntegrity => "REFERENTIAL_INTEGRITY",
        ErrorCode::ServiceUnavailable => "SERVICE_UNAVAILABLE",
        ErrorCode::InternalError => "INTERNAL_ERROR",
    }
}

/// Convert a domain error into a GraphQL error with extensions.
pub fn to_graphql_error(err: &Error) -> async_graphql::Error {
    let message = match err.code() {
        ErrorCode::InternalError => {
            error!(message = err.message(), "GraphQL resolver failed");
            REDACTED_MESSAGE.to_owned()
        }
        ErrorCode::ServiceUnavailable => {
            error!(message = err.message(), "GraphQL resolver failed");
            err.message().to_owned()
        }
        _ => {
            warn!(code = %err.code(), message = err.message(), "GraphQL request rejected");
            err.message().to_owned()
        }
    };
    let code = extension_code(err.code());
    let trace_id = err.trace_id().map(str::to_owned);
    async_graphql::Error::new(message).extend_with(|_, extensions| {
        extensions.set("code", code.to_owned());
        if let Some(id) = trace_id {
            extensions.set("traceId", id);
        }
    })
}
