//! Domain error to gRPC status translation.

use tonic::metadata::{Ascii, MetadataValue};
use tonic::{Code, Status};
use tracing::{error, warn};

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

const REDACTED_MESSAGE: &str = "Internal server error";

fn code_for(code: ErrorCode) -> Code {
    match code {
        ErrorCode::InvalidRequest => Code::InvalidArgument,
        ErrorCode::NotFound => Code::NotFound,
        ErrorCode::ReferentialIntegrity => Code::FailedPrecondition,
        ErrorCode::ServiceUnavailable => Code::Unavailable,
        ErrorCode::InternalError => Code::Internal,
    }
}

/// Convert a domain error into a `Status`, attaching the trace id as
/// metadata when one was captured.
pub fn to_status(err: &Error) -> Status {
    let code = code_for(err.code());
    let message = match err.code() {
        ErrorCode::InternalError => {
            error!(message = err.message(), "gRPC call failed");
            REDACTED_MESSAGE.to_owned()
        }
        ErrorCode::ServiceUnavailable => {
            error!(message = err.message(), "gRPC call failed");
            err.message().to_owned()
        }
        _ => {
            warn!(code = %err.code(), message = err.message(), "gRPC call rejected");
            err.message().to_owned()
        }
    };
    let mut status = Status::new(code, message);
    if let Some(value) = err
        .trace_id()
        .and_then(|id| id.parse::<MetadataValue<Ascii>>().ok())
    {
        status.metadata_mut().insert(TRACE_ID_HEADER, value);
    }
    status
}
