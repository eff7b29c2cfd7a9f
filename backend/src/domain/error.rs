//! Domain-level error types.
//!
//! These errors are transport agnostic. Each inbound adapter (REST, SOAP,
//! GraphQL, gRPC) owns the table that maps an [`ErrorCode`] onto its own wire
//! representation.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::domain::TraceId;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The request is malformed or fails validation.
    InvalidRequest,
    /// A referenced or requested entity does not exist.
    NotFound,
    /// The store rejected a write because a foreign key does not resolve.
    ReferentialIntegrity,
    /// The backing store cannot be reached.
    ServiceUnavailable,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

impl ErrorCode {
    /// Snake-case identifier used in wire payloads.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidRequest => "invalid_request",
            Self::NotFound => "not_found",
            Self::ReferentialIntegrity => "referential_integrity",
            Self::ServiceUnavailable => "service_unavailable",
            Self::InternalError => "internal_error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of entity named by a [`ErrorCode::NotFound`] error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Client,
    Chambre,
    Reservation,
}

impl EntityKind {
    /// Lowercase identifier used in error details.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Chambre => "chambre",
            Self::Reservation => "reservation",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Client => "Client",
            Self::Chambre => "Chambre",
            Self::Reservation => "Reservation",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error payload.
///
/// Captures the trace identifier in scope at construction time so adapters
/// can correlate a failure with the request that produced it.
///
/// # Examples
/// ```
/// use hotel_backend::domain::{Error, ErrorCode};
///
/// let err = Error::new(ErrorCode::NotFound, "missing");
/// assert_eq!(err.code(), ErrorCode::NotFound);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl Error {
    /// Create a new error, capturing the current trace identifier if any.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            trace_id: TraceId::current().map(|id| id.to_string()),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Correlation identifier captured when the error was raised.
    pub fn trace_id(&self) -> Option<&str> {
        self.trace_id.as_deref()
    }

    /// Supplementary error details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach a trace identifier to the error.
    pub fn with_trace_id(mut self, id: impl Into<String>) -> Self {
        self.trace_id = Some(id.into());
        self
    }

    /// Attach structured details to the error.
    ///
    /// # Examples
    /// ```
    /// use hotel_backend::domain::Error;
    /// use serde_json::json;
    ///
    /// let err = Error::invalid_request("bad").with_details(json!({ "field": "dateDebut" }));
    /// assert!(err.details().is_some());
    /// ```
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Convenience constructor for [`ErrorCode::InvalidRequest`].
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidRequest, message)
    }

    /// Convenience constructor for [`ErrorCode::NotFound`].
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound, message)
    }

    /// [`ErrorCode::NotFound`] naming the missing entity and its identifier.
    ///
    /// # Examples
    /// ```
    /// use hotel_backend::domain::{EntityKind, Error};
    ///
    /// let err = Error::entity_not_found(EntityKind::Chambre, 7);
    /// assert_eq!(err.not_found_entity(), Some(EntityKind::Chambre));
    /// assert_eq!(err.message(), "Chambre not found with id: 7");
    /// ```
    pub fn entity_not_found(kind: EntityKind, id: i64) -> Self {
        Self::not_found(format!("{} not found with id: {id}", kind.label()))
            .with_details(json!({ "entity": kind.as_str(), "id": id }))
    }

    /// [`ErrorCode::ReferentialIntegrity`] naming the offending column.
    pub fn referential_integrity(column: impl Into<String>) -> Self {
        let column = column.into();
        let message = match column.as_str() {
            "client_id" => "Referenced client does not exist or is still referenced".to_owned(),
            "chambre_id" => "Referenced chambre does not exist or is still referenced".to_owned(),
            other => format!("Referential integrity violated on {other}"),
        };
        Self::new(ErrorCode::ReferentialIntegrity, message).with_details(json!({ "column": column }))
    }

    /// Convenience constructor for [`ErrorCode::ServiceUnavailable`].
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ServiceUnavailable, message)
    }

    /// Convenience constructor for [`ErrorCode::InternalError`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Entity named by a not-found error, if this is one.
    pub fn not_found_entity(&self) -> Option<EntityKind> {
        if self.code != ErrorCode::NotFound {
            return None;
        }
        let entity = self.details.as_ref()?.get("entity")?.clone();
        serde_json::from_value(entity).ok()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for Error {}
