//! SOAP 1.1 adapter for reservations.
//!
//! Requests are repaired, decoded from the envelope, validated with the same
//! rules as the other facades and dispatched to the orchestrator. Failures
//! become SOAP faults with an `error`/`message` detail.

pub mod handler;
pub mod repair;
pub mod request;
pub mod response;

pub use handler::soap_endpoint;
pub use repair::repair_body;
pub use response::{ENVELOPE_NAMESPACE, SERVICE_NAMESPACE};
