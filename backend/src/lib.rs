//! Hotel reservation backend.
//!
//! One reservation orchestrator behind four facades: REST under `/api`,
//! SOAP at `/soap`, GraphQL at `/graphql` and gRPC on its own listener.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use middleware::Trace;
