//! Inbound adapters translating REST, SOAP, GraphQL and gRPC requests into
//! orchestrator calls.
//!
//! Field parsing shared by every facade lives in [`validation`] and
//! [`date_codec`] so the same input fails the same way everywhere.

pub mod date_codec;
pub mod graphql;
pub mod grpc;
pub mod http;
pub mod soap;
pub(crate) mod validation;
