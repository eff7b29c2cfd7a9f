//! GraphQL facade over the reservation orchestrator.

mod error;
mod handler;
mod schema;
mod types;

pub use error::extension_code;
pub use handler::{graphql_endpoint, graphql_usage};
pub use schema::{HotelSchema, MutationRoot, QueryRoot, SharedOrchestrator, build_schema};
pub use types::{ChambreObject, ClientObject, ReservationInput, ReservationObject};
