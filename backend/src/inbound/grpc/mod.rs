//! gRPC facade over the reservation orchestrator.
//!
//! Generated message and service types live in [`proto`].

pub mod proto {
    tonic::include_proto!("hotel.reservation");
}

mod service;
mod status;

pub use proto::reservation_service_server::ReservationServiceServer;
pub use service::ReservationGrpcService;
pub use status::to_status;
