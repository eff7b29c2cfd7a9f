//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by persistence adapters.
//! Driving ports (`ReservationOrchestrator`, `ClientRegistry`,
//! `ChambreRegistry`) are implemented by domain services and consumed by the
//! REST, SOAP, GraphQL and gRPC adapters.

mod chambre_registry;
mod chambre_repository;
mod client_registry;
mod client_repository;
mod persistence_error;
mod reservation_orchestrator;
mod reservation_repository;

pub use chambre_registry::ChambreRegistry;
#[cfg(test)]
pub use chambre_registry::MockChambreRegistry;
#[cfg(test)]
pub use chambre_repository::MockChambreRepository;
pub use chambre_repository::ChambreRepository;
pub use client_registry::ClientRegistry;
#[cfg(test)]
pub use client_registry::MockClientRegistry;
#[cfg(test)]
pub use client_repository::MockClientRepository;
pub use client_repository::ClientRepository;
pub use persistence_error::PersistenceError;
#[cfg(test)]
pub use reservation_orchestrator::MockReservationOrchestrator;
pub use reservation_orchestrator::ReservationOrchestrator;
#[cfg(test)]
pub use reservation_repository::MockReservationRepository;
pub use reservation_repository::ReservationRepository;
