//! Domain primitives, services and ports.
//!
//! Purpose: define the hotel entities (clients, rooms, reservations), the
//! shared error taxonomy, and the services every protocol adapter drives.
//! Types here know nothing about HTTP, XML, GraphQL or protobuf.
//!
//! Public surface:
//! - `Error` / `ErrorCode` / `EntityKind`: transport-agnostic failures.
//! - `Client`, `Chambre`, `Reservation` and their drafts.
//! - `ReservationService`, `ClientService`, `ChambreService`: driving port
//!   implementations.
//! - `DemoDataSeeder`: populates an empty store.

pub mod chambre;
pub mod chambre_service;
pub mod client;
pub mod client_service;
pub mod demo_data;
pub mod error;
pub mod ports;
pub mod reservation;
pub mod reservation_service;
pub mod trace_id;

pub use self::chambre::{Chambre, ChambreId, ChambreValidationError, NewChambre, Price};
pub use self::chambre_service::ChambreService;
pub use self::client::{Client, ClientId, NewClient};
pub use self::client_service::ClientService;
pub use self::demo_data::{DemoDataError, DemoDataOutcome, DemoDataSeeder};
pub use self::error::{EntityKind, Error, ErrorCode};
pub use self::reservation::{
    MAX_PREFERENCES_CHARS, NewReservation, Preferences, Reservation, ReservationDraft,
    ReservationId, ReservationValidationError,
};
pub use self::reservation_service::ReservationService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
