//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Repository implementations only translate between Diesel rows and domain
//! entities. Row structs and table definitions stay private to this module.
//! Connections come from a `bb8` pool via `diesel-async`, and every database
//! failure is classified into [`crate::domain::ports::PersistenceError`].
//!
//! # Example
//!
//! ```ignore
//! use hotel_backend::outbound::persistence::{DbPool, DieselClientRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/hotel")).await?;
//! let clients = DieselClientRepository::new(pool);
//! ```

mod diesel_chambre_repository;
mod diesel_client_repository;
mod diesel_reservation_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_chambre_repository::DieselChambreRepository;
pub use diesel_client_repository::DieselClientRepository;
pub use diesel_reservation_repository::DieselReservationRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
