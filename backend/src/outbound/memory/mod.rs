//! Process-local adapter implementing every repository port.
//!
//! Used when no database URL is configured and by integration tests. It
//! enforces the same foreign-key rules as the PostgreSQL schema.

mod store;

pub use store::InMemoryHotelStore;
