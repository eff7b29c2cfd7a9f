//! Port for reservation persistence.
//!
//! Reservations are always returned with their client and room attached.
//! Adapters load references explicitly; nothing is fetched lazily.

use async_trait::async_trait;

use crate::domain::{NewReservation, Reservation, ReservationId};

use super::PersistenceError;

/// Driven port storing reservations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationRepository: Send + Sync {
    /// Insert a reservation whose references are already resolved.
    ///
    /// Fails with [`PersistenceError::ReferentialIntegrity`] if a reference
    /// disappeared after resolution; nothing is written in that case.
    async fn insert(&self, reservation: &NewReservation) -> Result<Reservation, PersistenceError>;

    /// Replace every column of an existing reservation.
    ///
    /// Returns `None` when the identifier no longer exists.
    async fn update(
        &self,
        reservation: &Reservation,
    ) -> Result<Option<Reservation>, PersistenceError>;

    /// Find a reservation by id.
    async fn find_by_id(
        &self,
        id: ReservationId,
    ) -> Result<Option<Reservation>, PersistenceError>;

    /// List every reservation in store-defined order.
    async fn find_all(&self) -> Result<Vec<Reservation>, PersistenceError>;

    /// Remove a reservation. Missing ids are not an error.
    async fn delete_by_id(&self, id: ReservationId) -> Result<(), PersistenceError>;
}
