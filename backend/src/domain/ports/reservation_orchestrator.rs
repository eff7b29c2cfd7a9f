//! Driving port for reservation use-cases.
//!
//! Every protocol facade calls this port, so validation and reference
//! resolution behave identically whichever adapter received the request.

use async_trait::async_trait;

use crate::domain::{Error, Reservation, ReservationDraft, ReservationId};

/// Driving port for reservation create, read, update and delete.
///
/// # Examples
///
/// ```rust,no_run
/// use chrono::NaiveDate;
/// use hotel_backend::domain::ports::ReservationOrchestrator;
/// use hotel_backend::domain::{Error, Preferences, ReservationDraft};
///
/// async fn book(orchestrator: &dyn ReservationOrchestrator) -> Result<(), Error> {
///     let draft = ReservationDraft::unassigned(
///         NaiveDate::from_ymd_opt(2024, 1, 10).expect("valid date"),
///         NaiveDate::from_ymd_opt(2024, 1, 15).expect("valid date"),
///         Preferences::try_new("sea view").expect("short enough"),
///     );
///     let created = orchestrator.create_reservation(draft).await?;
///     assert!(orchestrator.get_reservation(created.id()).await?.is_some());
///     Ok(())
/// }
/// ```
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ReservationOrchestrator: Send + Sync {
    /// Resolve references, persist, and return the stored reservation.
    async fn create_reservation(&self, draft: ReservationDraft) -> Result<Reservation, Error>;

    /// Replace dates and preferences of an existing reservation.
    ///
    /// References present in the draft are re-resolved; absent ones keep
    /// their current value.
    async fn update_reservation(
        &self,
        id: ReservationId,
        draft: ReservationDraft,
    ) -> Result<Reservation, Error>;

    /// Fetch one reservation. A missing id yields `Ok(None)`.
    async fn get_reservation(&self, id: ReservationId) -> Result<Option<Reservation>, Error>;

    /// List every reservation.
    async fn list_reservations(&self) -> Result<Vec<Reservation>, Error>;

    /// Delete a reservation. Deleting a missing id succeeds.
    async fn delete_reservation(&self, id: ReservationId) -> Result<(), Error>;
}
