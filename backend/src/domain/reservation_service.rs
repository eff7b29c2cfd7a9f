//! Reservation domain service.
//!
//! The one place reservation rules live: client and room references must
//! resolve before anything is written, and updates replace dates and
//! preferences wholesale.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};

use crate::domain::ports::{
    ChambreRepository, ClientRepository, PersistenceError, ReservationOrchestrator,
    ReservationRepository,
};
use crate::domain::{
    Chambre, ChambreId, Client, ClientId, EntityKind, Error, NewReservation, Reservation,
    ReservationDraft, ReservationId,
};

/// Translate persistence failures into domain errors.
pub(crate) fn map_persistence_error(error: PersistenceError) -> Error {
    match error {
        PersistenceError::Connection { message } => {
            Error::service_unavailable(format!("reservation store unavailable: {message}"))
        }
        PersistenceError::Query { message } => {
            Error::internal(format!("reservation store error: {message}"))
        }
        PersistenceError::ReferentialIntegrity { column } => Error::referential_integrity(column),
    }
}

/// Reservation service implementing the [`ReservationOrchestrator`] port.
#[derive(Clone)]
pub struct ReservationService<C, H, R> {
    clients: Arc<C>,
    chambres: Arc<H>,
    reservations: Arc<R>,
}

impl<C, H, R> ReservationService<C, H, R> {
    /// Create a service over the client, room and reservation repositories.
    pub fn new(clients: Arc<C>, chambres: Arc<H>, reservations: Arc<R>) -> Self {
        Self {
            clients,
            chambres,
            reservations,
        }
    }
}

impl<C, H, R> ReservationService<C, H, R>
where
    C: ClientRepository,
    H: ChambreRepository,
    R: ReservationRepository,
{
    async fn resolve_client(&self, id: ClientId) -> Result<Client, Error> {
        self.clients
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::entity_not_found(EntityKind::Client, id.get()))
    }

    async fn resolve_chambre(&self, id: ChambreId) -> Result<Chambre, Error> {
        self.chambres
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::entity_not_found(EntityKind::Chambre, id.get()))
    }

    async fn resolve_optional_client(&self, id: Option<ClientId>) -> Result<Option<Client>, Error> {
        match id {
            Some(id) => self.resolve_client(id).await.map(Some),
            None => Ok(None),
        }
    }

    async fn resolve_optional_chambre(
        &self,
        id: Option<ChambreId>,
    ) -> Result<Option<Chambre>, Error> {
        match id {
            Some(id) => self.resolve_chambre(id).await.map(Some),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl<C, H, R> ReservationOrchestrator for ReservationService<C, H, R>
where
    C: ClientRepository,
    H: ChambreRepository,
    R: ReservationRepository,
{
    async fn create_reservation(&self, draft: ReservationDraft) -> Result<Reservation, Error> {
        let ReservationDraft {
            client_id,
            chambre_id,
            start_date,
            end_date,
            preferences,
        } = draft;

        let client = self.resolve_optional_client(client_id).await?;
        let chambre = self.resolve_optional_chambre(chambre_id).await?;

        let created = self
            .reservations
            .insert(&NewReservation {
                client,
                chambre,
                start_date,
                end_date,
                preferences,
            })
            .await
            .map_err(map_persistence_error)?;

        info!(reservation_id = %created.id(), "reservation created");
        Ok(created)
    }

    async fn update_reservation(
        &self,
        id: ReservationId,
        draft: ReservationDraft,
    ) -> Result<Reservation, Error> {
        let existing = self
            .reservations
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::entity_not_found(EntityKind::Reservation, id.get()))?;

        let client = match draft.client_id {
            Some(client_id) => Some(self.resolve_client(client_id).await?),
            None => existing.client().cloned(),
        };
        let chambre = match draft.chambre_id {
            Some(chambre_id) => Some(self.resolve_chambre(chambre_id).await?),
            None => existing.chambre().cloned(),
        };

        let replaced = existing.replace(NewReservation {
            client,
            chambre,
            start_date: draft.start_date,
            end_date: draft.end_date,
            preferences: draft.preferences,
        });

        let updated = self
            .reservations
            .update(&replaced)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| Error::entity_not_found(EntityKind::Reservation, id.get()))?;

        info!(reservation_id = %id, "reservation updated");
        Ok(updated)
    }

    async fn get_reservation(&self, id: ReservationId) -> Result<Option<Reservation>, Error> {
        self.reservations
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }

    async fn list_reservations(&self) -> Result<Vec<Reservation>, Error> {
        self.reservations
            .find_all()
            .await
            .map_err(map_persistence_error)
    }

    async fn delete_reservation(&self, id: ReservationId) -> Result<(), Error> {
        self.reservations
            .delete_by_id(id)
            .await
            .map_err(map_persistence_error)?;
        debug!(reservation_id = %id, "reservation deleted");
        Ok(())
    }
}

#[cfg(test)]
#[path = "reservation_service_tests.rs"]
mod tests;
