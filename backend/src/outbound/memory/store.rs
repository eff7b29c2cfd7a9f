//! Mutex-guarded tables with PostgreSQL-like foreign-key checks.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::debug;

use crate::domain::ports::{
    ChambreRepository, ClientRepository, PersistenceError, ReservationRepository,
};
use crate::domain::{
    Chambre, ChambreId, Client, ClientId, NewChambre, NewClient, NewReservation, Preferences,
    Reservation, ReservationId,
};

const CLIENT_COLUMN: &str = "client_id";
const CHAMBRE_COLUMN: &str = "chambre_id";

#[derive(Debug, Clone)]
struct StoredReservation {
    client_id: Option<ClientId>,
    chambre_id: Option<ChambreId>,
    start_date: NaiveDate,
    end_date: NaiveDate,
    preferences: Preferences,
}

#[derive(Debug, Default)]
struct Tables {
    clients: BTreeMap<ClientId, Client>,
    chambres: BTreeMap<ChambreId, Chambre>,
    reservations: BTreeMap<ReservationId, StoredReservation>,
    next_client: i64,
    next_chambre: i64,
    next_reservation: i64,
}

impl Tables {
    fn check_references(
        &self,
        client_id: Option<ClientId>,
        chambre_id: Option<ChambreId>,
    ) -> Result<(), PersistenceError> {
        if client_id.is_some_and(|id| !self.clients.contains_key(&id)) {
            return Err(PersistenceError::referential_integrity(CLIENT_COLUMN));
        }
        if chambre_id.is_some_and(|id| !self.chambres.contains_key(&id)) {
            return Err(PersistenceError::referential_integrity(CHAMBRE_COLUMN));
        }
        Ok(())
    }

    fn hydrate(&self, id: ReservationId, stored: &StoredReservation) -> Reservation {
        Reservation::new(
            id,
            NewReservation {
                client: stored
                    .client_id
                    .and_then(|client_id| self.clients.get(&client_id).cloned()),
                chambre: stored
                    .chambre_id
                    .and_then(|chambre_id| self.chambres.get(&chambre_id).cloned()),
                start_date: stored.start_date,
                end_date: stored.end_date,
                preferences: stored.preferences.clone(),
            },
        )
    }

    fn stored_from(reservation: &NewReservation) -> StoredReservation {
        StoredReservation {
            client_id: reservation.client.as_ref().map(Client::id),
            chambre_id: reservation.chambre.as_ref().map(Chambre::id),
            start_date: reservation.start_date,
            end_date: reservation.end_date,
            preferences: reservation.preferences.clone(),
        }
    }
}

/// In-memory hotel store shared by clones.
///
/// # Examples
///
/// ```
/// use hotel_backend::outbound::memory::InMemoryHotelStore;
///
/// let store = InMemoryHotelStore::new();
/// let handle = store.clone();
/// # let _ = handle;
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemoryHotelStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryHotelStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, PersistenceError> {
        self.tables
            .lock()
            .map_err(|_| PersistenceError::query("in-memory store lock poisoned"))
    }
}

#[async_trait]
impl ClientRepository for InMemoryHotelStore {
    async fn insert(&self, client: &NewClient) -> Result<Client, PersistenceError> {
        let mut tables = self.lock()?;
        tables.next_client += 1;
        let id = ClientId::new(tables.next_client);
        let stored = Client::new(id, client.clone());
        tables.clients.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, PersistenceError> {
        Ok(self.lock()?.clients.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Client>, PersistenceError> {
        Ok(self.lock()?.clients.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: ClientId) -> Result<(), PersistenceError> {
        let mut tables = self.lock()?;
        if tables
            .reservations
            .values()
            .any(|stored| stored.client_id == Some(id))
        {
            debug!(client_id = %id, "client still referenced by a reservation");
            return Err(PersistenceError::referential_integrity(CLIENT_COLUMN));
        }
        tables.clients.remove(&id);
        Ok(())
    }

    async fn count(&self) -> Result<u64, PersistenceError> {
        let total = self.lock()?.clients.len();
        u64::try_from(total).map_err(|_| PersistenceError::query("client count overflow"))
    }
}

#[async_trait]
impl ChambreRepository for InMemoryHotelStore {
    async fn insert(&self, chambre: &NewChambre) -> Result<Chambre, PersistenceError> {
        let mut tables = self.lock()?;
        tables.next_chambre += 1;
        let id = ChambreId::new(tables.next_chambre);
        let stored = Chambre::new(id, chambre.clone());
        tables.chambres.insert(id, stored.clone());
        Ok(stored)
    }

    async fn find_by_id(&self, id: ChambreId) -> Result<Option<Chambre>, PersistenceError> {
        Ok(self.lock()?.chambres.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Chambre>, PersistenceError> {
        Ok(self.lock()?.chambres.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: ChambreId) -> Result<(), PersistenceError> {
        let mut tables = self.lock()?;
        if tables
            .reservations
            .values()
            .any(|stored| stored.chambre_id == Some(id))
        {
            debug!(chambre_id = %id, "room still referenced by a reservation");
            return Err(PersistenceError::referential_integrity(CHAMBRE_COLUMN));
        }
        tables.chambres.remove(&id);
        Ok(())
    }
}

#[async_trait]
impl ReservationRepository for InMemoryHotelStore {
    async fn insert(&self, reservation: &NewReservation) -> Result<Reservation, PersistenceError> {
        let mut tables = self.lock()?;
        let stored = Tables::stored_from(reservation);
        tables.check_references(stored.client_id, stored.chambre_id)?;
        tables.next_reservation += 1;
        let id = ReservationId::new(tables.next_reservation);
        let hydrated = tables.hydrate(id, &stored);
        tables.reservations.insert(id, stored);
        Ok(hydrated)
    }

    async fn update(
        &self,
        reservation: &Reservation,
    ) -> Result<Option<Reservation>, PersistenceError> {
        let mut tables = self.lock()?;
        let id = reservation.id();
        if !tables.reservations.contains_key(&id) {
            return Ok(None);
        }
        let stored = StoredReservation {
            client_id: reservation.client().map(Client::id),
            chambre_id: reservation.chambre().map(Chambre::id),
            start_date: reservation.start_date(),
            end_date: reservation.end_date(),
            preferences: reservation.preferences().clone(),
        };
        tables.check_references(stored.client_id, stored.chambre_id)?;
        let hydrated = tables.hydrate(id, &stored);
        tables.reservations.insert(id, stored);
        Ok(Some(hydrated))
    }

    async fn find_by_id(
        &self,
        id: ReservationId,
    ) -> Result<Option<Reservation>, PersistenceError> {
        let tables = self.lock()?;
        Ok(tables
            .reservations
            .get(&id)
            .map(|stored| tables.hydrate(id, stored)))
    }

    async fn find_all(&self) -> Result<Vec<Reservation>, PersistenceError> {
        let tables = self.lock()?;
        Ok(tables
            .reservations
            .iter()
            .map(|(id, stored)| tables.hydrate(*id, stored))
            .collect())
    }

    async fn delete_by_id(&self, id: ReservationId) -> Result<(), PersistenceError> {
        self.lock()?.reservations.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
