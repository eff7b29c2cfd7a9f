//! Demo data seeding.
//!
//! On an empty store, inserts two sample clients and three available rooms so
//! the facades have something to reference straight after startup.

use std::sync::Arc;

use thiserror::Error;
use tracing::info;

use crate::domain::ports::{ChambreRepository, ClientRepository, PersistenceError};
use crate::domain::{ChambreValidationError, NewChambre, NewClient, Price};

/// Result of attempting to apply demo data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoDataOutcome {
    /// Sample rows were inserted.
    Applied { clients: usize, chambres: usize },
    /// Clients already existed, nothing was written.
    AlreadyPopulated,
}

/// Errors raised while applying demo data.
#[derive(Debug, Error)]
pub enum DemoDataError {
    /// A built-in room price failed validation.
    #[error("demo room is invalid: {0}")]
    InvalidRoom(#[from] ChambreValidationError),
    /// Persistence adapter failed while seeding.
    #[error("demo data persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

fn demo_clients() -> Vec<NewClient> {
    vec![
        NewClient {
            last_name: "Dupont".to_owned(),
            first_name: "Jean".to_owned(),
            email: "jean.dupont@example.com".to_owned(),
            phone: "+33123456789".to_owned(),
        },
        NewClient {
            last_name: "Martin".to_owned(),
            first_name: "Marie".to_owned(),
            email: "marie.martin@example.com".to_owned(),
            phone: "+33987654321".to_owned(),
        },
    ]
}

fn demo_chambres() -> Result<Vec<NewChambre>, ChambreValidationError> {
    [("Standard", 100.0), ("Deluxe", 200.0), ("Suite", 350.0)]
        .into_iter()
        .map(|(room_type, price)| {
            Ok(NewChambre {
                room_type: room_type.to_owned(),
                price: Price::try_new(price)?,
                available: true,
            })
        })
        .collect()
}

/// Service inserting demo clients and rooms into an empty store.
#[derive(Clone)]
pub struct DemoDataSeeder<C, H> {
    clients: Arc<C>,
    chambres: Arc<H>,
}

impl<C, H> DemoDataSeeder<C, H> {
    pub fn new(clients: Arc<C>, chambres: Arc<H>) -> Self {
        Self { clients, chambres }
    }
}

impl<C, H> DemoDataSeeder<C, H>
where
    C: ClientRepository,
    H: ChambreRepository,
{
    /// Insert demo rows unless at least one client already exists.
    ///
    /// # Errors
    ///
    /// Returns [`DemoDataError`] if the store cannot be read or written.
    pub async fn seed_if_empty(&self) -> Result<DemoDataOutcome, DemoDataError> {
        if self.clients.count().await? > 0 {
            info!("demo data skipped: clients already present");
            return Ok(DemoDataOutcome::AlreadyPopulated);
        }

        let clients = demo_clients();
        let chambres = demo_chambres()?;
        for client in &clients {
            self.clients.insert(client).await?;
        }
        for chambre in &chambres {
            self.chambres.insert(chambre).await?;
        }

        info!(
            clients = clients.len(),
            chambres = chambres.len(),
            "demo data applied"
        );
        Ok(DemoDataOutcome::Applied {
            clients: clients.len(),
            chambres: chambres.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::domain::ports::{MockChambreRepository, MockClientRepository};
    use crate::domain::{Chambre, ChambreId, Client, ClientId};

    #[rstest]
    #[tokio::test]
    async fn seeds_empty_store() {
        let mut clients = MockClientRepository::new();
        clients.expect_count().times(1).returning(|| Ok(0));
        clients
            .expect_insert()
            .times(2)
            .returning(|fields| Ok(Client::new(ClientId::new(1), fields.clone())));
        let mut chambres = MockChambreRepository::new();
        chambres
            .expect_insert()
            .withf(|room| room.available)
            .times(3)
            .returning(|fields| Ok(Chambre::new(ChambreId::new(1), fields.clone())));

        let outcome = DemoDataSeeder::new(Arc::new(clients), Arc::new(chambres))
            .seed_if_empty()
            .await
            .expect("seeding succeeds");

        assert_eq!(
            outcome,
            DemoDataOutcome::Applied {
                clients: 2,
                chambres: 3
            }
        );
    }

    #[rstest]
    #[tokio::test]
    async fn skips_populated_store() {
        let mut clients = MockClientRepository::new();
        clients.expect_count().times(1).returning(|| Ok(4));
        clients.expect_insert().times(0);
        let mut chambres = MockChambreRepository::new();
        chambres.expect_insert().times(0);

        let outcome = DemoDataSeeder::new(Arc::new(clients), Arc::new(chambres))
            .seed_if_empty()
            .await
            .expect("seeding succeeds");

        assert_eq!(outcome, DemoDataOutcome::AlreadyPopulated);
    }

    #[rstest]
    fn demo_room_prices_are_valid() {
        let rooms = demo_chambres().expect("valid rooms");
        let types: Vec<_> = rooms.iter().map(|room| room.room_type.as_str()).collect();
        assert_eq!(types, ["Standard", "Deluxe", "Suite"]);
    }
}
