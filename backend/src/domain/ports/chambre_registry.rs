//! Driving port for room management.

use async_trait::async_trait;

use crate::domain::{Chambre, ChambreId, Error, NewChambre};

/// Driving port for room create, read and delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChambreRegistry: Send + Sync {
    async fn create_chambre(&self, chambre: NewChambre) -> Result<Chambre, Error>;

    /// A missing id yields `Ok(None)`.
    async fn get_chambre(&self, id: ChambreId) -> Result<Option<Chambre>, Error>;

    async fn list_chambres(&self) -> Result<Vec<Chambre>, Error>;

    /// Fails with a referential integrity error while reservations still
    /// reference the room.
    async fn delete_chambre(&self, id: ChambreId) -> Result<(), Error>;
}
