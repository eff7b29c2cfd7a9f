//! Port for room persistence.

use async_trait::async_trait;

use crate::domain::{Chambre, ChambreId, NewChambre};

use super::PersistenceError;

/// Driven port storing hotel rooms.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChambreRepository: Send + Sync {
    /// Insert a new room and return it with its assigned identifier.
    async fn insert(&self, chambre: &NewChambre) -> Result<Chambre, PersistenceError>;

    /// Find a room by id.
    async fn find_by_id(&self, id: ChambreId) -> Result<Option<Chambre>, PersistenceError>;

    /// List every room in store-defined order.
    async fn find_all(&self) -> Result<Vec<Chambre>, PersistenceError>;

    /// Remove a room. Missing ids are not an error.
    async fn delete_by_id(&self, id: ChambreId) -> Result<(), PersistenceError>;
}
