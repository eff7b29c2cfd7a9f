//! Port for client persistence.

use async_trait::async_trait;

use crate::domain::{Client, ClientId, NewClient};

use super::PersistenceError;

/// Driven port storing hotel clients.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert a new client and return it with its assigned identifier.
    async fn insert(&self, client: &NewClient) -> Result<Client, PersistenceError>;

    /// Find a client by id.
    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, PersistenceError>;

    /// List every client in store-defined order.
    async fn find_all(&self) -> Result<Vec<Client>, PersistenceError>;

    /// Remove a client. Missing ids are not an error.
    async fn delete_by_id(&self, id: ClientId) -> Result<(), PersistenceError>;

    /// Number of stored clients.
    async fn count(&self) -> Result<u64, PersistenceError>;
}
