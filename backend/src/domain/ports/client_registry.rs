//! Driving port for client management.

use async_trait::async_trait;

use crate::domain::{Client, ClientId, Error, NewClient};

/// Driving port for client create, read and delete.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRegistry: Send + Sync {
    async fn create_client(&self, client: NewClient) -> Result<Client, Error>;

    /// A missing id yields `Ok(None)`.
    async fn get_client(&self, id: ClientId) -> Result<Option<Client>, Error>;

    async fn list_clients(&self) -> Result<Vec<Client>, Error>;

    /// Fails with a referential integrity error while reservations still
    /// reference the client.
    async fn delete_client(&self, id: ClientId) -> Result<(), Error>;
}
