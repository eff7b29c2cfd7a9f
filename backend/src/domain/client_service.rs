//! Client management service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{ClientRegistry, ClientRepository};
use crate::domain::reservation_service::map_persistence_error;
use crate::domain::{Client, ClientId, Error, NewClient};

/// Service implementing the [`ClientRegistry`] driving port.
#[derive(Clone)]
pub struct ClientService<C> {
    clients: Arc<C>,
}

impl<C> ClientService<C> {
    pub fn new(clients: Arc<C>) -> Self {
        Self { clients }
    }
}

#[async_trait]
impl<C> ClientRegistry for ClientService<C>
where
    C: ClientRepository,
{
    async fn create_client(&self, client: NewClient) -> Result<Client, Error> {
        let created = self
            .clients
            .insert(&client)
            .await
            .map_err(map_persistence_error)?;
        info!(client_id = %created.id(), "client created");
        Ok(created)
    }

    async fn get_client(&self, id: ClientId) -> Result<Option<Client>, Error> {
        self.clients
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }

    async fn list_clients(&self) -> Result<Vec<Client>, Error> {
        self.clients.find_all().await.map_err(map_persistence_error)
    }

    async fn delete_client(&self, id: ClientId) -> Result<(), Error> {
        self.clients
            .delete_by_id(id)
            .await
            .map_err(map_persistence_error)
    }
}
