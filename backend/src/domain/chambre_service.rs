//! Room management service.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{ChambreRegistry, ChambreRepository};
use crate::domain::reservation_service::map_persistence_error;
use crate::domain::{Chambre, ChambreId, Error, NewChambre};

/// Service implementing the [`ChambreRegistry`] driving port.
#[derive(Clone)]
pub struct ChambreService<H> {
    chambres: Arc<H>,
}

impl<H> ChambreService<H> {
    pub fn new(chambres: Arc<H>) -> Self {
        Self { chambres }
    }
}

#[async_trait]
impl<H> ChambreRegistry for ChambreService<H>
where
    H: ChambreRepository,
{
    async fn create_chambre(&self, chambre: NewChambre) -> Result<Chambre, Error> {
        let created = self
            .chambres
            .insert(&chambre)
            .await
            .map_err(map_persistence_error)?;
        info!(chambre_id = %created.id(), room_type = created.room_type(), "chambre created");
        Ok(created)
    }

    async fn get_chambre(&self, id: ChambreId) -> Result<Option<Chambre>, Error> {
        self.chambres
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)
    }

    async fn list_chambres(&self) -> Result<Vec<Chambre>, Error> {
        self.chambres.find_all().await.map_err(map_persistence_error)
    }

    async fn delete_chambre(&self, id: ChambreId) -> Result<(), Error> {
        self.chambres
            .delete_by_id(id)
            .await
            .map_err(map_persistence_error)
    }
}
