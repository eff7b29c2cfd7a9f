//! PostgreSQL-backed `ChambreRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ChambreRepository, PersistenceError};
use crate::domain::{Chambre, ChambreId, NewChambre, Price};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ChambreRow, NewChambreRow};
use super::pool::DbPool;
use super::schema::chambres;

/// Diesel-backed implementation of the room repository port.
#[derive(Clone)]
pub struct DieselChambreRepository {
    pool: DbPool,
}

impl DieselChambreRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a row into a validated domain room.
pub(crate) fn row_to_chambre(row: ChambreRow) -> Result<Chambre, PersistenceError> {
    let ChambreRow {
        id,
        room_type,
        prix,
        disponible,
    } = row;
    let price = Price::try_new(prix).map_err(|err| PersistenceError::query(err.to_string()))?;
    Ok(Chambre::new(
        ChambreId::new(id),
        NewChambre {
            room_type,
            price,
            available: disponible,
        },
    ))
}

#[async_trait]
impl ChambreRepository for DieselChambreRepository {
    async fn insert(&self, chambre: &NewChambre) -> Result<Chambre, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(chambres::table)
            .values(&NewChambreRow {
                room_type: &chambre.room_type,
                prix: chambre.price.get(),
                disponible: chambre.available,
            })
            .returning(ChambreRow::as_returning())
            .get_result::<ChambreRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        row_to_chambre(row)
    }

    async fn find_by_id(&self, id: ChambreId) -> Result<Option<Chambre>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = chambres::table
            .find(id.get())
            .select(ChambreRow::as_select())
            .first::<ChambreRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_chambre).transpose()
    }

    async fn find_all(&self) -> Result<Vec<Chambre>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ChambreRow> = chambres::table
            .order(chambres::id.asc())
            .select(ChambreRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_chambre).collect()
    }

    async fn delete_by_id(&self, id: ChambreId) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(chambres::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}
