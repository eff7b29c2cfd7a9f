//! PostgreSQL-backed `ClientRepository` implementation using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{ClientRepository, PersistenceError};
use crate::domain::{Client, ClientId, NewClient};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{ClientRow, NewClientRow};
use super::pool::DbPool;
use super::schema::clients;

/// Diesel-backed implementation of the client repository port.
#[derive(Clone)]
pub struct DieselClientRepository {
    pool: DbPool,
}

impl DieselClientRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

pub(crate) fn row_to_client(row: ClientRow) -> Client {
    let ClientRow {
        id,
        nom,
        prenom,
        email,
        telephone,
    } = row;
    Client::new(
        ClientId::new(id),
        NewClient {
            last_name: nom,
            first_name: prenom,
            email,
            phone: telephone,
        },
    )
}

#[async_trait]
impl ClientRepository for DieselClientRepository {
    async fn insert(&self, client: &NewClient) -> Result<Client, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = diesel::insert_into(clients::table)
            .values(&NewClientRow {
                nom: &client.last_name,
                prenom: &client.first_name,
                email: &client.email,
                telephone: &client.phone,
            })
            .returning(ClientRow::as_returning())
            .get_result::<ClientRow>(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(row_to_client(row))
    }

    async fn find_by_id(&self, id: ClientId) -> Result<Option<Client>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = clients::table
            .find(id.get())
            .select(ClientRow::as_select())
            .first::<ClientRow>(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        Ok(row.map(row_to_client))
    }

    async fn find_all(&self) -> Result<Vec<Client>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<ClientRow> = clients::table
            .order(clients::id.asc())
            .select(ClientRow::as_select())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(rows.into_iter().map(row_to_client).collect())
    }

    async fn delete_by_id(&self, id: ClientId) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(clients::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }

    async fn count(&self) -> Result<u64, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let total: i64 = clients::table
            .count()
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        u64::try_from(total).map_err(|_| PersistenceError::query("negative client count"))
    }
}
