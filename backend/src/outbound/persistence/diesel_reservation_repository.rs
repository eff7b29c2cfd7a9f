//! PostgreSQL-backed `ReservationRepository` implementation using Diesel.
//!
//! Reservations are always read with their client and room attached through
//! left joins, so dangling or absent references come back as `None`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::Error as DieselError;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, AsyncPgConnection, RunQueryDsl};
use tracing::{debug, warn};

use crate::domain::ports::{PersistenceError, ReservationRepository};
use crate::domain::{NewReservation, Preferences, Reservation, ReservationId};

use super::diesel_chambre_repository::row_to_chambre;
use super::diesel_client_repository::row_to_client;
use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{
    ChambreRow, ClientRow, NewReservationRow, ReservationChangeset, ReservationRow,
};
use super::pool::DbPool;
use super::schema::{chambres, clients, reservations};

type JoinedRow = (ReservationRow, Option<ClientRow>, Option<ChambreRow>);

/// Diesel-backed implementation of the reservation repository port.
#[derive(Clone)]
pub struct DieselReservationRepository {
    pool: DbPool,
}

impl DieselReservationRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

async fn load_joined(
    conn: &mut AsyncPgConnection,
    id: i64,
) -> Result<Option<JoinedRow>, DieselError> {
    reservations::table
        .left_join(clients::table)
        .left_join(chambres::table)
        .filter(reservations::id.eq(id))
        .select((
            ReservationRow::as_select(),
            Option::<ClientRow>::as_select(),
            Option::<ChambreRow>::as_select(),
        ))
        .first::<JoinedRow>(conn)
        .await
        .optional()
}

/// Stored foreign key whose row the join did not find.
fn dangling(stored: Option<i64>, joined: bool) -> Option<i64> {
    stored.filter(|_| !joined)
}

fn joined_to_reservation(row: JoinedRow) -> Result<Reservation, PersistenceError> {
    let (reservation, client, chambre) = row;
    if let Some(client_id) = dangling(reservation.client_id, client.is_some()) {
        warn!(
            reservation_id = reservation.id,
            client_id,
            "reservation references a missing client"
        );
    }
    if let Some(chambre_id) = dangling(reservation.chambre_id, chambre.is_some()) {
        warn!(
            reservation_id = reservation.id,
            chambre_id,
            "reservation references a missing room"
        );
    }
    let preferences = Preferences::try_new(reservation.preferences)
        .map_err(|err| PersistenceError::query(err.to_string()))?;
    Ok(Reservation::new(
        ReservationId::new(reservation.id),
        NewReservation {
            client: client.map(row_to_client),
            chambre: chambre.map(row_to_chambre).transpose()?,
            start_date: reservation.date_debut,
            end_date: reservation.date_fin,
            preferences,
        },
    ))
}

fn missing_after_write(id: i64) -> PersistenceError {
    PersistenceError::query(format!("reservation {id} vanished after write"))
}

#[async_trait]
impl ReservationRepository for DieselReservationRepository {
    async fn insert(&self, reservation: &NewReservation) -> Result<Reservation, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewReservationRow {
            client_id: reservation.client.as_ref().map(|c| c.id().get()),
            chambre_id: reservation.chambre.as_ref().map(|c| c.id().get()),
            date_debut: reservation.start_date,
            date_fin: reservation.end_date,
            preferences: reservation.preferences.as_str(),
        };

        let joined = conn
            .transaction::<_, DieselError, _>(|conn| {
                async move {
                    let id: i64 = diesel::insert_into(reservations::table)
                        .values(&row)
                        .returning(reservations::id)
                        .get_result(conn)
                        .await?;
                    let joined = load_joined(conn, id).await?;
                    Ok((id, joined))
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        match joined {
            (_, Some(joined)) => joined_to_reservation(joined),
            (id, None) => Err(missing_after_write(id)),
        }
    }

    async fn update(
        &self,
        reservation: &Reservation,
    ) -> Result<Option<Reservation>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let id = reservation.id().get();
        let changes = ReservationChangeset {
            client_id: reservation.client().map(|c| c.id().get()),
            chambre_id: reservation.chambre().map(|c| c.id().get()),
            date_debut: reservation.start_date(),
            date_fin: reservation.end_date(),
            preferences: reservation.preferences().as_str(),
        };

        let joined = conn
            .transaction::<_, DieselError, _>(|conn| {
                async move {
                    let affected = diesel::update(reservations::table.find(id))
                        .set(&changes)
                        .execute(conn)
                        .await?;
                    if affected == 0 {
                        return Ok(None);
                    }
                    load_joined(conn, id).await
                }
                .scope_boxed()
            })
            .await
            .map_err(map_diesel_error)?;

        if joined.is_none() {
            debug!(reservation_id = id, "update matched no reservation");
        }
        joined.map(joined_to_reservation).transpose()
    }

    async fn find_by_id(
        &self,
        id: ReservationId,
    ) -> Result<Option<Reservation>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        load_joined(&mut conn, id.get())
            .await
            .map_err(map_diesel_error)?
            .map(joined_to_reservation)
            .transpose()
    }

    async fn find_all(&self) -> Result<Vec<Reservation>, PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<JoinedRow> = reservations::table
            .left_join(clients::table)
            .left_join(chambres::table)
            .order(reservations::id.asc())
            .select((
                ReservationRow::as_select(),
                Option::<ClientRow>::as_select(),
                Option::<ChambreRow>::as_select(),
            ))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(joined_to_reservation).collect()
    }

    async fn delete_by_id(&self, id: ReservationId) -> Result<(), PersistenceError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        diesel::delete(reservations::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(map_diesel_error)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::domain::ClientId;

    #[fixture]
    fn reservation_row() -> ReservationRow {
        ReservationRow {
            id: 11,
            client_id: Some(1),
            chambre_id: None,
            date_debut: NaiveDate::from_ymd_opt(2024, 6, 1).expect("valid date"),
            date_fin: NaiveDate::from_ymd_opt(2024, 6, 5).expect("valid date"),
            preferences: "late checkout".to_owned(),
        }
    }

    #[rstest]
    fn joined_row_attaches_client(reservation_row: ReservationRow) {
        let client = ClientRow {
            id: 1,
            nom: "Martin".to_owned(),
            prenom: "Marie".to_owned(),
            email: "marie.martin@example.com".to_owned(),
            telephone: "+33987654321".to_owned(),
        };

        let reservation =
            joined_to_reservation((reservation_row, Some(client), None)).expect("valid row");

        assert_eq!(reservation.id(), ReservationId::new(11));
        assert_eq!(reservation.client().map(|c| c.id()), Some(ClientId::new(1)));
        assert!(reservation.chambre().is_none());
        assert_eq!(reservation.preferences().as_str(), "late checkout");
    }

    #[rstest]
    fn dangling_reference_reads_as_absent(reservation_row: ReservationRow) {
        let reservation =
            joined_to_reservation((reservation_row, None, None)).expect("valid row");
        assert!(reservation.client().is_none());
    }

    #[rstest]
    #[case(Some(4), false, Some(4))]
    #[case(Some(4), true, None)]
    #[case(None, false, None)]
    fn dangling_reports_unmatched_keys(
        #[case] stored: Option<i64>,
        #[case] joined: bool,
        #[case] expected: Option<i64>,
    ) {
        assert_eq!(dangling(stored, joined), expected);
    }

    #[rstest]
    fn oversized_preferences_are_a_query_error(mut reservation_row: ReservationRow) {
        reservation_row.preferences = "x".repeat(1001);
        let error = joined_to_reservation((reservation_row, None, None)).expect_err("too long");
        assert!(matches!(error, PersistenceError::Query { .. }));
    }
}
