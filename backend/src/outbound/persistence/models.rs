//! Internal Diesel row structs.
//!
//! These types never leave the persistence layer; repositories convert them
//! into domain entities before returning.

use chrono::NaiveDate;
use diesel::prelude::*;

use super::schema::{chambres, clients, reservations};

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = clients)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ClientRow {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub telephone: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = clients)]
pub(crate) struct NewClientRow<'a> {
    pub nom: &'a str,
    pub prenom: &'a str,
    pub email: &'a str,
    pub telephone: &'a str,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = chambres)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ChambreRow {
    pub id: i64,
    pub room_type: String,
    pub prix: f64,
    pub disponible: bool,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = chambres)]
pub(crate) struct NewChambreRow<'a> {
    pub room_type: &'a str,
    pub prix: f64,
    pub disponible: bool,
}

#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = reservations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ReservationRow {
    pub id: i64,
    pub client_id: Option<i64>,
    pub chambre_id: Option<i64>,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub preferences: String,
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = reservations)]
pub(crate) struct NewReservationRow<'a> {
    pub client_id: Option<i64>,
    pub chambre_id: Option<i64>,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub preferences: &'a str,
}

/// Full-replace changeset. `None` references are written as `NULL`.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = reservations)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct ReservationChangeset<'a> {
    pub client_id: Option<i64>,
    pub chambre_id: Option<i64>,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    pub preferences: &'a str,
}
