//! Diesel and pool error classification.
//!
//! Foreign key failures are recognised by the driver's error kind and the
//! reported constraint name, never by matching message text.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::{debug, warn};

use crate::domain::ports::PersistenceError;

use super::pool::PoolError;

/// Constraint names declared in the migrations, keyed to their column.
const FOREIGN_KEY_COLUMNS: &[(&str, &str)] = &[
    ("reservations_client_id_fkey", "client_id"),
    ("reservations_chambre_id_fkey", "chambre_id"),
];

pub(crate) fn map_pool_error(error: PoolError) -> PersistenceError {
    PersistenceError::connection(error.into_message())
}

fn column_for_constraint(constraint: &str) -> Option<&'static str> {
    FOREIGN_KEY_COLUMNS
        .iter()
        .find(|(name, _)| *name == constraint)
        .map(|(_, column)| *column)
}

pub(crate) fn map_diesel_error(error: DieselError) -> PersistenceError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, info) => {
            let constraint = info.constraint_name();
            match constraint.and_then(column_for_constraint) {
                Some(column) => PersistenceError::referential_integrity(column),
                None => {
                    warn!(
                        constraint_name = ?constraint,
                        table_name = ?info.table_name(),
                        "unrecognised foreign key violation"
                    );
                    PersistenceError::referential_integrity(
                        info.column_name().unwrap_or("unknown"),
                    )
                }
            }
        }
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, info) => {
            debug!(message = info.message(), "database connection closed");
            PersistenceError::connection("database connection error")
        }
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
            PersistenceError::query("database error")
        }
        DieselError::NotFound => PersistenceError::query("record not found"),
        DieselError::QueryBuilderError(_) => PersistenceError::query("database query error"),
        other => {
            debug!(error = %other, "diesel operation failed");
            PersistenceError::query("database error")
        }
    }
}
