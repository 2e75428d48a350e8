//! Translation of pool and Diesel failures into location repository errors.
//!
//! Messages stay generic; the underlying driver detail is logged at debug
//! level only.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::LocationRepositoryError;

use super::pool::PoolError;

pub(super) fn map_pool_error(error: PoolError) -> LocationRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            LocationRepositoryError::connection(message)
        }
    }
}

pub(super) fn map_diesel_error(error: DieselError) -> LocationRepositoryError {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "location query failed");
        }
        _ => debug!(%error, "location query failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => {
            LocationRepositoryError::connection("database connection error")
        }
        DieselError::DatabaseError(DatabaseErrorKind::CheckViolation, _) => {
            LocationRepositoryError::query("location violates a table constraint")
        }
        DieselError::NotFound => LocationRepositoryError::query("record not found"),
        DieselError::QueryBuilderError(_) => LocationRepositoryError::query("database query error"),
        _ => LocationRepositoryError::query("database error"),
    }
}
