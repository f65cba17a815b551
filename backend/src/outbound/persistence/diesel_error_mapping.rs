//! Diesel and pool error mapping for the movie repository.
//!
//! Messages are passed through verbatim; clients receive them in the
//! `details.error` field of store failures.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::MovieRepositoryError;

use super::pool::PoolError;

pub(crate) fn map_pool_error(error: PoolError) -> MovieRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            MovieRepositoryError::connection(message)
        }
    }
}

pub(crate) fn map_diesel_error(error: DieselError, operation: &str) -> MovieRepositoryError {
    let message = error.to_string();
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), %operation, "diesel operation failed");
        }
        _ => debug!(%message, %operation, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            MovieRepositoryError::connection(message)
        }
        _ => MovieRepositoryError::query(message),
    }
}
