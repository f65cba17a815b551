//! Embedded schema migrations.
//!
//! Migrations run over a blocking libpq connection on Tokio's blocking pool;
//! the async pool is not involved. Applying them is idempotent: the
//! `movies` table is created only when missing and existing rows are never
//! touched. [`reset_schema`] is the one destructive path.

use diesel::pg::PgConnection;
use diesel::Connection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use super::pool::connection_url;

/// Migrations from `backend/migrations`, compiled into the binary.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while applying or reverting migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {message}")]
    Connection { message: String },
    #[error("migration failed: {message}")]
    Apply { message: String },
    #[error("migration task aborted: {message}")]
    Task { message: String },
}

fn connect(database_url: &str) -> Result<PgConnection, MigrationError> {
    PgConnection::establish(database_url).map_err(|err| MigrationError::Connection {
        message: err.to_string(),
    })
}

fn apply_pending(conn: &mut PgConnection) -> Result<Vec<String>, MigrationError> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?;
    Ok(applied.iter().map(ToString::to_string).collect())
}

async fn run_blocking<T, F>(task: F) -> Result<T, MigrationError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, MigrationError> + Send + 'static,
{
    tokio::task::spawn_blocking(task)
        .await
        .map_err(|err| MigrationError::Task {
            message: err.to_string(),
        })?
}

/// Apply every pending migration and return the versions applied.
pub async fn run_pending_migrations(
    database_url: &str,
    tls: bool,
) -> Result<Vec<String>, MigrationError> {
    let url = connection_url(database_url, tls);
    let applied = run_blocking(move || apply_pending(&mut connect(&url)?)).await?;
    info!(count = applied.len(), versions = ?applied, "applied pending migrations");
    Ok(applied)
}

/// Revert every migration (dropping the `movies` table and its rows), then
/// apply them again.
pub async fn reset_schema(database_url: &str, tls: bool) -> Result<Vec<String>, MigrationError> {
    let url = connection_url(database_url, tls);
    let applied = run_blocking(move || {
        let mut conn = connect(&url)?;
        conn.revert_all_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Apply {
                message: err.to_string(),
            })?;
        apply_pending(&mut conn)
    })
    .await?;
    info!(count = applied.len(), "schema reset");
    Ok(applied)
}
