//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementations of the movie ports backed by PostgreSQL through
//! `diesel-async` and `bb8`. Diesel row structs (`models.rs`) and the table
//! definition (`schema.rs`) stay private to this module; the domain only
//! sees [`Movie`](crate::domain::Movie) values.
//!
//! # Example
//!
//! ```no_run
//! use backend::outbound::persistence::{DbPool, DieselMovieRepository, PoolConfig};
//!
//! # async fn demo() -> Result<(), backend::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/movies")).await?;
//! let repo = DieselMovieRepository::new(pool);
//! # let _ = repo;
//! # Ok(())
//! # }
//! ```

mod diesel_error_mapping;
mod diesel_movie_repository;
pub mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_movie_repository::DieselMovieRepository;
pub use migrations::{MigrationError, reset_schema, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError, connection_url};
