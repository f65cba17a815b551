//! Driving port for catalogue mutations.
//!
//! Commands accept unvalidated [`MovieFields`]; implementations validate them
//! before touching the store, so a rejected request never mutates the
//! catalogue.

use async_trait::async_trait;

use crate::domain::{Error, Movie, MovieFields, MovieId};

/// Domain use-case port for creating, replacing and deleting movies.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieCatalogueCommand: Send + Sync {
    /// Validate and store a new movie, returning the stored record.
    async fn create_movie(&self, fields: MovieFields) -> Result<Movie, Error>;

    /// Validate and wholesale replace an existing movie.
    async fn update_movie(&self, id: MovieId, fields: MovieFields) -> Result<(), Error>;

    async fn delete_movie(&self, id: MovieId) -> Result<(), Error>;
}
