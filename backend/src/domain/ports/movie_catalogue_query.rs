//! Driving port for reading the movie catalogue.
//!
//! Inbound adapters use this port to read movies without importing outbound
//! persistence concerns.

use async_trait::async_trait;

use crate::domain::{Error, Movie, MovieId};

/// Domain use-case port for catalogue reads.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieCatalogueQuery: Send + Sync {
    /// Every movie in the catalogue, ordered by id.
    async fn list_movies(&self) -> Result<Vec<Movie>, Error>;

    /// A single movie; [`crate::domain::ErrorCode::NotFound`] when absent.
    async fn get_movie(&self, id: MovieId) -> Result<Movie, Error>;
}
