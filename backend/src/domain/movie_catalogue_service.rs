//! Movie catalogue domain service.
//!
//! Implements both catalogue driving ports on top of a [`MovieRepository`].
//! Validation happens here, before any store call; store failures surface as
//! [`ErrorCode::StoreError`](crate::domain::ErrorCode::StoreError) with the
//! raw adapter message in `details.error`.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::warn;

use crate::domain::ports::{
    MovieCatalogueCommand, MovieCatalogueQuery, MovieRepository, MovieRepositoryError,
    WriteOutcome,
};
use crate::domain::{Error, Movie, MovieDraft, MovieFields, MovieId, MovieValidationError};

fn map_repository_error(error: MovieRepositoryError) -> Error {
    let message = match &error {
        MovieRepositoryError::Connection { message } | MovieRepositoryError::Query { message } => {
            message.clone()
        }
    };
    warn!(error = %error, "movie store operation failed");
    Error::store("Movie store operation failed").with_details(json!({ "error": message }))
}

fn map_validation_error(error: MovieValidationError) -> Error {
    Error::invalid_request(error.to_string()).with_details(json!({ "field": error.field() }))
}

fn movie_not_found(id: MovieId) -> Error {
    Error::not_found("Movie not found").with_details(json!({ "id": id.get() }))
}

/// Catalogue service implementing [`MovieCatalogueQuery`] and
/// [`MovieCatalogueCommand`].
#[derive(Clone)]
pub struct MovieCatalogueService<R> {
    movies: Arc<R>,
}

impl<R> MovieCatalogueService<R> {
    pub fn new(movies: Arc<R>) -> Self {
        Self { movies }
    }
}

#[async_trait]
impl<R> MovieCatalogueQuery for MovieCatalogueService<R>
where
    R: MovieRepository,
{
    async fn list_movies(&self) -> Result<Vec<Movie>, Error> {
        self.movies.list().await.map_err(map_repository_error)
    }

    async fn get_movie(&self, id: MovieId) -> Result<Movie, Error> {
        self.movies
            .find_by_id(id)
            .await
            .map_err(map_repository_error)?
            .ok_or_else(|| movie_not_found(id))
    }
}

#[async_trait]
impl<R> MovieCatalogueCommand for MovieCatalogueService<R>
where
    R: MovieRepository,
{
    async fn create_movie(&self, fields: MovieFields) -> Result<Movie, Error> {
        let draft = MovieDraft::try_new(fields).map_err(map_validation_error)?;
        let id = self
            .movies
            .insert(&draft)
            .await
            .map_err(map_repository_error)?;
        Ok(Movie::new(id, draft))
    }

    async fn update_movie(&self, id: MovieId, fields: MovieFields) -> Result<(), Error> {
        let draft = MovieDraft::try_new(fields).map_err(map_validation_error)?;
        match self
            .movies
            .update(id, &draft)
            .await
            .map_err(map_repository_error)?
        {
            WriteOutcome::Applied => Ok(()),
            WriteOutcome::NotFound => Err(movie_not_found(id)),
        }
    }

    async fn delete_movie(&self, id: MovieId) -> Result<(), Error> {
        match self.movies.delete(id).await.map_err(map_repository_error)? {
            WriteOutcome::Applied => Ok(()),
            WriteOutcome::NotFound => Err(movie_not_found(id)),
        }
    }
}

#[cfg(test)]
#[path = "movie_catalogue_service_tests.rs"]
mod tests;
