//! PostgreSQL-backed movie repository using Diesel ORM.
//!
//! Implements [`MovieRepository`] and [`MovieSeedRepository`] on top of the
//! shared [`DbPool`]. Every statement goes through the Diesel query builder,
//! so user-supplied values are always bound parameters.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};

use crate::domain::ports::{
    MovieRepository, MovieRepositoryError, MovieSeedRepository, MovieSeedRepositoryError,
    SeedOutcome, WriteOutcome,
};
use crate::domain::{Movie, MovieDraft, MovieFields, MovieId};

use super::diesel_error_mapping::{map_diesel_error, map_pool_error};
use super::models::{MovieRow, MovieWriteRow};
use super::pool::DbPool;
use super::schema::movies;

/// Diesel-backed implementation of the movie repository ports.
#[derive(Clone)]
pub struct DieselMovieRepository {
    pool: DbPool,
}

impl DieselMovieRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Convert a database row into a domain movie.
///
/// Rows written outside this adapter may violate draft validation (a blank
/// title, for instance); those surface as query errors rather than panics.
fn row_to_movie(row: MovieRow) -> Result<Movie, MovieRepositoryError> {
    let id = MovieId::new(row.id);
    let draft = MovieDraft::try_new(MovieFields {
        title: Some(row.title),
        genre: row.genre,
        description: row.description,
        poster_url: row.poster_url,
        rating: row.rating,
    })
    .map_err(|err| MovieRepositoryError::query(format!("stored movie {id} is invalid: {err}")))?;
    Ok(Movie::new(id, draft))
}

fn outcome_from_rows(affected: usize) -> WriteOutcome {
    if affected == 0 {
        WriteOutcome::NotFound
    } else {
        WriteOutcome::Applied
    }
}

#[async_trait]
impl MovieRepository for DieselMovieRepository {
    async fn list(&self) -> Result<Vec<Movie>, MovieRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<MovieRow> = movies::table
            .order(movies::id.asc())
            .select(MovieRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list movies"))?;
        rows.into_iter().map(row_to_movie).collect()
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, MovieRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<MovieRow> = movies::table
            .find(id.get())
            .select(MovieRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find movie"))?;
        row.map(row_to_movie).transpose()
    }

    async fn insert(&self, draft: &MovieDraft) -> Result<MovieId, MovieRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id: i32 = diesel::insert_into(movies::table)
            .values(MovieWriteRow::from(draft))
            .returning(movies::id)
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "insert movie"))?;
        Ok(MovieId::new(id))
    }

    async fn update(
        &self,
        id: MovieId,
        draft: &MovieDraft,
    ) -> Result<WriteOutcome, MovieRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let affected = diesel::update(movies::table.find(id.get()))
            .set(MovieWriteRow::from(draft))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "update movie"))?;
        Ok(outcome_from_rows(affected))
    }

    async fn delete(&self, id: MovieId) -> Result<WriteOutcome, MovieRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let affected = diesel::delete(movies::table.find(id.get()))
            .execute(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "delete movie"))?;
        Ok(outcome_from_rows(affected))
    }
}

#[async_trait]
impl MovieSeedRepository for DieselMovieRepository {
    async fn seed_if_empty(
        &self,
        drafts: &[MovieDraft],
    ) -> Result<SeedOutcome, MovieSeedRepositoryError> {
        let rows: Vec<MovieWriteRow<'_>> = drafts.iter().map(MovieWriteRow::from).collect();
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| MovieSeedRepositoryError::from(map_pool_error(err)))?;

        conn.transaction(|conn| {
            async move {
                // Blocks concurrent writers until commit so the emptiness
                // check and the insert see the same table.
                diesel::sql_query("LOCK TABLE movies IN SHARE ROW EXCLUSIVE MODE")
                    .execute(conn)
                    .await?;

                let existing: i64 = movies::table.count().get_result(conn).await?;
                if existing > 0 {
                    return Ok(SeedOutcome::AlreadySeeded);
                }

                let inserted = diesel::insert_into(movies::table)
                    .values(&rows)
                    .execute(conn)
                    .await?;
                Ok(SeedOutcome::Applied { inserted })
            }
            .scope_boxed()
        })
        .await
        .map_err(|err| MovieSeedRepositoryError::from(map_diesel_error(err, "seed movies")))
    }
}
