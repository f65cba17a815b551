//! Port for seeding the movie table with sample records.

use async_trait::async_trait;

use crate::domain::MovieDraft;

use super::{InMemoryMovieRepository, MovieRepository, MovieRepositoryError, define_port_error};

define_port_error! {
    /// Persistence errors raised while seeding movies.
    pub enum MovieSeedRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "movie seeding connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "movie seeding query failed: {message}",
    }
}

impl From<MovieRepositoryError> for MovieSeedRepositoryError {
    fn from(value: MovieRepositoryError) -> Self {
        match value {
            MovieRepositoryError::Connection { message } => Self::Connection { message },
            MovieRepositoryError::Query { message } => Self::Query { message },
        }
    }
}

/// Outcome of a seeding attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The table was empty and the drafts were inserted.
    Applied {
        /// Number of rows written.
        inserted: usize,
    },
    /// The table already held rows; nothing was written.
    AlreadySeeded,
}

/// Port for inserting sample movies into an empty store.
///
/// Implementations must count and insert inside one transaction so two
/// concurrent seeders cannot both observe an empty table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieSeedRepository: Send + Sync {
    async fn seed_if_empty(
        &self,
        drafts: &[MovieDraft],
    ) -> Result<SeedOutcome, MovieSeedRepositoryError>;
}

#[async_trait]
impl MovieSeedRepository for InMemoryMovieRepository {
    async fn seed_if_empty(
        &self,
        drafts: &[MovieDraft],
    ) -> Result<SeedOutcome, MovieSeedRepositoryError> {
        // Each call takes the lock separately; the in-memory store is only
        // seeded once at startup before the server accepts requests.
        if !self.list().await?.is_empty() {
            return Ok(SeedOutcome::AlreadySeeded);
        }
        for draft in drafts {
            self.insert(draft).await?;
        }
        Ok(SeedOutcome::Applied {
            inserted: drafts.len(),
        })
    }
}
