//! Port for movie record persistence.
//!
//! [`MovieRepository`] is the only path the domain has to the `movies`
//! table. Adapters receive validated [`MovieDraft`] values and report
//! failures through [`MovieRepositoryError`]; whether a keyed write touched a
//! row is reported through [`WriteOutcome`] rather than an error.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::{Movie, MovieDraft, MovieId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by movie repository adapters.
    pub enum MovieRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "movie repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "movie repository query failed: {message}",
    }
}

/// Result of a write addressed to a single movie id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The row existed and was written.
    Applied,
    /// No row carries the requested id; nothing changed.
    NotFound,
}

/// Port for movie storage and retrieval.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Every stored movie, ordered by id.
    async fn list(&self) -> Result<Vec<Movie>, MovieRepositoryError>;

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, MovieRepositoryError>;

    /// Insert a new record and return the id assigned by the store.
    async fn insert(&self, draft: &MovieDraft) -> Result<MovieId, MovieRepositoryError>;

    /// Replace every mutable field of the record with the draft's values.
    async fn update(
        &self,
        id: MovieId,
        draft: &MovieDraft,
    ) -> Result<WriteOutcome, MovieRepositoryError>;

    async fn delete(&self, id: MovieId) -> Result<WriteOutcome, MovieRepositoryError>;
}

#[derive(Debug, Default)]
struct InMemoryState {
    next_id: i32,
    rows: BTreeMap<MovieId, MovieDraft>,
}

/// Process-local repository used when no database is configured and in tests.
///
/// Ids come from a counter that only moves forward, so a deleted id is never
/// handed out again for the lifetime of the repository.
#[derive(Debug, Default)]
pub struct InMemoryMovieRepository {
    state: Mutex<InMemoryState>,
}

impl InMemoryMovieRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, InMemoryState>, MovieRepositoryError> {
        self.state
            .lock()
            .map_err(|_| MovieRepositoryError::query("in-memory movie store lock poisoned"))
    }
}

#[async_trait]
impl MovieRepository for InMemoryMovieRepository {
    async fn list(&self) -> Result<Vec<Movie>, MovieRepositoryError> {
        let state = self.lock()?;
        Ok(state
            .rows
            .iter()
            .map(|(id, draft)| Movie::new(*id, draft.clone()))
            .collect())
    }

    async fn find_by_id(&self, id: MovieId) -> Result<Option<Movie>, MovieRepositoryError> {
        let state = self.lock()?;
        Ok(state
            .rows
            .get(&id)
            .map(|draft| Movie::new(id, draft.clone())))
    }

    async fn insert(&self, draft: &MovieDraft) -> Result<MovieId, MovieRepositoryError> {
        let mut state = self.lock()?;
        state.next_id = state
            .next_id
            .checked_add(1)
            .ok_or_else(|| MovieRepositoryError::query("movie id sequence exhausted"))?;
        let id = MovieId::new(state.next_id);
        state.rows.insert(id, draft.clone());
        Ok(id)
    }

    async fn update(
        &self,
        id: MovieId,
        draft: &MovieDraft,
    ) -> Result<WriteOutcome, MovieRepositoryError> {
        let mut state = self.lock()?;
        Ok(match state.rows.get_mut(&id) {
            Some(stored) => {
                *stored = draft.clone();
                WriteOutcome::Applied
            }
            None => WriteOutcome::NotFound,
        })
    }

    async fn delete(&self, id: MovieId) -> Result<WriteOutcome, MovieRepositoryError> {
        let mut state = self.lock()?;
        Ok(match state.rows.remove(&id) {
            Some(_) => WriteOutcome::Applied,
            None => WriteOutcome::NotFound,
        })
    }
}
