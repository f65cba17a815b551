//! Builders wiring a movie store into HTTP state.

use std::sync::Arc;

use crate::domain::ports::{InMemoryMovieRepository, MovieSeedRepository};
use crate::inbound::http::state::HttpState;
use crate::outbound::persistence::{DbPool, DieselMovieRepository};

/// The store backing the catalogue.
#[derive(Clone)]
pub enum MovieStore {
    /// PostgreSQL through the shared pool.
    Postgres(DbPool),
    /// Process-local store; contents vanish on restart.
    InMemory(Arc<InMemoryMovieRepository>),
}

impl MovieStore {
    /// A fresh, empty in-memory store.
    pub fn in_memory() -> Self {
        Self::InMemory(Arc::new(InMemoryMovieRepository::new()))
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Postgres(_) => "postgres",
            Self::InMemory(_) => "in-memory",
        }
    }

    /// Seeding port for this store.
    pub fn seeder(&self) -> Arc<dyn MovieSeedRepository> {
        match self {
            Self::Postgres(pool) => Arc::new(DieselMovieRepository::new(pool.clone())),
            Self::InMemory(repo) => repo.clone(),
        }
    }
}

/// Build HTTP state whose catalogue ports run against `store`.
pub fn build_http_state(store: &MovieStore) -> HttpState {
    match store {
        MovieStore::Postgres(pool) => {
            HttpState::from_repository(Arc::new(DieselMovieRepository::new(pool.clone())))
        }
        MovieStore::InMemory(repo) => HttpState::from_repository(repo.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_movies;
    use crate::domain::ports::SeedOutcome;

    #[tokio::test]
    async fn in_memory_state_and_seeder_share_one_store() {
        let store = MovieStore::in_memory();
        let outcome = store
            .seeder()
            .seed_if_empty(&sample_movies().expect("valid samples"))
            .await
            .expect("seed");
        assert_eq!(outcome, SeedOutcome::Applied { inserted: 5 });

        let state = build_http_state(&store);
        let movies = state.movies_query.list_movies().await.expect("list");
        assert_eq!(movies.len(), 5);
        assert_eq!(store.kind(), "in-memory");
    }
}
