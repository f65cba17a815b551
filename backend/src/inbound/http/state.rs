//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::MovieCatalogueService;
use crate::domain::ports::{MovieCatalogueCommand, MovieCatalogueQuery, MovieRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub movies_query: Arc<dyn MovieCatalogueQuery>,
    pub movies_command: Arc<dyn MovieCatalogueCommand>,
}

impl HttpState {
    pub fn new(
        movies_query: Arc<dyn MovieCatalogueQuery>,
        movies_command: Arc<dyn MovieCatalogueCommand>,
    ) -> Self {
        Self {
            movies_query,
            movies_command,
        }
    }

    /// Wire both catalogue ports to one service over `repository`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use backend::domain::ports::InMemoryMovieRepository;
    /// use backend::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::from_repository(Arc::new(InMemoryMovieRepository::new()));
    /// let _query = state.movies_query.clone();
    /// ```
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: MovieRepository + 'static,
    {
        let service = Arc::new(MovieCatalogueService::new(repository));
        Self::new(service.clone(), service)
    }
}
