//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod movie_catalogue_command;
mod movie_catalogue_query;
mod movie_repository;
mod movie_seed_repository;

#[cfg(test)]
pub use movie_catalogue_command::MockMovieCatalogueCommand;
pub use movie_catalogue_command::MovieCatalogueCommand;
#[cfg(test)]
pub use movie_catalogue_query::MockMovieCatalogueQuery;
pub use movie_catalogue_query::MovieCatalogueQuery;
#[cfg(test)]
pub use movie_repository::MockMovieRepository;
pub use movie_repository::{
    InMemoryMovieRepository, MovieRepository, MovieRepositoryError, WriteOutcome,
};
#[cfg(test)]
pub use movie_seed_repository::MockMovieSeedRepository;
pub use movie_seed_repository::{MovieSeedRepository, MovieSeedRepositoryError, SeedOutcome};
