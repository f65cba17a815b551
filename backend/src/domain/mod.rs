//! Domain primitives, ports and services.
//!
//! Purpose: define the movie record and its validation rules, the ports the
//! domain drives and is driven through, and the catalogue service that joins
//! them. Nothing here knows about HTTP or Diesel.
//!
//! Public surface:
//! - Error / ErrorCode: transport-agnostic failure payload.
//! - Movie, MovieDraft, MovieFields, MovieId, MovieTitle: the movie record.
//! - MovieCatalogueService: implements the catalogue driving ports.
//! - TraceId: request-scoped correlation identifier.

pub mod error;
pub mod movie;
pub mod movie_catalogue_service;
pub mod ports;
mod sample_movies;
pub mod trace_id;

pub use self::error::{Error, ErrorCode};
pub use self::movie::{
    GENRE_MAX, Movie, MovieDraft, MovieFields, MovieId, MovieTitle, MovieValidationError,
    POSTER_URL_MAX, TITLE_MAX,
};
pub use self::movie_catalogue_service::MovieCatalogueService;
pub use self::sample_movies::sample_movies;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::not_found("Movie not found"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
