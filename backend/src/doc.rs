//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] generates the OpenAPI document for the REST API. It registers
//! the movie and health endpoints from the inbound layer and the schema
//! wrappers ([`ErrorSchema`], [`ErrorCodeSchema`]) that describe domain
//! errors without coupling domain types to utoipa.
//!
//! The document is served by Swagger UI in debug builds and exported with
//! `cargo run --bin openapi-dump` for external tooling.

use crate::inbound::http::movies::{
    CreatedMovieResponse, MessageResponse, MovieRequest, MovieResponse,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Movie catalogue API",
        description = "Create, read, update and delete movie records."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::movies::index,
        crate::inbound::http::movies::list_movies,
        crate::inbound::http::movies::get_movie,
        crate::inbound::http::movies::create_movie,
        crate::inbound::http::movies::update_movie,
        crate::inbound::http::movies::delete_movie,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        MovieRequest,
        MovieResponse,
        CreatedMovieResponse,
        MessageResponse,
        ErrorSchema,
        ErrorCodeSchema
    )),
    tags(
        (name = "movies", description = "Movie catalogue operations"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
