//! Movie catalogue endpoints.
//!
//! ```text
//! GET    /
//! GET    /movies
//! GET    /movies/{id}
//! POST   /movies
//! PUT    /movies/{id}
//! DELETE /movies/{id}
//! ```
//!
//! Bodies use snake_case field names. Ids in the path that are not integers
//! cannot name a stored movie and are answered with 404.

use actix_web::{HttpResponse, delete, get, post, put, web};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, Movie, MovieFields, MovieId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Plain-text banner served at the root path.
pub const BANNER: &str = "Movie catalogue backend is running";

/// Request body for creating or replacing a movie.
///
/// Unknown fields are ignored. `rating` accepts a JSON number or a numeric
/// string; an empty string means no rating.
#[derive(Debug, Clone, Default, Deserialize, Serialize, ToSchema)]
pub struct MovieRequest {
    #[schema(example = "Dune")]
    #[serde(default)]
    pub title: Option<String>,
    #[schema(example = "Sci-Fi")]
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub poster_url: Option<String>,
    #[schema(example = 8.5)]
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub rating: Option<f64>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RatingInput {
    Number(f64),
    Text(String),
}

fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<RatingInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RatingInput::Number(value)) => Ok(Some(value)),
        Some(RatingInput::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RatingInput::Text(text)) => text
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("rating {text:?} is not a number"))),
    }
}

impl From<MovieRequest> for MovieFields {
    fn from(request: MovieRequest) -> Self {
        Self {
            title: request.title,
            genre: request.genre,
            description: request.description,
            poster_url: request.poster_url,
            rating: request.rating,
        }
    }
}

/// A stored movie as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MovieResponse {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Inception")]
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub rating: Option<f64>,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        let draft = movie.draft();
        Self {
            id: movie.id().get(),
            title: draft.title().to_owned(),
            genre: draft.genre().map(str::to_owned),
            description: draft.description().map(str::to_owned),
            poster_url: draft.poster_url().map(str::to_owned),
            rating: draft.rating(),
        }
    }
}

/// Confirmation body for successful mutations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Movie deleted successfully")]
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_owned(),
        }
    }
}

/// Body returned by `POST /movies`: the confirmation plus the stored record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreatedMovieResponse {
    #[schema(example = "Movie added successfully")]
    pub message: String,
    #[serde(flatten)]
    pub movie: MovieResponse,
}

fn parse_movie_id(raw: &str) -> Result<MovieId, Error> {
    raw.parse().map_err(|_| {
        Error::not_found("Movie not found").with_details(serde_json::json!({ "id": raw }))
    })
}

/// Root banner confirming the service is up.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service banner", body = String, content_type = "text/plain")),
    tags = ["movies"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(BANNER)
}

/// List every movie, ordered by id.
#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "All movies", body = [MovieResponse]),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "listMovies"
)]
#[get("/movies")]
pub async fn list_movies(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<MovieResponse>>> {
    let movies = state.movies_query.list_movies().await?;
    Ok(web::Json(movies.into_iter().map(MovieResponse::from).collect()))
}

/// Fetch one movie.
#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 200, description = "The movie", body = MovieResponse),
        (status = 404, description = "Movie not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "getMovie"
)]
#[get("/movies/{id}")]
pub async fn get_movie(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MovieResponse>> {
    let id = parse_movie_id(&path)?;
    let movie = state.movies_query.get_movie(id).await?;
    Ok(web::Json(movie.into()))
}

/// Add a movie. `title` must be present and not blank.
#[utoipa::path(
    post,
    path = "/movies",
    request_body = MovieRequest,
    responses(
        (status = 201, description = "Movie added", body = CreatedMovieResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "createMovie"
)]
#[post("/movies")]
pub async fn create_movie(
    state: web::Data<HttpState>,
    payload: web::Json<MovieRequest>,
) -> ApiResult<HttpResponse> {
    let movie = state
        .movies_command
        .create_movie(payload.into_inner().into())
        .await?;
    Ok(HttpResponse::Created().json(CreatedMovieResponse {
        message: "Movie added successfully".to_owned(),
        movie: movie.into(),
    }))
}

/// Replace every field of a movie.
#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie id")),
    request_body = MovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = MessageResponse),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 404, description = "Movie not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "updateMovie"
)]
#[put("/movies/{id}")]
pub async fn update_movie(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<MovieRequest>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_movie_id(&path)?;
    state
        .movies_command
        .update_movie(id, payload.into_inner().into())
        .await?;
    Ok(web::Json(MessageResponse::new("Movie updated successfully")))
}

/// Delete a movie.
#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(("id" = i32, Path, description = "Movie id")),
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 404, description = "Movie not found", body = ErrorSchema),
        (status = 500, description = "Store failure", body = ErrorSchema)
    ),
    tags = ["movies"],
    operation_id = "deleteMovie"
)]
#[delete("/movies/{id}")]
pub async fn delete_movie(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<MessageResponse>> {
    let id = parse_movie_id(&path)?;
    state.movies_command.delete_movie(id).await?;
    Ok(web::Json(MessageResponse::new("Movie deleted successfully")))
}

/// Register every movie endpoint on `cfg`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index)
        .service(list_movies)
        .service(get_movie)
        .service(create_movie)
        .service(update_movie)
        .service(delete_movie);
}

#[cfg(test)]
#[path = "movies_tests.rs"]
mod tests;
