//! Wire types exchanged with the catalogue API.

use serde::{Deserialize, Serialize};

/// A stored movie as returned by `GET /movies`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// Store-assigned identifier.
    pub id: i32,
    /// Display title.
    pub title: String,
    /// Free-form genre label.
    #[serde(default)]
    pub genre: Option<String>,
    /// Synopsis.
    #[serde(default)]
    pub description: Option<String>,
    /// Poster image location; not fetched by the client.
    #[serde(default)]
    pub poster_url: Option<String>,
    /// Rating, conventionally 0 to 10.
    #[serde(default)]
    pub rating: Option<f64>,
}

/// Body of `POST /movies` and `PUT /movies/{id}`.
///
/// Updates replace the stored record, so `None` fields clear stored values.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieRequest {
    /// Display title.
    pub title: String,
    /// Free-form genre label.
    pub genre: Option<String>,
    /// Synopsis.
    pub description: Option<String>,
    /// Poster image location.
    pub poster_url: Option<String>,
    /// Rating, conventionally 0 to 10.
    pub rating: Option<f64>,
}

impl MovieRequest {
    /// A request carrying only a title.
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            genre: None,
            description: None,
            poster_url: None,
            rating: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreatedMovie {
    #[serde(flatten)]
    pub(crate) movie: Movie,
}

/// Error payload emitted by the service; only the message is surfaced.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub(crate) message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn created_response_yields_the_stored_movie() {
        let body = json!({
            "message": "Movie added successfully",
            "id": 7,
            "title": "Dune",
            "genre": "Sci-Fi",
            "description": null,
            "poster_url": null,
            "rating": 8.5,
        });
        let created: CreatedMovie = serde_json::from_value(body).expect("decode");
        assert_eq!(created.movie.id, 7);
        assert_eq!(created.movie.rating, Some(8.5));
        assert_eq!(created.movie.description, None);
    }

    #[test]
    fn absent_optional_fields_decode_as_none() {
        let movie: Movie =
            serde_json::from_value(json!({"id": 1, "title": "Heat"})).expect("decode");
        assert_eq!(movie.genre, None);
        assert_eq!(movie.poster_url, None);
    }

    #[test]
    fn requests_send_explicit_nulls() {
        let value = serde_json::to_value(MovieRequest::titled("Heat")).expect("encode");
        assert_eq!(
            value,
            json!({
                "title": "Heat",
                "genre": null,
                "description": null,
                "poster_url": null,
                "rating": null,
            })
        );
    }
}
