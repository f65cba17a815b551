//! In-progress movie form.
//!
//! A [`MovieForm`] is a value: each edit returns a new form instead of
//! mutating fields in place, mirroring the full-replace update contract.

use crate::error::FormError;
use crate::model::{Movie, MovieRequest};

/// Text inputs of the add/edit form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MovieForm {
    title: String,
    genre: String,
    description: String,
    poster_url: String,
    rating: String,
}

impl MovieForm {
    /// Form pre-filled from a stored movie, for the edit view.
    #[must_use]
    pub fn from_movie(movie: &Movie) -> Self {
        Self {
            title: movie.title.clone(),
            genre: movie.genre.clone().unwrap_or_default(),
            description: movie.description.clone().unwrap_or_default(),
            poster_url: movie.poster_url.clone().unwrap_or_default(),
            rating: movie.rating.map(|r| r.to_string()).unwrap_or_default(),
        }
    }

    /// Same form with a new title.
    #[must_use]
    pub fn with_title(self, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..self
        }
    }

    /// Same form with a new genre.
    #[must_use]
    pub fn with_genre(self, genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
            ..self
        }
    }

    /// Same form with a new description.
    #[must_use]
    pub fn with_description(self, description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..self
        }
    }

    /// Same form with a new poster location.
    #[must_use]
    pub fn with_poster_url(self, poster_url: impl Into<String>) -> Self {
        Self {
            poster_url: poster_url.into(),
            ..self
        }
    }

    /// Same form with new rating text; parsed on submit.
    #[must_use]
    pub fn with_rating(self, rating: impl Into<String>) -> Self {
        Self {
            rating: rating.into(),
            ..self
        }
    }

    /// Title as typed.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Genre as typed.
    #[must_use]
    pub fn genre(&self) -> &str {
        &self.genre
    }

    /// Description as typed.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Poster location as typed.
    #[must_use]
    pub fn poster_url(&self) -> &str {
        &self.poster_url
    }

    /// Rating text as typed.
    #[must_use]
    pub fn rating(&self) -> &str {
        &self.rating
    }

    /// Build the request body.
    ///
    /// Blank optional inputs become `None`. The title is sent as typed and
    /// validated by the service.
    ///
    /// # Errors
    /// [`FormError::InvalidRating`] when the rating text is neither blank nor a
    /// finite number.
    pub fn to_request(&self) -> Result<MovieRequest, FormError> {
        Ok(MovieRequest {
            title: self.title.clone(),
            genre: optional(&self.genre),
            description: optional(&self.description),
            poster_url: optional(&self.poster_url),
            rating: parse_rating(&self.rating)?,
        })
    }
}

fn optional(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

fn parse_rating(text: &str) -> Result<Option<f64>, FormError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(FormError::InvalidRating {
            value: text.to_owned(),
        }),
    }
}
