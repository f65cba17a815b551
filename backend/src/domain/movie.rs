//! Movie record model.
//!
//! A [`Movie`] is a store-assigned [`MovieId`] plus the mutable fields held in
//! a [`MovieDraft`]. Drafts are only constructed through validation, so any
//! draft handed to a repository satisfies the column constraints of the
//! `movies` table.

use std::fmt;

/// Maximum title length, matching the `movies.title` column.
pub const TITLE_MAX: usize = 255;
/// Maximum genre length, matching the `movies.genre` column.
pub const GENRE_MAX: usize = 100;
/// Maximum poster location length, matching the `movies.poster_url` column.
pub const POSTER_URL_MAX: usize = 255;

/// Validation errors raised while building a [`MovieDraft`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MovieValidationError {
    /// No title was supplied.
    MissingTitle,
    /// The title is empty once surrounding whitespace is ignored.
    BlankTitle,
    /// A text field exceeds its column width.
    TooLong {
        /// Wire name of the offending field.
        field: &'static str,
        /// Maximum number of characters accepted.
        max: usize,
    },
    /// The rating is NaN or infinite.
    NonFiniteRating,
}

impl MovieValidationError {
    /// Wire name of the field that failed validation.
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingTitle | Self::BlankTitle => "title",
            Self::TooLong { field, .. } => field,
            Self::NonFiniteRating => "rating",
        }
    }
}

impl fmt::Display for MovieValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingTitle => write!(f, "Title is required"),
            Self::BlankTitle => write!(f, "Title must not be blank"),
            Self::TooLong { field, max } => {
                write!(f, "{field} must be at most {max} characters")
            }
            Self::NonFiniteRating => write!(f, "rating must be a finite number"),
        }
    }
}

impl std::error::Error for MovieValidationError {}

/// Store-assigned movie identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MovieId(i32);

impl MovieId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Raw integer value as stored in the `movies.id` column.
    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for MovieId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

/// Non-blank movie title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieTitle(String);

impl MovieTitle {
    /// Validate and construct a title.
    pub fn new(title: impl Into<String>) -> Result<Self, MovieValidationError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(MovieValidationError::BlankTitle);
        }
        check_length(&title, "title", TITLE_MAX)?;
        Ok(Self(title))
    }
}

impl AsRef<str> for MovieTitle {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<MovieTitle> for String {
    fn from(value: MovieTitle) -> Self {
        value.0
    }
}

fn check_length(
    value: &str,
    field: &'static str,
    max: usize,
) -> Result<(), MovieValidationError> {
    if value.chars().count() > max {
        return Err(MovieValidationError::TooLong { field, max });
    }
    Ok(())
}

/// Unvalidated movie fields as received from a caller.
///
/// Every field is optional so adapters can hand over whatever the client
/// sent; [`MovieDraft::try_from`] decides what is acceptable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieFields {
    pub title: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub rating: Option<f64>,
}

/// Validated mutable fields of a movie record.
///
/// An update replaces every field of the stored record with the draft's
/// values; absent optional fields clear the stored value.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    title: MovieTitle,
    genre: Option<String>,
    description: Option<String>,
    poster_url: Option<String>,
    rating: Option<f64>,
}

impl MovieDraft {
    /// Validate caller-supplied fields into a draft.
    ///
    /// # Examples
    /// ```
    /// use backend::domain::{MovieDraft, MovieFields};
    ///
    /// let draft = MovieDraft::try_new(MovieFields {
    ///     title: Some("Dune".into()),
    ///     rating: Some(8.5),
    ///     ..MovieFields::default()
    /// })
    /// .expect("valid draft");
    /// assert_eq!(draft.title(), "Dune");
    /// ```
    pub fn try_new(fields: MovieFields) -> Result<Self, MovieValidationError> {
        Self::try_from(fields)
    }

    /// Start a draft with only a title.
    pub fn new(title: MovieTitle) -> Self {
        Self {
            title,
            genre: None,
            description: None,
            poster_url: None,
            rating: None,
        }
    }

    pub fn title(&self) -> &str {
        self.title.as_ref()
    }

    pub fn genre(&self) -> Option<&str> {
        self.genre.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn poster_url(&self) -> Option<&str> {
        self.poster_url.as_deref()
    }

    /// Rating on the conventional 0–10 scale; the range is not enforced.
    pub fn rating(&self) -> Option<f64> {
        self.rating
    }
}

impl TryFrom<MovieFields> for MovieDraft {
    type Error = MovieValidationError;

    fn try_from(fields: MovieFields) -> Result<Self, Self::Error> {
        let MovieFields {
            title,
            genre,
            description,
            poster_url,
            rating,
        } = fields;

        let title = MovieTitle::new(title.ok_or(MovieValidationError::MissingTitle)?)?;
        if let Some(genre) = genre.as_deref() {
            check_length(genre, "genre", GENRE_MAX)?;
        }
        if let Some(poster_url) = poster_url.as_deref() {
            check_length(poster_url, "poster_url", POSTER_URL_MAX)?;
        }
        if rating.is_some_and(|value| !value.is_finite()) {
            return Err(MovieValidationError::NonFiniteRating);
        }

        Ok(Self {
            title,
            genre,
            description,
            poster_url,
            rating,
        })
    }
}

impl From<MovieDraft> for MovieFields {
    fn from(draft: MovieDraft) -> Self {
        Self {
            title: Some(draft.title.into()),
            genre: draft.genre,
            description: draft.description,
            poster_url: draft.poster_url,
            rating: draft.rating,
        }
    }
}

/// Persisted movie record.
#[derive(Debug, Clone, PartialEq)]
pub struct Movie {
    id: MovieId,
    draft: MovieDraft,
}

impl Movie {
    pub fn new(id: MovieId, draft: MovieDraft) -> Self {
        Self { id, draft }
    }

    pub fn id(&self) -> MovieId {
        self.id
    }

    /// Mutable fields of the record.
    pub fn draft(&self) -> &MovieDraft {
        &self.draft
    }

    pub fn into_parts(self) -> (MovieId, MovieDraft) {
        (self.id, self.draft)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn fields(title: Option<&str>) -> MovieFields {
        MovieFields {
            title: title.map(str::to_owned),
            genre: Some("Sci-Fi".to_owned()),
            description: None,
            poster_url: None,
            rating: Some(8.5),
        }
    }

    #[rstest]
    fn draft_keeps_submitted_values() {
        let draft = MovieDraft::try_from(fields(Some("Dune"))).expect("valid draft");
        assert_eq!(draft.title(), "Dune");
        assert_eq!(draft.genre(), Some("Sci-Fi"));
        assert_eq!(draft.description(), None);
        assert_eq!(draft.rating(), Some(8.5));
    }

    #[rstest]
    #[case(None, MovieValidationError::MissingTitle)]
    #[case(Some(""), MovieValidationError::BlankTitle)]
    #[case(Some("   \t"), MovieValidationError::BlankTitle)]
    fn draft_requires_title(#[case] title: Option<&str>, #[case] expected: MovieValidationError) {
        let err = MovieDraft::try_from(fields(title)).expect_err("title must be rejected");
        assert_eq!(err, expected);
        assert_eq!(err.field(), "title");
    }

    #[rstest]
    fn missing_title_uses_client_facing_message() {
        assert_eq!(
            MovieValidationError::MissingTitle.to_string(),
            "Title is required"
        );
    }

    #[rstest]
    fn overlong_genre_is_rejected() {
        let mut input = fields(Some("Dune"));
        input.genre = Some("g".repeat(GENRE_MAX + 1));
        let err = MovieDraft::try_from(input).expect_err("genre too long");
        assert_eq!(
            err,
            MovieValidationError::TooLong {
                field: "genre",
                max: GENRE_MAX
            }
        );
    }

    #[rstest]
    fn title_length_counts_characters_not_bytes() {
        let title = "é".repeat(TITLE_MAX);
        assert!(MovieTitle::new(title).is_ok());
    }

    #[rstest]
    fn non_finite_rating_is_rejected() {
        let mut input = fields(Some("Dune"));
        input.rating = Some(f64::NAN);
        assert_eq!(
            MovieDraft::try_from(input),
            Err(MovieValidationError::NonFiniteRating)
        );
    }

    #[rstest]
    fn out_of_range_rating_is_accepted() {
        let mut input = fields(Some("Dune"));
        input.rating = Some(11.0);
        assert!(MovieDraft::try_from(input).is_ok());
    }

    #[rstest]
    fn movie_id_parses_integers_only() {
        assert_eq!("42".parse::<MovieId>().ok(), Some(MovieId::new(42)));
        assert!("forty-two".parse::<MovieId>().is_err());
    }
}
