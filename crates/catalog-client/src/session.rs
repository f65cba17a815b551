//! Local view state driving the catalogue API.
//!
//! A [`CatalogSession`] holds what one user sees: the fetched collection, the
//! current view, the search text and the in-progress form. Every successful
//! mutation is followed by a full refetch. A failed call sets one alert and
//! leaves the rest of the state untouched; there is no retry and no optimistic
//! update.

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::carousel::Carousel;
use crate::client::CatalogApi;
use crate::error::{ClientError, FormError};
use crate::filter::filter_movies;
use crate::form::MovieForm;
use crate::model::Movie;

/// Alert shown when the collection cannot be fetched.
pub const LOAD_FAILED: &str = "Failed to load movies";
/// Alert shown when adding a movie fails.
pub const ADD_FAILED: &str = "Failed to add movie";
/// Alert shown when updating a movie fails.
pub const UPDATE_FAILED: &str = "Failed to update movie";
/// Alert shown when deleting a movie fails.
pub const DELETE_FAILED: &str = "Failed to delete movie";
/// Alert shown when the edit view is requested for a movie not in the list.
pub const UNKNOWN_MOVIE: &str = "Movie not found";
/// Alert shown when the platform refuses a location lookup.
pub const LOCATION_DENIED: &str = "Location access denied";

/// Which screen the user is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The searchable collection.
    #[default]
    List,
    /// The blank add form.
    Add,
    /// The edit form for one movie.
    Edit(i32),
}

/// Last coordinates handed to the session by the platform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
}

/// Why a session action did not complete.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// The form could not be turned into a request; nothing was sent.
    #[error(transparent)]
    Form(#[from] FormError),
    /// The API call failed.
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// One user's view of the catalogue.
pub struct CatalogSession<A> {
    api: A,
    movies: Vec<Movie>,
    view: View,
    filter: String,
    form: MovieForm,
    coordinates: Option<Coordinates>,
    alert: Option<String>,
    carousel: Arc<Carousel>,
}

impl<A: CatalogApi> CatalogSession<A> {
    /// Empty session on the list view; call [`CatalogSession::load`] to fetch.
    #[must_use]
    pub fn new(api: A) -> Self {
        Self {
            api,
            movies: Vec::new(),
            view: View::List,
            filter: String::new(),
            form: MovieForm::default(),
            coordinates: None,
            alert: None,
            carousel: Arc::new(Carousel::default()),
        }
    }

    /// Fetched collection in service order.
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Current screen.
    #[must_use]
    pub const fn view(&self) -> View {
        self.view
    }

    /// Search text.
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// In-progress form.
    #[must_use]
    pub const fn form(&self) -> &MovieForm {
        &self.form
    }

    /// Last known coordinates.
    #[must_use]
    pub const fn coordinates(&self) -> Option<Coordinates> {
        self.coordinates
    }

    /// Pending alert, if any.
    #[must_use]
    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    /// Take the pending alert, clearing it.
    pub fn dismiss_alert(&mut self) -> Option<String> {
        self.alert.take()
    }

    /// Handle for driving the featured-movie carousel with
    /// [`run_carousel`](crate::run_carousel).
    #[must_use]
    pub fn carousel(&self) -> Arc<Carousel> {
        Arc::clone(&self.carousel)
    }

    /// Featured movie at the carousel position.
    #[must_use]
    pub fn featured(&self) -> Option<&Movie> {
        self.movies.get(self.carousel.current())
    }

    /// Movies matching the search text. Never calls the service.
    #[must_use]
    pub fn visible_movies(&self) -> Vec<&Movie> {
        filter_movies(&self.movies, &self.filter)
    }

    /// Replace the search text.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Replace the in-progress form.
    pub fn set_form(&mut self, form: MovieForm) {
        self.form = form;
    }

    /// Store coordinates obtained by the platform.
    pub fn set_coordinates(&mut self, coordinates: Coordinates) {
        self.coordinates = Some(coordinates);
    }

    /// Record a refused location lookup.
    pub fn location_denied(&mut self) {
        self.alert = Some(LOCATION_DENIED.to_owned());
    }

    /// Go to the list view, discarding the form.
    pub fn show_list(&mut self) {
        self.view = View::List;
        self.form = MovieForm::default();
    }

    /// Go to a blank add form.
    pub fn show_add(&mut self) {
        self.view = View::Add;
        self.form = MovieForm::default();
    }

    /// Go to the edit form for `id`, pre-filled from the fetched collection.
    ///
    /// Raises an alert and stays put when `id` is not in the collection.
    pub fn show_edit(&mut self, id: i32) {
        match self.movies.iter().find(|movie| movie.id == id) {
            Some(movie) => {
                self.form = MovieForm::from_movie(movie);
                self.view = View::Edit(id);
            }
            None => self.alert = Some(UNKNOWN_MOVIE.to_owned()),
        }
    }

    /// Fetch the full collection, replacing the local copy.
    ///
    /// # Errors
    /// The API failure; the previous collection is kept.
    pub async fn load(&mut self) -> Result<(), SessionError> {
        match self.api.list_movies().await {
            Ok(movies) => {
                self.carousel.set_len(movies.len());
                self.movies = movies;
                Ok(())
            }
            Err(error) => Err(self.fail(LOAD_FAILED, error)),
        }
    }

    /// Submit the form: add on the add view, update on an edit view.
    ///
    /// On success the session returns to the list and refetches. Does nothing
    /// on the list view.
    ///
    /// # Errors
    /// [`SessionError::Form`] when the form is invalid, or the API failure.
    /// The view and form are left as they were.
    pub async fn submit_form(&mut self) -> Result<(), SessionError> {
        let (failure, outcome) = match self.view {
            View::List => return Ok(()),
            View::Add => {
                let request = self.form.to_request().map_err(|err| self.reject_form(err))?;
                (ADD_FAILED, self.api.create_movie(&request).await.map(drop))
            }
            View::Edit(id) => {
                let request = self.form.to_request().map_err(|err| self.reject_form(err))?;
                (UPDATE_FAILED, self.api.update_movie(id, &request).await)
            }
        };
        if let Err(error) = outcome {
            return Err(self.fail(failure, error));
        }
        self.show_list();
        self.load().await
    }

    /// Delete movie `id`, then refetch.
    ///
    /// # Errors
    /// The API failure; the collection is left as it was.
    pub async fn delete(&mut self, id: i32) -> Result<(), SessionError> {
        if let Err(error) = self.api.delete_movie(id).await {
            return Err(self.fail(DELETE_FAILED, error));
        }
        if self.view == View::Edit(id) {
            self.show_list();
        }
        self.load().await
    }

    fn reject_form(&mut self, error: FormError) -> SessionError {
        self.alert = Some(error.to_string());
        SessionError::Form(error)
    }

    fn fail(&mut self, alert: &str, error: ClientError) -> SessionError {
        warn!(%error, alert, "catalogue call failed");
        self.alert = Some(alert.to_owned());
        SessionError::Client(error)
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
