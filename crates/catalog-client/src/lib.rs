//! Client for the movie catalogue service.
//!
//! [`CatalogClient`] talks to the REST API. [`CatalogSession`] layers the
//! state of one user's screen on top of it: the fetched list, a search filter,
//! the add/edit form, optional coordinates and a featured-movie carousel.
//!
//! # Example
//!
//! ```no_run
//! use catalog_client::{CatalogClient, CatalogSession, MovieForm};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let client = CatalogClient::new("http://localhost:5000")?;
//! let mut session = CatalogSession::new(client);
//! session.load().await?;
//!
//! session.show_add();
//! session.set_form(MovieForm::default().with_title("Dune").with_rating("8.5"));
//! session.submit_form().await?;
//!
//! session.set_filter("dune");
//! assert_eq!(session.visible_movies().len(), 1);
//! # Ok(())
//! # }
//! ```

mod carousel;
mod client;
mod error;
mod filter;
mod form;
mod model;
mod session;

pub use carousel::{Carousel, run_carousel};
pub use client::{CatalogApi, CatalogClient};
pub use error::{ClientError, FormError};
pub use filter::{filter_movies, matches};
pub use form::MovieForm;
pub use model::{Movie, MovieRequest};
pub use session::{
    ADD_FAILED, CatalogSession, Coordinates, DELETE_FAILED, LOAD_FAILED, LOCATION_DENIED,
    SessionError, UNKNOWN_MOVIE, UPDATE_FAILED, View,
};
