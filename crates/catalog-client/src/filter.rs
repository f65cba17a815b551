//! Client-side search over the fetched collection.

use crate::model::Movie;

/// Whether `movie` matches the search text.
///
/// Case-insensitive substring match over title and genre; blank text matches
/// everything.
#[must_use]
pub fn matches(movie: &Movie, filter: &str) -> bool {
    let needle = filter.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    movie.title.to_lowercase().contains(&needle)
        || movie
            .genre
            .as_deref()
            .is_some_and(|genre| genre.to_lowercase().contains(&needle))
}

/// Movies matching `filter`, in collection order.
#[must_use]
pub fn filter_movies<'a>(movies: &'a [Movie], filter: &str) -> Vec<&'a Movie> {
    movies.iter().filter(|movie| matches(movie, filter)).collect()
}
