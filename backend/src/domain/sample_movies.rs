//! Sample catalogue used by `catalog-admin seed`, `catalog-admin reset` and
//! the `CATALOG_SAMPLE_DATA` startup option.

use super::{MovieDraft, MovieFields, MovieValidationError};

struct SampleMovie {
    title: &'static str,
    genre: &'static str,
    description: &'static str,
    poster_url: &'static str,
    rating: f64,
}

const SAMPLES: [SampleMovie; 5] = [
    SampleMovie {
        title: "Inception",
        genre: "Sci-Fi",
        description: "A thief who steals corporate secrets through dream-sharing technology.",
        poster_url: "https://image.tmdb.org/t/p/w500/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg",
        rating: 8.8,
    },
    SampleMovie {
        title: "The Dark Knight",
        genre: "Action",
        description: "Batman raises the stakes in his war on crime.",
        poster_url: "https://image.tmdb.org/t/p/w500/qJ2tW6WMUDux911r6m7haRef0WH.jpg",
        rating: 9.0,
    },
    SampleMovie {
        title: "Interstellar",
        genre: "Sci-Fi",
        description: "A team of explorers travel through a wormhole in space.",
        poster_url: "https://media.themoviedb.org/t/p/w600_and_h900_face/gEU2QniE6E77NI6lCU6MxlNBvIx.jpg",
        rating: 8.6,
    },
    SampleMovie {
        title: "Parasite",
        genre: "Thriller",
        description: "Greed and class discrimination threaten the newly formed symbiotic relationship.",
        poster_url: "https://image.tmdb.org/t/p/w500/7IiTTgloJzvGI1TAYymCfbfl3vT.jpg",
        rating: 8.6,
    },
    SampleMovie {
        title: "Avengers: Endgame",
        genre: "Action",
        description: "After the devastating events of Infinity War, the universe is in ruins.",
        poster_url: "https://image.tmdb.org/t/p/w500/or06FN3Dka5tukK1e9sl16pB3iy.jpg",
        rating: 8.4,
    },
];

/// The five sample movies, in insertion order.
///
/// # Examples
/// ```
/// let samples = backend::domain::sample_movies().expect("samples are valid");
/// assert_eq!(samples[0].title(), "Inception");
/// ```
pub fn sample_movies() -> Result<Vec<MovieDraft>, MovieValidationError> {
    SAMPLES
        .iter()
        .map(|sample| {
            MovieDraft::try_new(MovieFields {
                title: Some(sample.title.to_owned()),
                genre: Some(sample.genre.to_owned()),
                description: Some(sample.description.to_owned()),
                poster_url: Some(sample.poster_url.to_owned()),
                rating: Some(sample.rating),
            })
        })
        .collect()
}
