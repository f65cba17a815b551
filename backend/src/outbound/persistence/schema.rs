//! Diesel table definitions for the movie catalogue.
//!
//! Kept in step with `backend/migrations` by hand; `diesel print-schema`
//! against a migrated database reproduces it.

diesel::table! {
    /// Movie records. `id` is backed by a sequence and never reused.
    movies (id) {
        id -> Int4,
        /// Required, at most 255 characters.
        title -> Varchar,
        genre -> Nullable<Varchar>,
        description -> Nullable<Text>,
        poster_url -> Nullable<Varchar>,
        rating -> Nullable<Float8>,
    }
}
