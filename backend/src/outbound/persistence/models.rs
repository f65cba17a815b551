//! Internal Diesel row structs for database operations.
//!
//! These types are implementation details of the persistence layer and must
//! never be exposed to the domain.

use diesel::prelude::*;

use crate::domain::MovieDraft;

use super::schema::movies;

/// Row struct for reading from the movies table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = movies)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MovieRow {
    pub id: i32,
    pub title: String,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub poster_url: Option<String>,
    pub rating: Option<f64>,
}

/// Insertable and changeset struct built from a validated draft.
///
/// `treat_none_as_null` makes an update write NULL for absent fields, so an
/// update replaces the whole record instead of merging.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = movies)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct MovieWriteRow<'a> {
    pub title: &'a str,
    pub genre: Option<&'a str>,
    pub description: Option<&'a str>,
    pub poster_url: Option<&'a str>,
    pub rating: Option<f64>,
}

impl<'a> From<&'a MovieDraft> for MovieWriteRow<'a> {
    fn from(draft: &'a MovieDraft) -> Self {
        Self {
            title: draft.title(),
            genre: draft.genre(),
            description: draft.description(),
            poster_url: draft.poster_url(),
            rating: draft.rating(),
        }
    }
}
