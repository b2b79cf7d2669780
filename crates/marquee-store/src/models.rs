//! The persisted movie shape.
//!
//! Unlike the transfer object, every field here is non-null: the mapper
//! substitutes fixed defaults before anything reaches the store.

use serde::{Deserialize, Serialize};

/// A cached movie record. Primary key: [`MovieRow::id`].
///
/// Rows are created or overwritten by the bulk upsert after a successful
/// remote fetch, read back at cache-check time, and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieRow {
    pub adult: bool,
    /// Relative backdrop path, empty when the source omitted it.
    pub backdrop_path: String,
    /// Genre ids joined as a comma-separated string (e.g. `"28,12,878"`).
    pub genre_ids: String,
    /// TMDB movie id; `-1` when the source omitted it.
    pub id: i64,
    pub original_language: String,
    pub original_title: String,
    pub overview: String,
    pub popularity: f64,
    pub poster_path: String,
    /// Release date as `YYYY-MM-DD`, empty when absent.
    pub release_date: String,
    pub title: String,
    pub video: bool,
    pub vote_average: f64,
    pub vote_count: i64,
}
