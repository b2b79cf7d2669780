//! Transfer objects decoded from TMDB JSON responses.
//!
//! Every movie field is optional because the upstream source may omit any of
//! them; defaults are applied later by the mapper, never here.

use serde::{Deserialize, Serialize};

/// A single movie item as returned by `discover/movie` and
/// `movie/{movie_id}/similar`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieDto {
    pub adult: Option<bool>,
    pub backdrop_path: Option<String>,
    pub genre_ids: Option<Vec<i64>>,
    pub id: Option<i64>,
    pub original_language: Option<String>,
    pub original_title: Option<String>,
    pub overview: Option<String>,
    pub popularity: Option<f64>,
    pub poster_path: Option<String>,
    pub release_date: Option<String>,
    pub title: Option<String>,
    pub video: Option<bool>,
    pub vote_average: Option<f64>,
    pub vote_count: Option<i64>,
}

/// Paginated envelope shared by both list endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MovieListDto {
    pub page: i64,
    pub results: Vec<MovieDto>,
    pub total_pages: i64,
    pub total_results: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_sparse_movie() {
        // The catalog omits fields freely; all of them must decode to None.
        let json = r#"{"id": 42, "title": "Sparse"}"#;
        let dto: MovieDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.id, Some(42));
        assert_eq!(dto.title.as_deref(), Some("Sparse"));
        assert_eq!(dto.poster_path, None);
        assert_eq!(dto.genre_ids, None);
    }

    #[test]
    fn decodes_list_envelope() {
        let json = r#"{
            "page": 1,
            "results": [{"id": 1}, {"id": 2}],
            "total_pages": 10,
            "total_results": 200
        }"#;
        let dto: MovieListDto = serde_json::from_str(json).unwrap();
        assert_eq!(dto.page, 1);
        assert_eq!(dto.results.len(), 2);
        assert_eq!(dto.total_pages, 10);
    }
}
