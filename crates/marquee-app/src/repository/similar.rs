//! The similar-movies repository.
//!
//! Stateless pass-through to the remote catalog: no caching tier, no retry.
//! Results map transfer→domain directly.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::error;

use marquee_api::MovieCatalog;
use marquee_shared::{Movie, Resource};

use crate::mapper::movie_from_dto;
use crate::repository::EMISSION_BUFFER;

/// Access to the per-movie "similar movies" query.
pub trait SimilarMoviesRepository: Send + Sync {
    /// Fetch movies similar to the given movie, once.
    fn get_similar_movies(&self, movie_id: i64) -> mpsc::Receiver<Resource<Vec<Movie>>>;
}

/// [`SimilarMoviesRepository`] backed by the remote catalog.
pub struct TmdbSimilarMovies {
    catalog: Arc<dyn MovieCatalog>,
}

impl TmdbSimilarMovies {
    pub fn new(catalog: Arc<dyn MovieCatalog>) -> Self {
        Self { catalog }
    }
}

impl SimilarMoviesRepository for TmdbSimilarMovies {
    fn get_similar_movies(&self, movie_id: i64) -> mpsc::Receiver<Resource<Vec<Movie>>> {
        let (tx, rx) = mpsc::channel(EMISSION_BUFFER);
        let catalog = Arc::clone(&self.catalog);

        tokio::spawn(async move {
            let _ = tx.send(Resource::Loading(true)).await;

            match catalog.similar_movies(movie_id).await {
                Ok(dto) => {
                    let movies = dto.results.iter().map(movie_from_dto).collect();
                    let _ = tx.send(Resource::Success(Some(movies))).await;
                }
                Err(e) => {
                    error!(error = %e, movie_id, "similar movies fetch failed");
                    let _ = tx
                        .send(Resource::Error(format!(
                            "Failed to load similar movies: {e}"
                        )))
                        .await;
                }
            }

            let _ = tx.send(Resource::Loading(false)).await;
        });

        rx
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use async_trait::async_trait;

    use marquee_api::{ApiError, MovieDto, MovieListDto};

    struct FakeCatalog {
        fail: bool,
    }

    #[async_trait]
    impl MovieCatalog for FakeCatalog {
        async fn discover_movies(
            &self,
            _person_id: i64,
            _page: i64,
        ) -> Result<MovieListDto, ApiError> {
            unimplemented!("not used by the similar-movies repository")
        }

        async fn similar_movies(&self, _movie_id: i64) -> Result<MovieListDto, ApiError> {
            if self.fail {
                return Err(ApiError::Status(reqwest::StatusCode::NOT_FOUND));
            }
            Ok(MovieListDto {
                page: 1,
                results: vec![
                    MovieDto {
                        id: Some(11),
                        title: Some("Alike".into()),
                        ..MovieDto::default()
                    },
                    MovieDto {
                        id: Some(12),
                        title: Some("Akin".into()),
                        ..MovieDto::default()
                    },
                ],
                total_pages: 1,
                total_results: 2,
            })
        }
    }

    async fn collect(mut rx: mpsc::Receiver<Resource<Vec<Movie>>>) -> Vec<Resource<Vec<Movie>>> {
        let mut states = Vec::new();
        while let Some(state) = rx.recv().await {
            states.push(state);
        }
        states
    }

    #[tokio::test]
    async fn success_maps_every_result() {
        let repository = TmdbSimilarMovies::new(Arc::new(FakeCatalog { fail: false }));

        let states = collect(repository.get_similar_movies(1)).await;

        assert_eq!(states.len(), 3);
        assert_eq!(states[0], Resource::Loading(true));
        let movies = states[1].data().unwrap();
        assert_eq!(movies.len(), 2);
        assert_eq!(movies[0].title, "Alike");
        assert_eq!(states[2], Resource::Loading(false));
    }

    #[tokio::test]
    async fn failure_embeds_the_error_text() {
        let repository = TmdbSimilarMovies::new(Arc::new(FakeCatalog { fail: true }));

        let states = collect(repository.get_similar_movies(1)).await;

        assert_eq!(states.len(), 3);
        match &states[1] {
            Resource::Error(message) => {
                assert!(message.starts_with("Failed to load similar movies:"));
            }
            other => panic!("expected error, got {other:?}"),
        }
        assert_eq!(states[2], Resource::Loading(false));
    }
}
