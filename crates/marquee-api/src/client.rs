//! The reqwest-backed TMDB client and the trait seam above it.

use async_trait::async_trait;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result};
use crate::model::MovieListDto;

/// Read operations against the remote movie catalog.
///
/// The repository layer holds a `dyn MovieCatalog` so tests can substitute a
/// scripted fake for the real HTTP client.
#[async_trait]
pub trait MovieCatalog: Send + Sync {
    /// Fetch one page of movies featuring the given person.
    async fn discover_movies(&self, person_id: i64, page: i64) -> Result<MovieListDto>;

    /// Fetch movies similar to the given movie.
    async fn similar_movies(&self, movie_id: i64) -> Result<MovieListDto>;
}

/// HTTP implementation of [`MovieCatalog`].
pub struct TmdbClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl TmdbClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    async fn get_movie_list(&self, url: String, query: &[(&str, String)]) -> Result<MovieListDto> {
        debug!(%url, "requesting movie list");

        let resp = self.http.get(&url).query(query).send().await?;
        if !resp.status().is_success() {
            return Err(ApiError::Status(resp.status()));
        }

        Ok(resp.json::<MovieListDto>().await?)
    }
}

#[async_trait]
impl MovieCatalog for TmdbClient {
    async fn discover_movies(&self, person_id: i64, page: i64) -> Result<MovieListDto> {
        let url = format!("{}discover/movie", self.config.base_url);
        self.get_movie_list(
            url,
            &[
                ("page", page.to_string()),
                ("with_people", person_id.to_string()),
                ("api_key", self.config.api_key.clone()),
            ],
        )
        .await
    }

    async fn similar_movies(&self, movie_id: i64) -> Result<MovieListDto> {
        let url = format!("{}movie/{movie_id}/similar", self.config.base_url);
        self.get_movie_list(url, &[("api_key", self.config.api_key.clone())])
            .await
    }
}
