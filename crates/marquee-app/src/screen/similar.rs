//! The similar-movies side feature.
//!
//! Reuses the list-screen state shape, but with replace semantics: each
//! fetch swaps the whole list and never advances the page counter.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

use marquee_shared::Resource;

use crate::repository::SimilarMoviesRepository;
use crate::screen::MovieListState;

/// Events the similar-movies view reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimilarMoviesEvent {
    /// Fetch movies similar to the given movie id.
    FetchSimilarMovies(i64),
}

/// State holder for the similar-movies view.
pub struct SimilarMoviesController {
    repository: Arc<dyn SimilarMoviesRepository>,
    state: Arc<watch::Sender<MovieListState>>,
    inflight: Option<JoinHandle<()>>,
}

impl SimilarMoviesController {
    pub fn new(repository: Arc<dyn SimilarMoviesRepository>) -> Self {
        let (state, _) = watch::channel(MovieListState::default());
        Self {
            repository,
            state: Arc::new(state),
            inflight: None,
        }
    }

    /// The latest published snapshot.
    pub fn state(&self) -> MovieListState {
        self.state.borrow().clone()
    }

    /// Observe every snapshot the holder publishes.
    pub fn subscribe(&self) -> watch::Receiver<MovieListState> {
        self.state.subscribe()
    }

    /// Handle a UI event. A new event supersedes any fetch still in flight.
    pub fn on_event(&mut self, event: SimilarMoviesEvent) {
        match event {
            SimilarMoviesEvent::FetchSimilarMovies(movie_id) => self.fetch(movie_id),
        }
    }

    fn fetch(&mut self, movie_id: i64) {
        if let Some(task) = self.inflight.take() {
            task.abort();
        }

        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);

        self.inflight = Some(tokio::spawn(async move {
            let mut emissions = repository.get_similar_movies(movie_id);

            while let Some(resource) = emissions.recv().await {
                match resource {
                    Resource::Loading(flag) => state.send_modify(|s| s.is_loading = flag),
                    Resource::Error(message) => {
                        warn!(%message, movie_id, "similar movies load failed");
                        state.send_modify(|s| s.is_loading = false);
                    }
                    Resource::Success(Some(movies)) => state.send_modify(|s| {
                        s.movie_list = movies;
                        s.is_loading = false;
                    }),
                    Resource::Success(None) => {}
                }
            }
        }));
    }

    /// Wait for the fetch in flight (if any) to settle.
    pub async fn idle(&mut self) {
        if let Some(task) = self.inflight.take() {
            let _ = task.await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::test_support::{script, FakeSimilarRepository};

    use marquee_shared::Movie;

    fn movie(id: i64, title: &str) -> Movie {
        Movie {
            id,
            title: title.into(),
            original_title: title.into(),
            overview: String::new(),
            poster_path: String::new(),
            backdrop_path: String::new(),
        }
    }

    #[tokio::test]
    async fn fetch_replaces_the_list() {
        let repository = FakeSimilarRepository::new();
        repository.script(1, script(Some(vec![movie(10, "First"), movie(11, "Second")])));
        repository.script(2, script(Some(vec![movie(20, "Other")])));

        let mut controller = SimilarMoviesController::new(Arc::new(repository));

        controller.on_event(SimilarMoviesEvent::FetchSimilarMovies(1));
        controller.idle().await;
        assert_eq!(controller.state().movie_list.len(), 2);

        // A second fetch replaces, never appends.
        controller.on_event(SimilarMoviesEvent::FetchSimilarMovies(2));
        controller.idle().await;

        let state = controller.state();
        assert_eq!(state.movie_list.len(), 1);
        assert_eq!(state.movie_list[0].title, "Other");
        assert_eq!(state.page, 1);
        assert!(!state.is_loading);
    }

    #[tokio::test]
    async fn error_only_stops_the_spinner() {
        let repository = FakeSimilarRepository::new();
        repository.script(
            1,
            vec![
                Resource::Loading(true),
                Resource::Error("Failed to load similar movies: status 404".into()),
                Resource::Loading(false),
            ],
        );

        let mut controller = SimilarMoviesController::new(Arc::new(repository));
        controller.on_event(SimilarMoviesEvent::FetchSimilarMovies(1));
        controller.idle().await;

        let state = controller.state();
        assert!(state.movie_list.is_empty());
        assert!(!state.is_loading);
    }
}
