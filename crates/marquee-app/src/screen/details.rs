//! The detail screen: a single movie looked up from the cache.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

use marquee_shared::{Movie, Resource};

use crate::repository::MovieListRepository;

/// Snapshot of the detail screen.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailsState {
    pub is_loading: bool,
    pub movie: Option<Movie>,
}

/// State holder for the detail screen.
///
/// Takes its movie id at construction; a fresh holder is created per screen
/// instantiation.
pub struct DetailsController {
    repository: Arc<dyn MovieListRepository>,
    movie_id: i64,
    state: Arc<watch::Sender<DetailsState>>,
    inflight: Option<JoinHandle<()>>,
}

impl DetailsController {
    pub fn new(repository: Arc<dyn MovieListRepository>, movie_id: i64) -> Self {
        let (state, _) = watch::channel(DetailsState::default());
        Self {
            repository,
            movie_id,
            state: Arc::new(state),
            inflight: None,
        }
    }

    /// The latest published snapshot.
    pub fn state(&self) -> DetailsState {
        self.state.borrow().clone()
    }

    /// Observe every snapshot the holder publishes.
    pub fn subscribe(&self) -> watch::Receiver<DetailsState> {
        self.state.subscribe()
    }

    /// Load the movie. A repeated call supersedes the one in flight.
    pub fn load(&mut self) {
        if let Some(task) = self.inflight.take() {
            task.abort();
        }

        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);
        let movie_id = self.movie_id;

        self.inflight = Some(tokio::spawn(async move {
            let mut emissions = repository.get_movie(movie_id);

            while let Some(resource) = emissions.recv().await {
                match resource {
                    Resource::Loading(flag) => state.send_modify(|s| s.is_loading = flag),
                    Resource::Error(message) => {
                        warn!(%message, movie_id, "movie details load failed");
                        state.send_modify(|s| s.is_loading = false);
                    }
                    Resource::Success(Some(movie)) => state.send_modify(|s| {
                        s.is_loading = false;
                        s.movie = Some(movie);
                    }),
                    Resource::Success(None) => {}
                }
            }
        }));
    }

    /// Wait for the load in flight (if any) to settle.
    pub async fn idle(&mut self) {
        if let Some(task) = self.inflight.take() {
            let _ = task.await;
        }
    }
}
