//! The home screen: a paginated movie list for a fixed person.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::warn;

use marquee_shared::constants::DEFAULT_PERSON_ID;
use marquee_shared::{Movie, Resource};

use crate::repository::MovieListRepository;

/// Snapshot of the home screen.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieListState {
    pub is_loading: bool,
    /// Next page to request; advances by one on every successful load.
    pub page: i64,
    /// Accumulated movies across all loaded pages, in load order.
    pub movie_list: Vec<Movie>,
}

impl Default for MovieListState {
    fn default() -> Self {
        Self {
            is_loading: false,
            page: 1,
            movie_list: Vec::new(),
        }
    }
}

/// Events the home screen reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovieListEvent {
    /// Initial load; serves from the cache when it is populated.
    LoadMovieList,
    /// Load the next page from the remote catalog and append it.
    Paginate,
}

/// State holder for the home screen.
pub struct HomeController {
    repository: Arc<dyn MovieListRepository>,
    person_id: i64,
    state: Arc<watch::Sender<MovieListState>>,
    inflight: Option<JoinHandle<()>>,
}

impl HomeController {
    pub fn new(repository: Arc<dyn MovieListRepository>) -> Self {
        Self::with_person(repository, DEFAULT_PERSON_ID)
    }

    pub fn with_person(repository: Arc<dyn MovieListRepository>, person_id: i64) -> Self {
        let (state, _) = watch::channel(MovieListState::default());
        Self {
            repository,
            person_id,
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

    /// Handle a UI event. A new event supersedes any load still in flight.
    pub fn on_event(&mut self, event: MovieListEvent) {
        let fetch_from_remote = match event {
            MovieListEvent::LoadMovieList => false,
            MovieListEvent::Paginate => true,
        };
        self.load(fetch_from_remote);
    }

    fn load(&mut self, fetch_from_remote: bool) {
        if let Some(task) = self.inflight.take() {
            task.abort();
        }

        let repository = Arc::clone(&self.repository);
        let state = Arc::clone(&self.state);
        let person_id = self.person_id;

        self.inflight = Some(tokio::spawn(async move {
            let page = state.borrow().page;
            let mut emissions = repository.get_movie_list(fetch_from_remote, person_id, page);

            while let Some(resource) = emissions.recv().await {
                match resource {
                    Resource::Loading(flag) => state.send_modify(|s| s.is_loading = flag),
                    Resource::Error(message) => {
                        // The message is not kept in state; the spinner just stops.
                        warn!(%message, page, "movie list load failed");
                        state.send_modify(|s| s.is_loading = false);
                    }
                    Resource::Success(Some(movies)) => state.send_modify(|s| {
                        s.movie_list.extend(movies);
                        s.page += 1;
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
