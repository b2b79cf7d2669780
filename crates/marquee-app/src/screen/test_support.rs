//! Scripted repository fakes shared by the screen tests.

use std::collections::HashMap;
use std::sync::Mutex;

use tokio::sync::mpsc;

use marquee_shared::{Movie, Resource};

use crate::repository::{MovieListRepository, SimilarMoviesRepository, EMISSION_BUFFER};

/// The canonical three-state emission sequence around a success.
pub(crate) fn script(data: Option<Vec<Movie>>) -> Vec<Resource<Vec<Movie>>> {
    vec![
        Resource::Loading(true),
        Resource::Success(data),
        Resource::Loading(false),
    ]
}

fn emit<T: Send + 'static>(states: Vec<Resource<T>>) -> mpsc::Receiver<Resource<T>> {
    let (tx, rx) = mpsc::channel(EMISSION_BUFFER);
    tokio::spawn(async move {
        for state in states {
            if tx.send(state).await.is_err() {
                break;
            }
        }
    });
    rx
}

/// [`MovieListRepository`] whose emissions are scripted per call.
pub(crate) struct FakeMovieRepository {
    lists: Mutex<HashMap<(bool, i64), Vec<Resource<Vec<Movie>>>>>,
    movies: Mutex<HashMap<i64, Vec<Resource<Movie>>>>,
}

impl FakeMovieRepository {
    pub(crate) fn new() -> Self {
        Self {
            lists: Mutex::new(HashMap::new()),
            movies: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn script_list(
        &self,
        fetch_from_remote: bool,
        page: i64,
        states: Vec<Resource<Vec<Movie>>>,
    ) {
        self.lists
            .lock()
            .unwrap()
            .insert((fetch_from_remote, page), states);
    }

    pub(crate) fn script_movie(&self, id: i64, states: Vec<Resource<Movie>>) {
        self.movies.lock().unwrap().insert(id, states);
    }
}

impl MovieListRepository for FakeMovieRepository {
    fn get_movie_list(
        &self,
        fetch_from_remote: bool,
        _person_id: i64,
        page: i64,
    ) -> mpsc::Receiver<Resource<Vec<Movie>>> {
        let states = self
            .lists
            .lock()
            .unwrap()
            .remove(&(fetch_from_remote, page))
            .unwrap_or_default();
        emit(states)
    }

    fn get_movie(&self, id: i64) -> mpsc::Receiver<Resource<Movie>> {
        let states = self.movies.lock().unwrap().remove(&id).unwrap_or_default();
        emit(states)
    }
}

/// [`SimilarMoviesRepository`] whose emissions are scripted per movie id.
pub(crate) struct FakeSimilarRepository {
    results: Mutex<HashMap<i64, Vec<Resource<Vec<Movie>>>>>,
}

impl FakeSimilarRepository {
    pub(crate) fn new() -> Self {
        Self {
            results: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn script(&self, movie_id: i64, states: Vec<Resource<Vec<Movie>>>) {
        self.results.lock().unwrap().insert(movie_id, states);
    }
}

impl SimilarMoviesRepository for FakeSimilarRepository {
    fn get_similar_movies(&self, movie_id: i64) -> mpsc::Receiver<Resource<Vec<Movie>>> {
        let states = self
            .results
            .lock()
            .unwrap()
            .remove(&movie_id)
            .unwrap_or_default();
        emit(states)
    }
}
