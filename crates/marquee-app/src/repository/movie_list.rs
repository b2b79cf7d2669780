//! The cached movie-list repository.

use std::sync::{Arc, Mutex};

use tokio::sync::mpsc;
use tracing::error;

use marquee_api::MovieCatalog;
use marquee_shared::constants::{MSG_CANT_LOAD_MOVIE, MSG_CANT_LOAD_MOVIES};
use marquee_shared::{Movie, Resource};
use marquee_store::{Database, MovieRow};

use crate::mapper::{movie_from_row, movie_row_from_dto};
use crate::repository::EMISSION_BUFFER;

/// Access to the movie list and single-movie lookups.
///
/// Implementations decide between the local cache and the remote catalog;
/// callers only see the emitted `Resource` sequence.
pub trait MovieListRepository: Send + Sync {
    /// Retrieve one page of movies for the given person.
    ///
    /// When the cache is non-empty and `fetch_from_remote` is false, the
    /// emitted success contains the whole cache snapshot and no remote call
    /// is made. Otherwise the requested page is fetched, bulk-upserted into
    /// the cache, and the success contains exactly the fetched page — never
    /// a union with older cached pages.
    fn get_movie_list(
        &self,
        fetch_from_remote: bool,
        person_id: i64,
        page: i64,
    ) -> mpsc::Receiver<Resource<Vec<Movie>>>;

    /// Retrieve a single movie from the cache. No remote fallback.
    fn get_movie(&self, id: i64) -> mpsc::Receiver<Resource<Movie>>;
}

/// [`MovieListRepository`] backed by the remote catalog and the local store.
pub struct CachedMovieRepository {
    catalog: Arc<dyn MovieCatalog>,
    db: Arc<Mutex<Database>>,
}

impl CachedMovieRepository {
    pub fn new(catalog: Arc<dyn MovieCatalog>, db: Arc<Mutex<Database>>) -> Self {
        Self { catalog, db }
    }
}

impl MovieListRepository for CachedMovieRepository {
    fn get_movie_list(
        &self,
        fetch_from_remote: bool,
        person_id: i64,
        page: i64,
    ) -> mpsc::Receiver<Resource<Vec<Movie>>> {
        let (tx, rx) = mpsc::channel(EMISSION_BUFFER);
        let catalog = Arc::clone(&self.catalog);
        let db = Arc::clone(&self.db);

        tokio::spawn(async move {
            let _ = tx.send(Resource::Loading(true)).await;

            // Cache check. The lock is released before any await point.
            let local = read_cache(&db);
            let local = match local {
                Ok(rows) => rows,
                Err(message) => {
                    error!(%message, "failed to read movie cache");
                    let _ = tx.send(Resource::Error(MSG_CANT_LOAD_MOVIES.into())).await;
                    let _ = tx.send(Resource::Loading(false)).await;
                    return;
                }
            };

            if !local.is_empty() && !fetch_from_remote {
                let movies = local.iter().map(movie_from_row).collect();
                let _ = tx.send(Resource::Success(Some(movies))).await;
                let _ = tx.send(Resource::Loading(false)).await;
                return;
            }

            // Remote fetch. Any failure collapses to the fixed user message.
            let page_dto = match catalog.discover_movies(person_id, page).await {
                Ok(dto) => dto,
                Err(e) => {
                    error!(error = %e, person_id, page, "remote movie fetch failed");
                    let _ = tx.send(Resource::Error(MSG_CANT_LOAD_MOVIES.into())).await;
                    let _ = tx.send(Resource::Loading(false)).await;
                    return;
                }
            };

            let rows: Vec<MovieRow> = page_dto.results.iter().map(movie_row_from_dto).collect();

            if let Err(message) = store_page(&db, &rows) {
                error!(%message, page, "failed to persist fetched page");
                let _ = tx.send(Resource::Error(MSG_CANT_LOAD_MOVIES.into())).await;
                let _ = tx.send(Resource::Loading(false)).await;
                return;
            }

            // The emission reflects only the rows just stored, not the whole
            // cache: the home screen appends each page to its accumulator.
            let movies = rows.iter().map(movie_from_row).collect();
            let _ = tx.send(Resource::Success(Some(movies))).await;
            let _ = tx.send(Resource::Loading(false)).await;
        });

        rx
    }

    fn get_movie(&self, id: i64) -> mpsc::Receiver<Resource<Movie>> {
        let (tx, rx) = mpsc::channel(EMISSION_BUFFER);
        let db = Arc::clone(&self.db);

        tokio::spawn(async move {
            let _ = tx.send(Resource::Loading(true)).await;

            let looked_up = match db.lock() {
                Ok(db) => db.get_movie_by_id(id).map_err(|e| e.to_string()),
                Err(e) => Err(format!("lock poisoned: {e}")),
            };

            match looked_up {
                Ok(row) => {
                    let _ = tx
                        .send(Resource::Success(Some(movie_from_row(&row))))
                        .await;
                }
                Err(message) => {
                    error!(%message, id, "movie lookup failed");
                    let _ = tx.send(Resource::Error(MSG_CANT_LOAD_MOVIE.into())).await;
                }
            }

            let _ = tx.send(Resource::Loading(false)).await;
        });

        rx
    }
}

fn read_cache(db: &Arc<Mutex<Database>>) -> Result<Vec<MovieRow>, String> {
    match db.lock() {
        Ok(db) => db.get_movies().map_err(|e| e.to_string()),
        Err(e) => Err(format!("lock poisoned: {e}")),
    }
}

fn store_page(db: &Arc<Mutex<Database>>, rows: &[MovieRow]) -> Result<(), String> {
    match db.lock() {
        Ok(mut db) => db.upsert_movies(rows).map_err(|e| e.to_string()),
        Err(e) => Err(format!("lock poisoned: {e}")),
    }
}
