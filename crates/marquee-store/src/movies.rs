//! CRUD operations for [`MovieRow`] records.

use chrono::{DateTime, Utc};
use rusqlite::params;

use crate::database::Database;
use crate::error::{Result, StoreError};
use crate::models::MovieRow;

impl Database {
    // ------------------------------------------------------------------
    // Create / update
    // ------------------------------------------------------------------

    /// Insert or overwrite a batch of movies in one transaction.
    ///
    /// Rows with an existing id are replaced wholesale; the `cached_at`
    /// column is stamped with the current time on every write.
    pub fn upsert_movies(&mut self, movies: &[MovieRow]) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        let tx = self.conn_mut().transaction()?;

        {
            let mut stmt = tx.prepare(
                "INSERT INTO movies (id, adult, backdrop_path, genre_ids, original_language,
                                     original_title, overview, popularity, poster_path,
                                     release_date, title, video, vote_average, vote_count,
                                     cached_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
                 ON CONFLICT(id) DO UPDATE SET
                     adult             = excluded.adult,
                     backdrop_path     = excluded.backdrop_path,
                     genre_ids         = excluded.genre_ids,
                     original_language = excluded.original_language,
                     original_title    = excluded.original_title,
                     overview          = excluded.overview,
                     popularity        = excluded.popularity,
                     poster_path       = excluded.poster_path,
                     release_date      = excluded.release_date,
                     title             = excluded.title,
                     video             = excluded.video,
                     vote_average      = excluded.vote_average,
                     vote_count        = excluded.vote_count,
                     cached_at         = excluded.cached_at",
            )?;

            for movie in movies {
                stmt.execute(params![
                    movie.id,
                    movie.adult,
                    movie.backdrop_path,
                    movie.genre_ids,
                    movie.original_language,
                    movie.original_title,
                    movie.overview,
                    movie.popularity,
                    movie.poster_path,
                    movie.release_date,
                    movie.title,
                    movie.video,
                    movie.vote_average,
                    movie.vote_count,
                    now,
                ])?;
            }
        }

        tx.commit()?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Read
    // ------------------------------------------------------------------

    /// Fetch every cached movie.
    pub fn get_movies(&self) -> Result<Vec<MovieRow>> {
        let mut stmt = self.conn().prepare(
            "SELECT id, adult, backdrop_path, genre_ids, original_language, original_title,
                    overview, popularity, poster_path, release_date, title, video,
                    vote_average, vote_count
             FROM movies",
        )?;

        let rows = stmt.query_map([], row_to_movie)?;

        let mut movies = Vec::new();
        for row in rows {
            movies.push(row?);
        }
        Ok(movies)
    }

    /// Fetch a single movie by TMDB id.
    pub fn get_movie_by_id(&self, id: i64) -> Result<MovieRow> {
        self.conn()
            .query_row(
                "SELECT id, adult, backdrop_path, genre_ids, original_language, original_title,
                        overview, popularity, poster_path, release_date, title, video,
                        vote_average, vote_count
                 FROM movies WHERE id = ?1",
                params![id],
                row_to_movie,
            )
            .map_err(|e| match e {
                rusqlite::Error::QueryReturnedNoRows => StoreError::NotFound,
                other => StoreError::Sqlite(other),
            })
    }

    /// When the cache was last written to, or `None` for an empty cache.
    pub fn cache_refreshed_at(&self) -> Result<Option<DateTime<Utc>>> {
        let latest: Option<String> = self.conn().query_row(
            "SELECT MAX(cached_at) FROM movies",
            [],
            |row| row.get(0),
        )?;

        match latest {
            Some(ts) => {
                let parsed = DateTime::parse_from_rfc3339(&ts)?.with_timezone(&Utc);
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Map a `rusqlite::Row` to a [`MovieRow`].
fn row_to_movie(row: &rusqlite::Row<'_>) -> rusqlite::Result<MovieRow> {
    Ok(MovieRow {
        id: row.get(0)?,
        adult: row.get(1)?,
        backdrop_path: row.get(2)?,
        genre_ids: row.get(3)?,
        original_language: row.get(4)?,
        original_title: row.get(5)?,
        overview: row.get(6)?,
        popularity: row.get(7)?,
        poster_path: row.get(8)?,
        release_date: row.get(9)?,
        title: row.get(10)?,
        video: row.get(11)?,
        vote_average: row.get(12)?,
        vote_count: row.get(13)?,
    })
}
