//! v001 -- Initial schema creation.
//!
//! Creates the single `movies` cache table.

use rusqlite::Connection;

/// SQL executed when upgrading from version 0 to version 1.
const UP_SQL: &str = r#"
-- ----------------------------------------------------------------
-- Movies (cache of the remote catalog, keyed by TMDB id)
-- ----------------------------------------------------------------
CREATE TABLE IF NOT EXISTS movies (
    id                INTEGER PRIMARY KEY NOT NULL,  -- TMDB movie id
    adult             INTEGER NOT NULL DEFAULT 0,    -- boolean 0/1
    backdrop_path     TEXT NOT NULL DEFAULT '',
    genre_ids         TEXT NOT NULL DEFAULT '',      -- comma-joined ints
    original_language TEXT NOT NULL DEFAULT '',
    original_title    TEXT NOT NULL DEFAULT '',
    overview          TEXT NOT NULL DEFAULT '',
    popularity        REAL NOT NULL DEFAULT 0,
    poster_path       TEXT NOT NULL DEFAULT '',
    release_date      TEXT NOT NULL DEFAULT '',
    title             TEXT NOT NULL DEFAULT '',
    video             INTEGER NOT NULL DEFAULT 0,    -- boolean 0/1
    vote_average      REAL NOT NULL DEFAULT 0,
    vote_count        INTEGER NOT NULL DEFAULT 0,
    cached_at         TEXT NOT NULL                  -- ISO-8601 / RFC-3339
);
"#;

/// Apply the initial migration.
pub fn up(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(UP_SQL)
}
