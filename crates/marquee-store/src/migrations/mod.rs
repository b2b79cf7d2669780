//! Schema migrations for the movie cache.
//!
//! The applied schema version lives in SQLite's `user_version` pragma.
//! Opening a cache file applies every migration newer than the stored
//! version, so an old file upgrades in place and a fresh one gets the full
//! schema.

pub mod v001_initial;

use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Schema version this build of the crate expects.
const CURRENT_VERSION: u32 = 1;

/// Bring the connected database up to [`CURRENT_VERSION`].
pub fn run_migrations(conn: &Connection) -> Result<()> {
    let applied: u32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::debug!(applied, expected = CURRENT_VERSION, "movie cache schema check");

    if applied < 1 {
        tracing::info!("creating movie cache schema (v001)");
        v001_initial::up(conn).map_err(|e| StoreError::Migration(e.to_string()))?;
        conn.pragma_update(None, "user_version", 1)?;
    }

    Ok(())
}
