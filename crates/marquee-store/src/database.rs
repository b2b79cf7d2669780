//! The cache handle.
//!
//! [`Database`] owns the `rusqlite::Connection` behind the movie cache and
//! migrates the schema on open, so every caller sees a current layout.

use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use rusqlite::Connection;

use crate::error::{Result, StoreError};
use crate::migrations;

/// Handle to the movie cache database.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the cache in the platform data directory, creating it on first
    /// run (on Linux: `~/.local/share/marquee/marquee.db`).
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("com", "marquee", "marquee").ok_or(StoreError::NoDataDir)?;
        let data_dir = dirs.data_dir();
        std::fs::create_dir_all(data_dir)?;

        let db_path = data_dir.join("marquee.db");
        tracing::info!(path = %db_path.display(), "opening movie cache");

        Self::open_at(&db_path)
    }

    /// Open the cache at an explicit path. Tests and the `MARQUEE_DB_PATH`
    /// override both come through here.
    pub fn open_at(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;

        conn.pragma_update(None, "journal_mode", "WAL")?;
        conn.pragma_update(None, "foreign_keys", "ON")?;

        migrations::run_migrations(&conn)?;

        Ok(Self { conn })
    }

    /// Direct access to the connection, for ad-hoc queries the typed
    /// helpers in `movies` do not cover.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    pub fn conn_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }

    /// Filesystem path of the open cache, if it is file-backed.
    pub fn path(&self) -> Option<PathBuf> {
        self.conn.path().map(PathBuf::from)
    }
}
