//! # marquee-store
//!
//! Local movie cache for the Marquee application, backed by SQLite.
//!
//! The crate exposes a synchronous `Database` handle that wraps a
//! `rusqlite::Connection` and provides typed helpers for the movie table:
//! bulk upsert after a remote fetch, read-all at cache-check time, and
//! point lookup for the detail screen.

pub mod database;
pub mod migrations;
pub mod models;
pub mod movies;

mod error;

pub use database::Database;
pub use error::StoreError;
pub use models::MovieRow;
