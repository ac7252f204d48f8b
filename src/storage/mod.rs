//! Storage Layer - SQLite-backed persistence
//!
//! System of record is a single SQLite file with tables:
//! - songs(id, title, album, duration, artist_id)
//! - artists(id, name, bio)

pub mod schema;
pub mod sqlite;

pub use sqlite::{Deleted, SqliteStore, StoreStats};
