//! # Setlist - songs and artists over SQLite
//!
//! A small data-access layer for two linked entities:
//! - `songs(id, title, album, duration, artist_id)`
//! - `artists(id, name, bio)`
//!
//! Setlist provides:
//! - Typed records for both entities and their joined views
//! - Destructive setup with fixed seed rows
//! - CRUD operations, each on its own short-lived connection

pub mod song;
pub mod artist;
pub mod storage;
pub mod config;
pub mod output;
pub mod ui;

// Re-exports for convenient access
pub use song::{NewSong, Song, SongWithArtist};
pub use artist::{Artist, ArtistWithSongs, NewArtist};
pub use storage::{Deleted, SqliteStore, StoreStats};

use std::path::PathBuf;

/// Result type alias for Setlist operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Setlist operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{entity} not found: {id}")]
    NotFound { entity: Entity, id: i64 },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Store unavailable at {}: {source}", path.display())]
    Unavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    #[error("Storage error: {0}")]
    Storage(rusqlite::Error),
}

impl Error {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound { .. })
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::InvalidColumnType(idx, ref name, ty) => {
                Error::InvalidInput(format!("column {} ({}) holds a {} value", idx, name, ty))
            }
            rusqlite::Error::FromSqlConversionFailure(idx, ty, ref cause) => {
                Error::InvalidInput(format!("column {} ({}) could not be converted: {}", idx, ty, cause))
            }
            rusqlite::Error::IntegralValueOutOfRange(idx, value) => {
                Error::InvalidInput(format!("column {} value {} is out of range", idx, value))
            }
            rusqlite::Error::ToSqlConversionFailure(ref cause) => {
                Error::InvalidInput(cause.to_string())
            }
            other => Error::Storage(other),
        }
    }
}

/// The two record kinds held by the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Song,
    Artist,
}

impl Entity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Entity::Song => "Song",
            Entity::Artist => "Artist",
        }
    }
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = Error::NotFound { entity: Entity::Song, id: 42 };
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Song not found: 42");
    }

    #[test]
    fn test_type_errors_become_invalid_input() {
        let err: Error = rusqlite::Error::InvalidColumnType(
            4,
            "artist_id".to_string(),
            rusqlite::types::Type::Text,
        )
        .into();
        assert!(matches!(err, Error::InvalidInput(_)));

        let err: Error = rusqlite::Error::QueryReturnedNoRows.into();
        assert!(matches!(err, Error::Storage(_)));
    }
}
