//! Song records
//!
//! `Song` is a row of the `songs` table as stored. `SongWithArtist` is the
//! joined view returned by listings, carrying the owning artist's name and bio.

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// A row of the `songs` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct Song {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Album")]
    pub album: String,
    /// Running time formatted as `M:SS`
    #[tabled(rename = "Duration")]
    pub duration: String,
    /// References `artists.id` when set; not enforced by the store
    #[tabled(rename = "Artist ID", display_with = "display_artist_id")]
    pub artist_id: Option<i64>,
}

impl Song {
    pub(crate) fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            album: row.get("album")?,
            duration: row.get("duration")?,
            artist_id: row.get("artist_id")?,
        })
    }
}

fn display_artist_id(artist_id: &Option<i64>) -> String {
    artist_id.map(|id| id.to_string()).unwrap_or_default()
}

/// Field values for creating a song or replacing every field of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSong {
    pub title: String,
    pub album: String,
    pub duration: String,
    pub artist_id: Option<i64>,
}

impl NewSong {
    pub fn new(
        title: impl Into<String>,
        album: impl Into<String>,
        duration: impl Into<String>,
        artist_id: impl Into<Option<i64>>,
    ) -> Self {
        Self {
            title: title.into(),
            album: album.into(),
            duration: duration.into(),
            artist_id: artist_id.into(),
        }
    }
}

/// A song joined with the artist it references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct SongWithArtist {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Title")]
    pub title: String,
    #[tabled(rename = "Album")]
    pub album: String,
    #[tabled(rename = "Duration")]
    pub duration: String,
    /// Always set here, since unmatched songs are left out of the join
    #[tabled(skip)]
    pub artist_id: Option<i64>,
    #[tabled(rename = "Artist")]
    pub artist_name: String,
    #[tabled(rename = "Bio")]
    pub artist_bio: String,
}

impl SongWithArtist {
    pub(crate) fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            title: row.get("title")?,
            album: row.get("album")?,
            duration: row.get("duration")?,
            artist_id: row.get("artist_id")?,
            artist_name: row.get("artist_name")?,
            artist_bio: row.get("artist_bio")?,
        })
    }
}
