//! Artist records

use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Separator used by the store when concatenating song titles
pub const SONG_LIST_SEPARATOR: &str = ", ";

/// A row of the `artists` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct Artist {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Bio")]
    pub bio: String,
}

impl Artist {
    pub(crate) fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            bio: row.get("bio")?,
        })
    }
}

/// Field values for creating an artist or replacing every field of one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewArtist {
    pub name: String,
    pub bio: String,
}

impl NewArtist {
    pub fn new(name: impl Into<String>, bio: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bio: bio.into(),
        }
    }
}

/// An artist together with the titles of the songs that reference it.
///
/// Only produced for artists with at least one song.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Tabled)]
pub struct ArtistWithSongs {
    #[tabled(rename = "ID")]
    pub id: i64,
    #[tabled(rename = "Name")]
    pub name: String,
    #[tabled(rename = "Bio")]
    pub bio: String,
    /// Song titles joined with `", "`
    #[tabled(rename = "Songs")]
    pub song_list: String,
}

impl ArtistWithSongs {
    pub(crate) fn from_row(row: &rusqlite::Row) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get("id")?,
            name: row.get("name")?,
            bio: row.get("bio")?,
            song_list: row.get("song_list")?,
        })
    }

    /// Split `song_list` back into titles.
    ///
    /// A title that itself contains `", "` comes back as two entries.
    pub fn song_titles(&self) -> Vec<&str> {
        self.song_list.split(SONG_LIST_SEPARATOR).collect()
    }
}
