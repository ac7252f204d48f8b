use crate::artist::{Artist, ArtistWithSongs};
use crate::song::{Song, SongWithArtist};
use crate::storage::StoreStats;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
pub struct TableRow {
    #[tabled(rename = "Metric")]
    pub metric: String,
    #[tabled(rename = "Value")]
    pub value: String,
}

pub struct TableBuilder {
    rows: Vec<TableRow>,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn add_row(&mut self, label: &str, value: &str) {
        self.rows.push(TableRow {
            metric: label.to_string(),
            value: value.to_string(),
        });
    }

    pub fn build(&self) -> String {
        if self.rows.is_empty() {
            return String::new();
        }

        Table::new(&self.rows).with(Style::rounded()).to_string()
    }
}

impl Default for TableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn stats_table(stats: &StoreStats) -> String {
    let mut builder = TableBuilder::new();
    builder.add_row("Songs", &stats.songs.to_string());
    builder.add_row("Artists", &stats.artists.to_string());
    builder.build()
}

/// Render any list of records as a rounded table; empty input renders as nothing
pub fn record_table<T: Tabled>(records: &[T]) -> String {
    if records.is_empty() {
        return String::new();
    }
    Table::new(records).with(Style::rounded()).to_string()
}

pub fn song_table(songs: &[SongWithArtist]) -> String {
    record_table(songs)
}

pub fn artist_table(artists: &[ArtistWithSongs]) -> String {
    record_table(artists)
}

/// Single-record tables used by show/create/update
pub fn single_song(song: &Song) -> String {
    record_table(std::slice::from_ref(song))
}

pub fn single_artist(artist: &Artist) -> String {
    record_table(std::slice::from_ref(artist))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_table_has_artist_columns() {
        let songs = vec![SongWithArtist {
            id: 1,
            title: "Free Bird".to_string(),
            album: "Pronounced Leh-Nerd Skin-Nerd".to_string(),
            duration: "9:11".to_string(),
            artist_id: Some(3),
            artist_name: "Lynyrd Skynyrd".to_string(),
            artist_bio: "From Alabama".to_string(),
        }];

        let rendered = song_table(&songs);
        assert!(rendered.contains("Title"));
        assert!(rendered.contains("Artist"));
        assert!(rendered.contains("Free Bird"));
        assert!(rendered.contains("Lynyrd Skynyrd"));
        assert!(!rendered.contains("Artist ID"));
    }

    #[test]
    fn test_empty_tables_render_nothing() {
        assert!(artist_table(&[]).is_empty());
        assert!(TableBuilder::new().build().is_empty());
    }

    #[test]
    fn test_stats_table() {
        let rendered = stats_table(&StoreStats { songs: 4, artists: 3 });
        assert!(rendered.contains("Songs"));
        assert!(rendered.contains("Artists"));
    }
}
