//! SQLite storage implementation

use std::path::{Path, PathBuf};
use rusqlite::{Connection, params, OptionalExtension};
use serde::{Deserialize, Serialize};
use crate::{Entity, Error, Result};
use crate::artist::{Artist, ArtistWithSongs, NewArtist};
use crate::song::{NewSong, Song, SongWithArtist};
use super::schema;

/// SQLite-backed storage for songs and artists.
///
/// Holds only the database path. Every operation opens its own connection,
/// runs its statements and drops the connection before returning, so no
/// connection outlives a call.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    path: PathBuf,
}

impl SqliteStore {
    /// Open a database file (creates it if it doesn't exist).
    ///
    /// Tables are not created here; call [`SqliteStore::setup`] for that.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let store = Self {
            path: path.as_ref().to_path_buf(),
        };
        // Fail early if the file cannot be opened at all
        store.connect()?;
        Ok(store)
    }

    /// Path of the backing database file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Acquire a fresh connection for a single operation
    ///
    /// The bundled SQLite enforces foreign keys by default; the store keeps
    /// them declared but unenforced, so dangling `artist_id` values are allowed.
    fn connect(&self) -> Result<Connection> {
        let conn = Connection::open(&self.path).map_err(|source| Error::Unavailable {
            path: self.path.clone(),
            source,
        })?;
        conn.pragma_update(None, "foreign_keys", false)?;
        Ok(conn)
    }

    // ========== Setup ==========

    /// Drop and recreate both tables, then insert the seed rows.
    ///
    /// Destroys any existing data.
    pub fn setup(&self) -> Result<()> {
        let mut conn = self.connect()?;

        for stmt in schema::reset_statements() {
            conn.execute(stmt, [])?;
        }
        tracing::info!("Tables created in {}", self.path.display());

        let tx = conn.transaction()?;
        {
            let mut insert_song = tx.prepare(
                "INSERT INTO songs (title, album, duration, artist_id) VALUES (?1, ?2, ?3, ?4)",
            )?;
            for (title, album, duration, artist_id) in schema::SEED_SONGS {
                insert_song.execute(params![title, album, duration, artist_id])?;
            }

            let mut insert_artist = tx.prepare(
                "INSERT INTO artists (name, bio) VALUES (?1, ?2)",
            )?;
            for (name, bio) in schema::SEED_ARTISTS {
                insert_artist.execute(params![name, bio])?;
            }
        }
        tx.commit()?;

        tracing::info!(
            "Seeded {} songs and {} artists",
            schema::SEED_SONGS.len(),
            schema::SEED_ARTISTS.len()
        );
        Ok(())
    }

    // ========== Song Operations ==========

    /// All songs joined with their artist; songs without a matching artist are left out
    pub fn list_songs(&self) -> Result<Vec<SongWithArtist>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT songs.*, artists.name AS artist_name, artists.bio AS artist_bio
            FROM songs
            JOIN artists ON songs.artist_id = artists.id
            ORDER BY songs.id
            "#,
        )?;

        let songs = stmt
            .query_map([], SongWithArtist::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!("Listed {} songs", songs.len());
        Ok(songs)
    }

    /// Insert a song and return it with its assigned id
    pub fn create_song(&self, song: &NewSong) -> Result<Song> {
        let conn = self.connect()?;
        let created = conn.query_row(
            r#"
            INSERT INTO songs (title, album, duration, artist_id)
            VALUES (?1, ?2, ?3, ?4)
            RETURNING *
            "#,
            params![song.title, song.album, song.duration, song.artist_id],
            Song::from_row,
        )?;

        tracing::debug!("Created song {} ({})", created.id, created.title);
        Ok(created)
    }

    /// Get a song by id, without joining its artist
    pub fn get_song(&self, id: i64) -> Result<Song> {
        let conn = self.connect()?;
        conn.query_row("SELECT * FROM songs WHERE id = ?1", [id], Song::from_row)
            .optional()?
            .ok_or(Error::NotFound { entity: Entity::Song, id })
    }

    /// Replace every field of a song
    pub fn update_song(&self, id: i64, song: &NewSong) -> Result<Song> {
        let conn = self.connect()?;
        let updated = conn
            .query_row(
                r#"
                UPDATE songs SET title = ?1, album = ?2, duration = ?3, artist_id = ?4
                WHERE id = ?5
                RETURNING *
                "#,
                params![song.title, song.album, song.duration, song.artist_id, id],
                Song::from_row,
            )
            .optional()?
            .ok_or(Error::NotFound { entity: Entity::Song, id })?;

        tracing::debug!("Updated song {}", id);
        Ok(updated)
    }

    /// Delete a song by id. Succeeds whether or not the row existed.
    pub fn delete_song(&self, id: i64) -> Result<Deleted> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM songs WHERE id = ?1", [id])?;

        tracing::debug!("Deleted song {} ({} rows)", id, changed);
        Ok(Deleted::new(Entity::Song, changed > 0))
    }

    // ========== Artist Operations ==========

    /// All artists with their concatenated song titles; artists with no songs are left out
    pub fn list_artists(&self) -> Result<Vec<ArtistWithSongs>> {
        let conn = self.connect()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT artists.*, GROUP_CONCAT(songs.title, ', ') AS song_list
            FROM artists
            JOIN songs ON artists.id = songs.artist_id
            GROUP BY artists.id
            ORDER BY artists.id
            "#,
        )?;

        let artists = stmt
            .query_map([], ArtistWithSongs::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        tracing::debug!("Listed {} artists", artists.len());
        Ok(artists)
    }

    /// Insert an artist and return it with its assigned id
    pub fn create_artist(&self, artist: &NewArtist) -> Result<Artist> {
        let conn = self.connect()?;
        let created = conn.query_row(
            r#"
            INSERT INTO artists (name, bio)
            VALUES (?1, ?2)
            RETURNING *
            "#,
            params![artist.name, artist.bio],
            Artist::from_row,
        )?;

        tracing::debug!("Created artist {} ({})", created.id, created.name);
        Ok(created)
    }

    /// Get an artist with its song titles.
    ///
    /// An artist that exists but has no songs is reported as not found.
    pub fn get_artist(&self, id: i64) -> Result<ArtistWithSongs> {
        let conn = self.connect()?;
        conn.query_row(
            r#"
            SELECT artists.*, GROUP_CONCAT(songs.title, ', ') AS song_list
            FROM artists
            JOIN songs ON artists.id = songs.artist_id
            WHERE artists.id = ?1
            GROUP BY artists.id
            "#,
            [id],
            ArtistWithSongs::from_row,
        )
        .optional()?
        .ok_or(Error::NotFound { entity: Entity::Artist, id })
    }

    /// Replace every field of an artist
    pub fn update_artist(&self, id: i64, artist: &NewArtist) -> Result<Artist> {
        let conn = self.connect()?;
        let updated = conn
            .query_row(
                r#"
                UPDATE artists SET name = ?1, bio = ?2
                WHERE id = ?3
                RETURNING *
                "#,
                params![artist.name, artist.bio, id],
                Artist::from_row,
            )
            .optional()?
            .ok_or(Error::NotFound { entity: Entity::Artist, id })?;

        tracing::debug!("Updated artist {}", id);
        Ok(updated)
    }

    /// Delete an artist by id. Songs referencing it are left in place.
    pub fn delete_artist(&self, id: i64) -> Result<Deleted> {
        let conn = self.connect()?;
        let changed = conn.execute("DELETE FROM artists WHERE id = ?1", [id])?;

        tracing::debug!("Deleted artist {} ({} rows)", id, changed);
        Ok(Deleted::new(Entity::Artist, changed > 0))
    }

    // ========== Statistics ==========

    /// Get row counts for both tables
    pub fn stats(&self) -> Result<StoreStats> {
        let conn = self.connect()?;
        let songs: i64 = conn.query_row("SELECT COUNT(*) FROM songs", [], |row| row.get(0))?;
        let artists: i64 = conn.query_row("SELECT COUNT(*) FROM artists", [], |row| row.get(0))?;
        Ok(StoreStats {
            songs: songs as usize,
            artists: artists as usize,
        })
    }
}

/// Confirmation returned by delete operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deleted {
    pub message: String,
    /// Whether a row actually matched the id
    pub existed: bool,
}

impl Deleted {
    fn new(entity: Entity, existed: bool) -> Self {
        Self {
            message: format!("{} destroyed successfully", entity),
            existed,
        }
    }
}

/// Database statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreStats {
    pub songs: usize,
    pub artists: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn seeded_store() -> (SqliteStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("test.db")).unwrap();
        store.setup().unwrap();
        (store, dir)
    }

    #[test]
    fn test_setup_seeds_both_tables() {
        let (store, _dir) = seeded_store();

        let songs = store.list_songs().unwrap();
        assert_eq!(songs.len(), 4);
        let free_bird = songs.iter().find(|s| s.title == "Free Bird").unwrap();
        assert_eq!(free_bird.artist_name, "Lynyrd Skynyrd");
        assert_eq!(free_bird.artist_bio, "From Alabama");
        assert_eq!(free_bird.duration, "9:11");

        let artists = store.list_artists().unwrap();
        assert_eq!(artists.len(), 3);
        let petty = artists.iter().find(|a| a.name == "Tom Petty").unwrap();
        let mut titles = petty.song_titles();
        titles.sort();
        assert_eq!(titles, vec!["American Girl", "Wildflowers"]);
    }

    #[test]
    fn test_setup_resets_existing_data() {
        let (store, _dir) = seeded_store();
        store.create_song(&NewSong::new("X", "Y", "1:00", 1)).unwrap();
        store.delete_artist(2).unwrap();

        store.setup().unwrap();

        assert_eq!(store.stats().unwrap(), StoreStats { songs: 4, artists: 3 });
        assert_eq!(store.get_artist(2).unwrap().name, "Metallica");
    }

    #[test]
    fn test_song_crud() {
        let (store, _dir) = seeded_store();

        let created = store.create_song(&NewSong::new("X", "Y", "1:00", 1)).unwrap();
        assert_eq!(created.id, 5);

        let retrieved = store.get_song(created.id).unwrap();
        assert_eq!(retrieved, Song {
            id: created.id,
            title: "X".to_string(),
            album: "Y".to_string(),
            duration: "1:00".to_string(),
            artist_id: Some(1),
        });

        let deleted = store.delete_song(created.id).unwrap();
        assert!(deleted.existed);
        assert_eq!(deleted.message, "Song destroyed successfully");

        let err = store.get_song(created.id).unwrap_err();
        assert!(matches!(err, Error::NotFound { entity: Entity::Song, id } if id == created.id));
    }

    #[test]
    fn test_update_song_touches_only_target() {
        let (store, _dir) = seeded_store();
        let before: Vec<Song> = (1..=4).map(|id| store.get_song(id).unwrap()).collect();

        let replacement = NewSong::new("Breakdown", "Tom Petty and the Heartbreakers", "2:42", 1);
        let first = store.update_song(2, &replacement).unwrap();
        let second = store.update_song(2, &replacement).unwrap();
        assert_eq!(first, second);
        assert_eq!(store.get_song(2).unwrap(), first);
        assert_eq!(first.title, "Breakdown");

        for song in before.iter().filter(|s| s.id != 2) {
            assert_eq!(&store.get_song(song.id).unwrap(), song);
        }
    }

    #[test]
    fn test_update_missing_rows_is_not_found() {
        let (store, _dir) = seeded_store();

        let err = store.update_song(99, &NewSong::new("X", "Y", "1:00", 1)).unwrap_err();
        assert!(err.is_not_found());

        let err = store.update_artist(99, &NewArtist::new("Nobody", "Nowhere")).unwrap_err();
        assert!(matches!(err, Error::NotFound { entity: Entity::Artist, id: 99 }));
    }

    #[test]
    fn test_delete_missing_rows_still_confirms() {
        let (store, _dir) = seeded_store();

        let deleted = store.delete_song(99).unwrap();
        assert!(!deleted.existed);
        assert_eq!(deleted.message, "Song destroyed successfully");

        let deleted = store.delete_artist(99).unwrap();
        assert!(!deleted.existed);
        assert_eq!(deleted.message, "Artist destroyed successfully");

        assert_eq!(store.stats().unwrap(), StoreStats { songs: 4, artists: 3 });
    }

    #[test]
    fn test_artist_without_songs_is_hidden() {
        let (store, _dir) = seeded_store();

        let created = store.create_artist(&NewArtist::new("Heart", "From Seattle")).unwrap();
        assert_eq!(created.id, 4);

        let artists = store.list_artists().unwrap();
        assert_eq!(artists.len(), 3);
        assert!(artists.iter().all(|a| a.id != created.id));
        assert!(store.get_artist(created.id).unwrap_err().is_not_found());

        store.create_song(&NewSong::new("Barracuda", "Little Queen", "4:21", created.id)).unwrap();
        let heart = store.get_artist(created.id).unwrap();
        assert_eq!(heart.song_list, "Barracuda");
        assert_eq!(store.list_artists().unwrap().len(), 4);
    }

    #[test]
    fn test_update_artist() {
        let (store, _dir) = seeded_store();

        let updated = store.update_artist(2, &NewArtist::new("Metallica", "From California")).unwrap();
        assert_eq!(updated, Artist {
            id: 2,
            name: "Metallica".to_string(),
            bio: "From California".to_string(),
        });

        let listed = store.get_artist(2).unwrap();
        assert_eq!(listed.bio, "From California");
        assert_eq!(listed.song_list, "The Unforgiven");
    }

    #[test]
    fn test_delete_artist_leaves_songs_dangling() {
        let (store, _dir) = seeded_store();

        let deleted = store.delete_artist(1).unwrap();
        assert!(deleted.existed);

        // Both Tom Petty songs survive with their original artist_id
        let american_girl = store.get_song(2).unwrap();
        assert_eq!(american_girl.artist_id, Some(1));
        let wildflowers = store.get_song(4).unwrap();
        assert_eq!(wildflowers.artist_id, Some(1));

        // but drop out of the joined listing
        let songs = store.list_songs().unwrap();
        assert_eq!(songs.len(), 2);
        assert!(songs.iter().all(|s| s.artist_id != Some(1)));
        assert!(store.get_artist(1).unwrap_err().is_not_found());
    }

    #[test]
    fn test_song_with_unknown_artist_is_accepted() {
        let (store, _dir) = seeded_store();

        let orphan = store.create_song(&NewSong::new("Orphan", "None", "0:30", 42)).unwrap();
        assert_eq!(store.get_song(orphan.id).unwrap().artist_id, Some(42));
        assert!(store.list_songs().unwrap().iter().all(|s| s.id != orphan.id));
    }

    #[test]
    fn test_connections_do_not_outlive_calls() {
        let (store, dir) = seeded_store();
        let other = SqliteStore::open(dir.path().join("test.db")).unwrap();

        let created = store.create_artist(&NewArtist::new("Heart", "From Seattle")).unwrap();
        other.create_song(&NewSong::new("Barracuda", "Little Queen", "4:21", created.id)).unwrap();

        assert_eq!(store.get_artist(created.id).unwrap().song_list, "Barracuda");
    }

    #[test]
    fn test_unopenable_path_is_unavailable() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("no").join("such").join("dir").join("test.db");

        let err = SqliteStore::open(&missing).unwrap_err();
        assert!(matches!(err, Error::Unavailable { ref path, .. } if path == &missing));
    }

    #[test]
    fn test_operations_before_setup_fail_in_storage() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("empty.db")).unwrap();

        assert!(matches!(store.list_songs().unwrap_err(), Error::Storage(_)));
    }

    #[test]
    fn test_mistyped_column_is_invalid_input() {
        let (store, _dir) = seeded_store();
        let conn = store.connect().unwrap();
        conn.execute("UPDATE songs SET artist_id = 'three' WHERE id = 1", []).unwrap();
        drop(conn);

        let err = store.get_song(1).unwrap_err();
        assert!(matches!(err, Error::InvalidInput(_)));
    }

    #[test]
    fn test_store_connections_do_not_enforce_foreign_keys() {
        let (store, _dir) = seeded_store();
        let conn = store.connect().unwrap();

        let enforced: i64 = conn
            .pragma_query_value(None, "foreign_keys", |row| row.get(0))
            .unwrap();
        assert_eq!(enforced, 0);
    }

    #[test]
    fn test_setup_on_fresh_file() {
        let dir = TempDir::new().unwrap();
        let store = SqliteStore::open(dir.path().join("fresh.db")).unwrap();

        store.setup().unwrap();
        assert_eq!(store.stats().unwrap(), StoreStats { songs: 4, artists: 3 });
    }

    #[test]
    fn test_song_without_artist_reads_back() {
        let (store, _dir) = seeded_store();
        let conn = store.connect().unwrap();
        conn.execute(
            "INSERT INTO songs (title, album, duration, artist_id) VALUES ('Loose', 'Demos', '2:10', NULL)",
            [],
        )
        .unwrap();
        drop(conn);

        let song = store.get_song(5).unwrap();
        assert_eq!(song.title, "Loose");
        assert_eq!(song.artist_id, None);
        assert!(store.list_songs().unwrap().iter().all(|s| s.id != 5));

        let created = store.create_song(&NewSong::new("Other", "Demos", "1:05", None::<i64>)).unwrap();
        assert_eq!(store.get_song(created.id).unwrap().artist_id, None);
    }
}
