//! Database schema definitions and seed rows

/// SQL to drop the songs table
pub const DROP_SONGS_TABLE: &str = "DROP TABLE IF EXISTS songs";

/// SQL to create the songs table
///
/// The foreign key is declared only; the store never turns on
/// `PRAGMA foreign_keys`, so it is not enforced.
pub const CREATE_SONGS_TABLE: &str = r#"
CREATE TABLE songs (
    id INTEGER PRIMARY KEY NOT NULL,
    title TEXT,
    album TEXT,
    duration TEXT,
    artist_id INTEGER,
    FOREIGN KEY (artist_id) REFERENCES artists(id)
)
"#;

/// SQL to drop the artists table
pub const DROP_ARTISTS_TABLE: &str = "DROP TABLE IF EXISTS artists";

/// SQL to create the artists table
pub const CREATE_ARTISTS_TABLE: &str = r#"
CREATE TABLE artists (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT,
    bio TEXT
)
"#;

/// Seed songs as (title, album, duration, artist_id)
pub const SEED_SONGS: &[(&str, &str, &str, i64)] = &[
    ("Free Bird", "Pronounced Leh-Nerd Skin-Nerd", "9:11", 3),
    ("American Girl", "Tom Petty and the Hearbreakers", "3:33", 1),
    ("The Unforgiven", "The Black Box", "6:28", 2),
    ("Wildflowers", "Full Moon", "3:21", 1),
];

/// Seed artists as (name, bio); ids are assigned 1, 2, 3 in this order
pub const SEED_ARTISTS: &[(&str, &str)] = &[
    ("Tom Petty", "From Florida"),
    ("Metallica", "From Oregon"),
    ("Lynyrd Skynyrd", "From Alabama"),
];

/// Statements that reset the schema, in execution order
pub fn reset_statements() -> Vec<&'static str> {
    vec![
        DROP_SONGS_TABLE,
        CREATE_SONGS_TABLE,
        DROP_ARTISTS_TABLE,
        CREATE_ARTISTS_TABLE,
    ]
}
