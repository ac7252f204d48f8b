use std::path::Path;
use setlist::config::{ensure_db_dir, write_config, SetlistConfig};
use setlist::output::{emit_success, OutputMode};
use setlist::storage::schema;
use setlist::ui::{self, Icons};
use setlist::{NewArtist, NewSong, SqliteStore};

pub fn open_store(database: &Path) -> anyhow::Result<SqliteStore> {
    ensure_db_dir(database)?;
    Ok(SqliteStore::open(database)?)
}

pub fn run_init(output_mode: OutputMode, config_path: &Path, database: &Path, force: bool) -> anyhow::Result<()> {
    let config = SetlistConfig {
        database: Some(database.to_string_lossy().to_string()),
    };
    write_config(config_path, &config, force)?;

    if output_mode.is_human() {
        ui::success(&format!("Wrote {}", config_path.display()));
        ui::status(Icons::DATABASE, "Database", &database.display().to_string());
        ui::summary_row("Next:", "setlist setup");
    } else {
        emit_success(output_mode, "init", &config)?;
    }
    Ok(())
}

pub fn run_setup(output_mode: OutputMode, store: &SqliteStore) -> anyhow::Result<()> {
    store.setup()?;

    if output_mode.is_human() {
        ui::header(Icons::DATABASE, "Tables created");
        ui::status(Icons::DATABASE, "Database", &store.path().display().to_string());
        ui::summary_row("Songs seeded:", &schema::SEED_SONGS.len().to_string());
        ui::summary_row("Artists seeded:", &schema::SEED_ARTISTS.len().to_string());
        ui::success("Seed data created successfully");
    } else {
        emit_success(output_mode, "setup", &store.stats()?)?;
    }
    Ok(())
}

pub fn run_stats(output_mode: OutputMode, store: &SqliteStore) -> anyhow::Result<()> {
    let stats = store.stats()?;

    if output_mode.is_human() {
        ui::header(Icons::STATS, &format!("Setlist Statistics ({})", store.path().display()));
        println!("{}", ui::stats_table(&stats));
    } else {
        emit_success(output_mode, "stats", &stats)?;
    }
    Ok(())
}

// ========== Songs ==========

pub fn run_list_songs(output_mode: OutputMode, store: &SqliteStore) -> anyhow::Result<()> {
    let songs = store.list_songs()?;

    if output_mode.is_human() {
        ui::header(Icons::MUSIC, "Songs");
        if songs.is_empty() {
            println!("{} No songs found.", Icons::EMPTY);
        } else {
            println!("{}", ui::song_table(&songs));
        }
    } else {
        emit_success(output_mode, "songs list", &songs)?;
    }
    Ok(())
}

pub fn run_show_song(output_mode: OutputMode, store: &SqliteStore, id: i64) -> anyhow::Result<()> {
    let song = store.get_song(id)?;

    if output_mode.is_human() {
        println!("{}", ui::single_song(&song));
    } else {
        emit_success(output_mode, "songs show", &song)?;
    }
    Ok(())
}

pub fn run_create_song(output_mode: OutputMode, store: &SqliteStore, song: &NewSong) -> anyhow::Result<()> {
    let created = store.create_song(song)?;

    if output_mode.is_human() {
        ui::status(Icons::NEW, "Created song", &created.id.to_string());
        println!("{}", ui::single_song(&created));
    } else {
        emit_success(output_mode, "songs create", &created)?;
    }
    Ok(())
}

pub fn run_update_song(output_mode: OutputMode, store: &SqliteStore, id: i64, song: &NewSong) -> anyhow::Result<()> {
    let updated = store.update_song(id, song)?;

    if output_mode.is_human() {
        ui::status(Icons::MOD, "Updated song", &updated.id.to_string());
        println!("{}", ui::single_song(&updated));
    } else {
        emit_success(output_mode, "songs update", &updated)?;
    }
    Ok(())
}

pub fn run_delete_song(output_mode: OutputMode, store: &SqliteStore, id: i64) -> anyhow::Result<()> {
    let deleted = store.delete_song(id)?;

    if output_mode.is_human() {
        ui::status(Icons::DEL, "Deleted song", &id.to_string());
        ui::success(&deleted.message);
        if !deleted.existed {
            ui::warn(&format!("No song had id {}", id));
        }
    } else {
        emit_success(output_mode, "songs delete", &deleted)?;
    }
    Ok(())
}

// ========== Artists ==========

pub fn run_list_artists(output_mode: OutputMode, store: &SqliteStore) -> anyhow::Result<()> {
    let artists = store.list_artists()?;

    if output_mode.is_human() {
        ui::header(Icons::MIC, "Artists");
        if artists.is_empty() {
            println!("{} No artists with songs found.", Icons::EMPTY);
        } else {
            println!("{}", ui::artist_table(&artists));
        }
        ui::info("Note", &ui::dim("artists without songs are not listed"));
    } else {
        emit_success(output_mode, "artists list", &artists)?;
    }
    Ok(())
}

pub fn run_show_artist(output_mode: OutputMode, store: &SqliteStore, id: i64) -> anyhow::Result<()> {
    let artist = store.get_artist(id)?;

    if output_mode.is_human() {
        ui::header(Icons::MIC, &artist.name);
        ui::summary_row("ID:", &artist.id.to_string());
        ui::summary_row("Bio:", &artist.bio);
        ui::section("Songs");
        for title in artist.song_titles() {
            println!("  {} {}", Icons::MUSIC, title);
        }
    } else {
        emit_success(output_mode, "artists show", &artist)?;
    }
    Ok(())
}

pub fn run_create_artist(output_mode: OutputMode, store: &SqliteStore, artist: &NewArtist) -> anyhow::Result<()> {
    let created = store.create_artist(artist)?;

    if output_mode.is_human() {
        ui::status(Icons::NEW, "Created artist", &created.id.to_string());
        println!("{}", ui::single_artist(&created));
    } else {
        emit_success(output_mode, "artists create", &created)?;
    }
    Ok(())
}

pub fn run_update_artist(output_mode: OutputMode, store: &SqliteStore, id: i64, artist: &NewArtist) -> anyhow::Result<()> {
    let updated = store.update_artist(id, artist)?;

    if output_mode.is_human() {
        ui::status(Icons::MOD, "Updated artist", &updated.id.to_string());
        println!("{}", ui::single_artist(&updated));
    } else {
        emit_success(output_mode, "artists update", &updated)?;
    }
    Ok(())
}

pub fn run_delete_artist(output_mode: OutputMode, store: &SqliteStore, id: i64) -> anyhow::Result<()> {
    let deleted = store.delete_artist(id)?;

    if output_mode.is_human() {
        ui::status(Icons::DEL, "Deleted artist", &id.to_string());
        ui::success(&deleted.message);
        if !deleted.existed {
            ui::warn(&format!("No artist had id {}", id));
        }
    } else {
        emit_success(output_mode, "artists delete", &deleted)?;
    }
    Ok(())
}
