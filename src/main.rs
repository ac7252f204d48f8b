//! Setlist CLI - command-line access to the songs and artists store

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use setlist::output::{emit_error, OutputMode};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;

#[derive(Parser)]
#[command(name = "setlist")]
#[command(version)]
#[command(about = "Songs and artists over a single-file SQLite store")]
#[command(long_about = r#"
Setlist keeps songs and the artists that recorded them in one SQLite file.

Example usage:
  setlist setup
  setlist songs list
  setlist songs create --title "Breakdown" --album "Tom Petty" --duration "2:42" --artist-id 1
  setlist artists show 1
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to the config file (defaults to setlist.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Path to the database file (overrides the config file)
    #[arg(short, long, global = true)]
    database: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a config file pointing at the database
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Drop and recreate both tables, then insert the seed rows
    Setup,

    /// Show row counts
    Stats,

    /// Song operations
    Songs {
        #[command(subcommand)]
        action: SongCommand,
    },

    /// Artist operations
    Artists {
        #[command(subcommand)]
        action: ArtistCommand,
    },
}

#[derive(Subcommand)]
enum SongCommand {
    /// List every song with its artist
    List,
    /// Show one song
    Show { id: i64 },
    /// Create a song
    Create(SongArgs),
    /// Replace every field of a song
    Update {
        id: i64,
        #[command(flatten)]
        fields: SongArgs,
    },
    /// Delete a song
    Delete { id: i64 },
}

#[derive(Subcommand)]
enum ArtistCommand {
    /// List every artist that has songs
    List,
    /// Show one artist with its song titles
    Show { id: i64 },
    /// Create an artist
    Create(ArtistArgs),
    /// Replace every field of an artist
    Update {
        id: i64,
        #[command(flatten)]
        fields: ArtistArgs,
    },
    /// Delete an artist
    Delete { id: i64 },
}

#[derive(Args)]
struct SongArgs {
    #[arg(long)]
    title: String,
    #[arg(long)]
    album: String,
    /// Running time as M:SS
    #[arg(long)]
    duration: String,
    /// Omit to store the song without an artist
    #[arg(long)]
    artist_id: Option<i64>,
}

impl From<SongArgs> for setlist::NewSong {
    fn from(args: SongArgs) -> Self {
        setlist::NewSong::new(args.title, args.album, args.duration, args.artist_id)
    }
}

#[derive(Args)]
struct ArtistArgs {
    #[arg(long)]
    name: String,
    #[arg(long)]
    bio: String,
}

impl From<ArtistArgs> for setlist::NewArtist {
    fn from(args: ArtistArgs) -> Self {
        setlist::NewArtist::new(args.name, args.bio)
    }
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Init { .. } => "init",
            Commands::Setup => "setup",
            Commands::Stats => "stats",
            Commands::Songs { action } => match action {
                SongCommand::List => "songs list",
                SongCommand::Show { .. } => "songs show",
                SongCommand::Create(_) => "songs create",
                SongCommand::Update { .. } => "songs update",
                SongCommand::Delete { .. } => "songs delete",
            },
            Commands::Artists { action } => match action {
                ArtistCommand::List => "artists list",
                ArtistCommand::Show { .. } => "artists show",
                ArtistCommand::Create(_) => "artists create",
                ArtistCommand::Update { .. } => "artists update",
                ArtistCommand::Delete { .. } => "artists delete",
            },
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging; stderr keeps stdout clean for --json
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let output_mode = OutputMode::from_flag(cli.json);
    let command_name = cli.command.name();

    if let Err(err) = run(cli, output_mode) {
        if output_mode.is_human() {
            setlist::ui::error(&format!("{:#}", err));
        } else {
            emit_error(output_mode, command_name, &format!("{:#}", err))?;
        }
        std::process::exit(1);
    }

    Ok(())
}

fn run(cli: Cli, output_mode: OutputMode) -> anyhow::Result<()> {
    let config_path = cli.config.unwrap_or_else(setlist::config::default_config_path);
    let config = load_run_config(&cli.command, &config_path)?;
    let database = setlist::config::resolve_database_path(cli.database, config.as_ref());
    tracing::debug!("Using database {}", database.display());

    match cli.command {
        Commands::Init { force } => commands::run_init(output_mode, &config_path, &database, force),
        Commands::Setup => commands::run_setup(output_mode, &commands::open_store(&database)?),
        Commands::Stats => commands::run_stats(output_mode, &commands::open_store(&database)?),
        Commands::Songs { action } => {
            let store = commands::open_store(&database)?;
            match action {
                SongCommand::List => commands::run_list_songs(output_mode, &store),
                SongCommand::Show { id } => commands::run_show_song(output_mode, &store, id),
                SongCommand::Create(fields) => {
                    commands::run_create_song(output_mode, &store, &fields.into())
                }
                SongCommand::Update { id, fields } => {
                    commands::run_update_song(output_mode, &store, id, &fields.into())
                }
                SongCommand::Delete { id } => commands::run_delete_song(output_mode, &store, id),
            }
        }
        Commands::Artists { action } => {
            let store = commands::open_store(&database)?;
            match action {
                ArtistCommand::List => commands::run_list_artists(output_mode, &store),
                ArtistCommand::Show { id } => commands::run_show_artist(output_mode, &store, id),
                ArtistCommand::Create(fields) => {
                    commands::run_create_artist(output_mode, &store, &fields.into())
                }
                ArtistCommand::Update { id, fields } => {
                    commands::run_update_artist(output_mode, &store, id, &fields.into())
                }
                ArtistCommand::Delete { id } => commands::run_delete_artist(output_mode, &store, id),
            }
        }
    }
}

/// Load the config file, except when `init --force` is about to replace it
fn load_run_config(
    command: &Commands,
    config_path: &std::path::Path,
) -> anyhow::Result<Option<setlist::config::SetlistConfig>> {
    if matches!(command, Commands::Init { force: true }) {
        return Ok(None);
    }
    setlist::config::load_config(Some(config_path))
}
