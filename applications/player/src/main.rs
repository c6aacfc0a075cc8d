/// XL Beats Player - catalog, simulated playback and badges from the terminal
use anyhow::Context;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use xl_core::{JsonFileStore, TrackId};
use xl_indexer::GeminiIndexer;
use xl_player::{
    output, read_records, records_to_json, App, ConsoleNotifier, PlayRequest, PlayTarget,
    PlayerConfig, SearchOutcome,
};
use xl_playback::RepeatMode;

#[derive(Parser)]
#[command(name = "xl-player")]
#[command(about = "XL Beats music player", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List albums and singles
    Catalog,
    /// Search tracks and albums
    Search {
        /// Case-insensitive search text
        query: String,
    },
    /// Run a simulated playback session
    Play {
        /// Album name
        #[arg(long, conflicts_with_all = ["track", "favorites"])]
        album: Option<String>,
        /// Track id
        #[arg(long, conflicts_with = "favorites")]
        track: Option<String>,
        /// Play the favorites list
        #[arg(long)]
        favorites: bool,
        /// Shuffle the queue
        #[arg(long)]
        shuffle: bool,
        /// Repeat mode: off, all or one
        #[arg(long)]
        repeat: Option<RepeatMode>,
        /// Clock ticks to simulate
        #[arg(long, default_value_t = 10)]
        ticks: u32,
    },
    /// Toggle a favorite
    Favorite {
        /// Track id
        track_id: String,
    },
    /// List favorited tracks
    Favorites,
    /// List badges
    Badges,
    /// Index track titles and add them as singles (admin)
    Index {
        /// Admin email
        #[arg(short, long)]
        email: String,
        /// Artist or producer name
        #[arg(short, long, default_value = "XL Beats")]
        artist: String,
        /// Print the indexed records as JSON instead of importing them
        #[arg(long, conflicts_with = "from")]
        dry_run: bool,
        /// Import records from a (possibly edited) JSON file
        #[arg(long, value_name = "FILE")]
        from: Option<PathBuf>,
        /// Track titles
        #[arg(required_unless_present = "from", conflicts_with = "from")]
        titles: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "xl_player=info,xl_playback=info,xl_core=info,xl_indexer=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = PlayerConfig::load(cli.config.as_deref()).context("loading configuration")?;
    config.validate()?;

    let store = Arc::new(JsonFileStore::open(&config.storage.state_file));
    tracing::debug!(path = %store.path().display(), "State file opened");

    let mut app = App::open(config, store, Arc::new(ConsoleNotifier));

    if app.take_onboarding() {
        println!("Welcome to XL Beats!");
        println!("Play albums, favorite tracks and unlock badges along the way.");
        println!();
    }

    match cli.command {
        Commands::Catalog => print_catalog(&app),
        Commands::Search { query } => search(&app, &query),
        Commands::Play {
            album,
            track,
            favorites,
            shuffle,
            repeat,
            ticks,
        } => {
            let target = match (album, track) {
                (Some(album), _) => PlayTarget::Album(album),
                (None, Some(track)) => PlayTarget::Track(TrackId::new(track)),
                (None, None) if favorites => PlayTarget::Favorites,
                (None, None) => anyhow::bail!("choose --album, --track or --favorites"),
            };
            let request = PlayRequest {
                target,
                shuffle,
                repeat,
                ticks,
            };
            play(&app, &request).await?;
        }
        Commands::Favorite { track_id } => {
            let id = TrackId::new(track_id);
            let favorited = app.toggle_favorite(&id)?;
            println!(
                "{id} {}",
                if favorited {
                    "added to favorites"
                } else {
                    "removed from favorites"
                }
            );
        }
        Commands::Favorites => {
            let favorites = app.favorite_tracks();
            if favorites.is_empty() {
                println!("No favorites yet.");
            }
            for track in &favorites {
                println!("{}", output::track_line(track, true));
            }
        }
        Commands::Badges => {
            for badge in app.badges() {
                println!("{}", output::badge_line(&badge));
            }
        }
        Commands::Index {
            email,
            artist,
            dry_run,
            from,
            titles,
        } => {
            app.authorize_admin(&email)?;
            index(&mut app, &artist, dry_run, from.as_deref(), &titles).await?;
        }
    }

    Ok(())
}

fn print_catalog(app: &App) {
    let catalog = app.catalog();
    for album in &catalog.albums {
        println!("{} - {} ({})", album.name, album.artist, album.year);
        for track in &album.tracks {
            println!("  {}", output::track_line(track, app.is_favorited(&track.id)));
        }
    }
    println!("Singles");
    for track in &catalog.singles {
        println!("  {}", output::track_line(track, app.is_favorited(&track.id)));
    }
}

fn search(app: &App, query: &str) {
    match app.search(query) {
        SearchOutcome::AdminRequested => {
            println!("Admin tools: xl-player index --email <admin email> [--dry-run] <titles>...");
            println!("            xl-player index --email <admin email> --from <records.json>");
        }
        SearchOutcome::Results(results) if results.is_empty() => {
            println!("No results for '{}'.", query.trim());
        }
        SearchOutcome::Results(results) => {
            for album in &results.albums {
                println!("Album: {} - {}", album.name, album.artist);
            }
            for track in &results.tracks {
                println!("{}", output::track_line(track, app.is_favorited(&track.id)));
            }
        }
    }
}

async fn index(
    app: &mut App,
    artist: &str,
    dry_run: bool,
    from: Option<&Path>,
    titles: &[String],
) -> anyhow::Result<()> {
    let tracks = if let Some(path) = from {
        let records = read_records(path)
            .with_context(|| format!("reading records from {}", path.display()))?;
        app.import_records(&records)?
    } else {
        let indexer = GeminiIndexer::new(&app.config().indexer)?;
        if dry_run {
            let records = app.preview_import(&indexer, artist, titles).await?;
            println!("{}", records_to_json(&records)?);
            return Ok(());
        }
        app.import_tracks(&indexer, artist, titles).await?
    };

    for track in &tracks {
        println!("{}", output::track_line(track, false));
    }
    Ok(())
}

async fn play(app: &App, request: &PlayRequest) -> anyhow::Result<()> {
    let outcome = app.play(request).await?;

    for event in &outcome.events {
        if let Some(line) = output::describe_event(event, app.catalog()) {
            println!("{line}");
        }
    }

    let snapshot = &outcome.snapshot;
    if let Some(title) = &snapshot.current_title {
        println!(
            "{} {} / {} ({})",
            title,
            output::format_duration(snapshot.progress_secs),
            output::format_duration(snapshot.duration_secs),
            if snapshot.is_playing { "playing" } else { "stopped" }
        );
    }
    Ok(())
}
