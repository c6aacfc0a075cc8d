//! Player application state
//!
//! Wires the catalog, persisted favorites/badges and playback session
//! together behind the operations the CLI exposes.

use crate::config::PlayerConfig;
use crate::error::{AppError, Result};
use std::path::Path;
use std::sync::Arc;
use xl_core::storage;
use xl_core::{Badge, Catalog, KeyValueStore, NotificationSink, SearchResults, Track, TrackId};
use xl_indexer::{is_admin_email, tracks_from_indexed, IndexedTrack, TrackIndexer};
use xl_playback::{
    BadgeBook, Favorites, PlaybackEvent, PlaybackManager, PlaybackSession, PlaybackSnapshot,
    RepeatMode,
};

/// What the user asked to play
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayTarget {
    /// Every track of an album, from the first
    Album(String),

    /// One track, queued within its album or the singles list
    Track(TrackId),

    /// The favorites list, from the first favorite
    Favorites,
}

/// Options for a simulated session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayRequest {
    pub target: PlayTarget,

    /// Force shuffle on; otherwise the configured default applies
    pub shuffle: bool,

    /// Overrides the configured repeat mode
    pub repeat: Option<RepeatMode>,

    /// Clock ticks to let elapse
    pub ticks: u32,
}

/// Result of a finished session
#[derive(Debug, Clone)]
pub struct PlayOutcome {
    pub events: Vec<PlaybackEvent>,
    pub snapshot: PlaybackSnapshot,
}

/// Result of a search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// The query was the admin entry command
    AdminRequested,
    Results(SearchResults),
}

pub struct App {
    config: PlayerConfig,
    store: Arc<dyn KeyValueStore>,
    sink: Arc<dyn NotificationSink>,
    catalog: Catalog,
    badges: BadgeBook,
    favorites: Favorites,
}

impl App {
    /// Load catalog and persisted state from `store`
    pub fn open(
        config: PlayerConfig,
        store: Arc<dyn KeyValueStore>,
        sink: Arc<dyn NotificationSink>,
    ) -> Self {
        let catalog = Catalog::load(store.as_ref());
        let badges = BadgeBook::load(Arc::clone(&store), Arc::clone(&sink));
        let favorites = Favorites::load(Arc::clone(&store), badges.clone());

        tracing::debug!(
            albums = catalog.albums.len(),
            singles = catalog.singles.len(),
            favorites = favorites.len(),
            earned = badges.earned_ids().len(),
            "Player state loaded"
        );

        Self {
            config,
            store,
            sink,
            catalog,
            badges,
            favorites,
        }
    }

    /// True exactly once: on the first run against this store
    pub fn take_onboarding(&self) -> bool {
        if storage::has_seen_onboarding(self.store.as_ref()) {
            return false;
        }
        storage::mark_onboarding_seen(self.store.as_ref());
        true
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn search(&self, query: &str) -> SearchOutcome {
        if Catalog::is_admin_command(query) {
            return SearchOutcome::AdminRequested;
        }
        SearchOutcome::Results(self.catalog.search(query))
    }

    /// Toggle a favorite by id, returning whether it is now favorited
    pub fn toggle_favorite(&mut self, id: &TrackId) -> Result<bool> {
        if self.catalog.find_track(id).is_none() {
            return Err(AppError::NotFound(format!("track {id}")));
        }
        Ok(self.favorites.toggle(id))
    }

    pub fn favorite_tracks(&self) -> Vec<Track> {
        self.favorites.favorite_tracks(&self.catalog.all_tracks())
    }

    pub fn is_favorited(&self, id: &TrackId) -> bool {
        self.favorites.is_favorited(id)
    }

    pub fn badges(&self) -> Vec<Badge> {
        self.badges.badges()
    }

    /// Resolve a target into the starting track and its context
    pub fn resolve(&self, target: &PlayTarget) -> Result<(Track, Vec<Track>)> {
        match target {
            PlayTarget::Album(name) => {
                let album = self
                    .catalog
                    .find_album(name)
                    .ok_or_else(|| AppError::NotFound(format!("album '{name}'")))?;
                let first = album
                    .tracks
                    .first()
                    .cloned()
                    .ok_or_else(|| AppError::InvalidInput(format!("album '{name}' is empty")))?;
                Ok((first, album.tracks.clone()))
            }
            PlayTarget::Track(id) => {
                let track = self
                    .catalog
                    .find_track(id)
                    .ok_or_else(|| AppError::NotFound(format!("track {id}")))?;
                let context = self
                    .catalog
                    .albums
                    .iter()
                    .find(|a| a.tracks.iter().any(|t| &t.id == id))
                    .map_or_else(|| self.catalog.singles.clone(), |a| a.tracks.clone());
                Ok((track, context))
            }
            PlayTarget::Favorites => {
                let favorites = self.favorite_tracks();
                let first = favorites
                    .first()
                    .cloned()
                    .ok_or_else(|| AppError::InvalidInput("no favorites yet".to_string()))?;
                Ok((first, favorites))
            }
        }
    }

    /// Run a session for the requested number of clock ticks
    pub async fn play(&self, request: &PlayRequest) -> Result<PlayOutcome> {
        let (track, context) = self.resolve(&request.target)?;

        let mut playback = self.config.playback_config();
        playback.shuffle |= request.shuffle;
        if let Some(repeat) = request.repeat {
            playback.repeat = repeat;
        }

        let manager = PlaybackManager::new(
            playback,
            self.catalog.albums.clone(),
            Arc::clone(&self.store),
            self.badges.clone(),
        );
        let tick = self.config.tick();
        let mut session = PlaybackSession::new(manager, tick);
        session.play_track(track, Some(context)).await;

        // Half a period past the last tick so it has landed
        let wait = tick * request.ticks + tick / 2;
        tokio::time::sleep(wait).await;
        session.shutdown();

        let outcome = PlayOutcome {
            events: session.drain_events().await,
            snapshot: session.snapshot().await,
        };
        tracing::info!(
            ticks = request.ticks,
            events = outcome.events.len(),
            "Session finished"
        );
        Ok(outcome)
    }

    /// Check an email against the configured admin address
    pub fn authorize_admin(&self, email: &str) -> Result<()> {
        if is_admin_email(email, &self.config.admin.email) {
            Ok(())
        } else {
            tracing::warn!("Rejected admin login");
            Err(AppError::AccessDenied)
        }
    }

    /// Index `titles` without touching the catalog
    ///
    /// The records can be reviewed, saved with [`records_to_json`], edited
    /// and later passed to [`import_records`](Self::import_records).
    pub async fn preview_import(
        &self,
        indexer: &dyn TrackIndexer,
        artist: &str,
        titles: &[String],
    ) -> Result<Vec<IndexedTrack>> {
        let titles = clean_titles(titles)?;
        Ok(indexer.index_tracks(&titles, artist).await)
    }

    /// Add reviewed records to the singles list
    pub fn import_records(&mut self, records: &[IndexedTrack]) -> Result<Vec<Track>> {
        if records.is_empty() {
            return Err(AppError::InvalidInput("no records to import".to_string()));
        }
        if records.iter().any(|r| r.track_title.trim().is_empty()) {
            return Err(AppError::InvalidInput(
                "every record needs a track title".to_string(),
            ));
        }

        let unresolved = records.iter().filter(|r| r.has_fetch_errors()).count();
        if unresolved > 0 {
            tracing::warn!(unresolved, "Importing records with unresolved links");
        }

        let tracks = tracks_from_indexed(records);
        let added = self
            .catalog
            .add_singles(self.store.as_ref(), tracks.clone());

        self.sink.notify(&format!("{added} tracks added to Singles!"));
        Ok(tracks)
    }

    /// Index `titles` and add the results to the singles list straight away
    pub async fn import_tracks(
        &mut self,
        indexer: &dyn TrackIndexer,
        artist: &str,
        titles: &[String],
    ) -> Result<Vec<Track>> {
        let records = self.preview_import(indexer, artist, titles).await?;
        self.import_records(&records)
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }
}

fn clean_titles(titles: &[String]) -> Result<Vec<String>> {
    let titles: Vec<String> = titles
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect();
    if titles.is_empty() {
        return Err(AppError::InvalidInput("no track titles given".to_string()));
    }
    Ok(titles)
}

/// Pretty JSON for a set of indexed records
pub fn records_to_json(records: &[IndexedTrack]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Read records written by [`records_to_json`], possibly hand-edited
pub fn read_records(path: &Path) -> Result<Vec<IndexedTrack>> {
    let text = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}
