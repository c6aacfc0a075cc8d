//! Playback manager - core orchestration
//!
//! Owns the queue, shuffle/repeat state, volume and simulated progress, and
//! feeds track transitions to the achievement evaluator and theme selector.
//!
//! All transitions are synchronous and infallible: invalid ones (empty
//! queue, nothing loaded) are no-ops. Ticks from the progress clock go
//! through the same `&mut self` methods, so they serialize with user
//! transitions by construction.

use crate::{
    achievements::{self, BadgeBook},
    error::{PlaybackError, Result},
    events::PlaybackEvent,
    played::PlayedTracks,
    queue::Queue,
    theme::select_theme,
    types::{PlaybackConfig, PlaybackSnapshot, RepeatMode, TickOutcome},
    volume::Volume,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;
use xl_core::{Album, AppTheme, KeyValueStore, LogNotifier, MemoryStore, Source, Track, TrackId};

/// Main playback manager
pub struct PlaybackManager {
    queue: Queue,
    is_playing: bool,

    // Derived from the current track on every change
    active_source: Option<Source>,
    duration: u32,

    // Simulated position in seconds, always <= duration
    progress: u32,

    shuffle: bool,
    repeat: RepeatMode,
    volume: Volume,
    theme: AppTheme,

    // Album-completion candidates
    albums: Vec<Album>,

    played: PlayedTracks,
    badges: BadgeBook,

    rng: Box<dyn RngCore + Send>,

    // Event queue for UI synchronization
    pending_events: Vec<PlaybackEvent>,
}

impl PlaybackManager {
    /// Create new playback manager
    ///
    /// `albums` are checked for completion when the end of a queue is
    /// reached. Played-track ids are loaded from `store`.
    pub fn new(
        config: PlaybackConfig,
        albums: Vec<Album>,
        store: Arc<dyn KeyValueStore>,
        badges: BadgeBook,
    ) -> Self {
        Self {
            queue: Queue::new(),
            is_playing: false,
            active_source: None,
            duration: 0,
            progress: 0,
            shuffle: config.shuffle,
            repeat: config.repeat,
            volume: Volume::new(config.volume),
            theme: AppTheme::default(),
            albums,
            played: PlayedTracks::load(store),
            badges,
            rng: Box::new(StdRng::from_entropy()),
            pending_events: Vec::new(),
        }
    }

    /// Replace the shuffle RNG (deterministic tests)
    pub fn with_rng(mut self, rng: impl RngCore + Send + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Replace the album-completion candidates (after an import)
    pub fn set_albums(&mut self, albums: Vec<Album>) {
        self.albums = albums;
    }

    // ===== Transitions =====

    /// Start playing `track` within `context`
    ///
    /// Without a context the queue is just `track`. A track missing from
    /// the context is placed in front of it.
    pub fn play_track(&mut self, track: Track, context: Option<Vec<Track>>) {
        let mut context = context.unwrap_or_else(|| vec![track.clone()]);
        if !context.iter().any(|t| t.id == track.id) {
            context.insert(0, track.clone());
        }

        let previous = self.current_track().map(|t| t.id.clone());
        self.queue
            .load(context, &track, self.shuffle, self.rng.as_mut());
        self.emit(PlaybackEvent::QueueChanged {
            length: self.queue.len(),
        });

        self.set_playing(true);
        self.on_track_changed(previous);

        tracing::info!(
            track = %track.id,
            title = %track.title,
            queue_len = self.queue.len(),
            shuffle = self.shuffle,
            "Playing track"
        );

        // Checked on every play so a stored count can still earn the badge
        self.played.insert(&track.id);
        if let Some(badge) = achievements::flint_ambassador(self.played.len()) {
            self.unlock(badge);
        }
    }

    /// Flip between playing and paused
    ///
    /// No-op when nothing is loaded.
    pub fn toggle_play(&mut self) {
        if self.queue.current().is_none() {
            return;
        }
        self.set_playing(!self.is_playing);
    }

    /// Advance to the next track
    ///
    /// Repeat-one restarts the current track. At the end of the queue the
    /// original context is checked for album completion, then playback
    /// either wraps (repeat-all) or stops on the last track.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        if self.repeat == RepeatMode::One {
            self.restart_current();
            self.set_playing(true);
            return;
        }

        let previous = self.current_track().map(|t| t.id.clone());

        if self.queue.is_last() {
            for badge in achievements::album_completion(&self.albums, self.queue.original()) {
                self.unlock(badge);
            }

            if self.repeat == RepeatMode::All {
                self.queue.wrap_to_start();
                self.set_playing(true);
                self.on_track_changed(previous);
            } else {
                tracing::debug!("End of queue reached, stopping");
                self.set_playing(false);
            }
            return;
        }

        self.queue.advance();
        self.set_playing(true);
        self.on_track_changed(previous);
    }

    /// Go back one track
    ///
    /// On the first track without repeat-all this only restarts it.
    pub fn previous(&mut self) {
        if self.queue.is_empty() {
            return;
        }

        if self.queue.current_index() == Some(0) && self.repeat != RepeatMode::All {
            self.restart_current();
            return;
        }

        let previous = self.current_track().map(|t| t.id.clone());
        self.queue.step_back();
        self.set_playing(true);
        self.on_track_changed(previous);
    }

    /// Flip shuffle, reordering the queue around the current track
    pub fn toggle_shuffle(&mut self) {
        self.shuffle = !self.shuffle;

        if self.queue.current().is_some() {
            if self.shuffle {
                self.queue.shuffle_around_current(self.rng.as_mut());
            } else {
                self.queue.restore_original_order();
            }
            self.emit(PlaybackEvent::QueueChanged {
                length: self.queue.len(),
            });
        }

        self.emit(PlaybackEvent::ShuffleChanged {
            enabled: self.shuffle,
        });
    }

    /// Off -> All -> One -> Off
    pub fn cycle_repeat_mode(&mut self) -> RepeatMode {
        self.repeat = self.repeat.cycle();
        self.emit(PlaybackEvent::RepeatChanged { mode: self.repeat });
        self.repeat
    }

    /// One second of simulated progress
    ///
    /// Reaching the duration hands off to [`next`](Self::next) in the same
    /// step and resets progress, so progress never exceeds the duration.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.clock_should_run() {
            return TickOutcome::Idle;
        }

        if self.progress + 1 >= self.duration {
            self.next();
            // A track change or repeat-one restart has already reset progress
            if self.progress != 0 {
                self.set_progress(0);
            }
            return TickOutcome::TrackEnded;
        }

        self.set_progress(self.progress + 1);
        TickOutcome::Progressed(self.progress)
    }

    /// Whether the progress clock should be running
    pub fn clock_should_run(&self) -> bool {
        self.is_playing && self.active_source.as_ref().is_some_and(|s| s.is_embeddable)
    }

    /// Jump to `secs`, clamped to the track duration
    pub fn seek(&mut self, secs: u32) -> Result<()> {
        if self.queue.current().is_none() {
            return Err(PlaybackError::NoTrackLoaded);
        }
        self.set_progress(secs.min(self.duration));
        Ok(())
    }

    /// Switch the active source to the current track's `index`-th source
    pub fn select_source(&mut self, index: usize) -> Result<()> {
        let track = self.queue.current().ok_or(PlaybackError::NoTrackLoaded)?;
        let source = track
            .sources
            .get(index)
            .cloned()
            .ok_or(PlaybackError::IndexOutOfBounds(index))?;

        tracing::debug!(platform = %source.platform.as_str(), "Source selected");
        self.emit(PlaybackEvent::SourceChanged {
            platform: Some(source.platform),
        });
        self.active_source = Some(source);
        Ok(())
    }

    // ===== Volume =====

    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        self.emit_volume_changed();
    }

    pub fn toggle_mute(&mut self) {
        self.volume.toggle_mute();
        self.emit_volume_changed();
    }

    pub fn volume(&self) -> &Volume {
        &self.volume
    }

    // ===== State Queries =====

    pub fn current_track(&self) -> Option<&Track> {
        self.queue.current()
    }

    pub fn current_index(&self) -> Option<usize> {
        self.queue.current_index()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// Progress in seconds
    pub fn progress(&self) -> u32 {
        self.progress
    }

    /// Duration of the current track in seconds
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn active_source(&self) -> Option<&Source> {
        self.active_source.as_ref()
    }

    /// Tracks in play order
    pub fn queue(&self) -> &[Track] {
        self.queue.play_order()
    }

    /// Tracks in context order
    pub fn original_queue(&self) -> &[Track] {
        self.queue.original()
    }

    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    pub fn theme(&self) -> AppTheme {
        self.theme
    }

    pub fn badges(&self) -> &BadgeBook {
        &self.badges
    }

    /// Number of distinct tracks ever started
    pub fn played_count(&self) -> usize {
        self.played.len()
    }

    pub fn snapshot(&self) -> PlaybackSnapshot {
        let current = self.queue.current();
        PlaybackSnapshot {
            current_track_id: current.map(|t| t.id.clone()),
            current_title: current.map(|t| t.title.clone()),
            current_index: self.queue.current_index(),
            queue: self.queue.play_order().iter().map(|t| t.id.clone()).collect(),
            is_playing: self.is_playing,
            progress_secs: self.progress,
            duration_secs: self.duration,
            active_platform: self.active_source.as_ref().map(|s| s.platform),
            shuffle: self.shuffle,
            repeat: self.repeat,
            volume: self.volume.level(),
            is_muted: self.volume.is_muted(),
            theme: self.theme,
        }
    }

    // ===== Event Queue =====

    /// Drain all pending events
    pub fn drain_events(&mut self) -> Vec<PlaybackEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    // ===== Internal =====

    /// Recompute everything derived from the current track
    fn on_track_changed(&mut self, previous: Option<TrackId>) {
        let Some(track) = self.queue.current() else {
            return;
        };
        let track_id = track.id.clone();
        let theme = select_theme(Some(track));
        self.active_source = track.active_source().cloned();
        self.duration = track.duration;

        tracing::debug!(
            track = %track_id,
            duration = self.duration,
            embeddable = self.active_source.as_ref().is_some_and(|s| s.is_embeddable),
            "Track changed"
        );

        self.emit(PlaybackEvent::TrackChanged {
            track_id,
            previous_track_id: previous,
        });
        self.emit(PlaybackEvent::SourceChanged {
            platform: self.active_source.as_ref().map(|s| s.platform),
        });
        self.set_progress(0);

        if theme != self.theme {
            self.theme = theme;
            self.emit(PlaybackEvent::ThemeChanged { theme });
        }
    }

    fn restart_current(&mut self) {
        self.set_progress(0);
    }

    fn set_playing(&mut self, playing: bool) {
        if self.is_playing != playing {
            self.is_playing = playing;
            self.emit(PlaybackEvent::StateChanged {
                is_playing: playing,
            });
        }
    }

    fn set_progress(&mut self, secs: u32) {
        self.progress = secs;
        self.emit(PlaybackEvent::ProgressChanged {
            position_secs: secs,
            duration_secs: self.duration,
        });
    }

    fn unlock(&mut self, badge: xl_core::BadgeId) {
        if let Some(unlocked) = self.badges.unlock(badge) {
            self.emit(PlaybackEvent::BadgeUnlocked {
                badge_id: unlocked.id,
                name: unlocked.name,
            });
        }
    }

    fn emit_volume_changed(&mut self) {
        self.emit(PlaybackEvent::VolumeChanged {
            level: self.volume.level(),
            is_muted: self.volume.is_muted(),
        });
    }

    fn emit(&mut self, event: PlaybackEvent) {
        self.pending_events.push(event);
    }
}

impl Default for PlaybackManager {
    /// Ephemeral manager: in-memory store, log notifications, no albums
    fn default() -> Self {
        let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
        let badges = BadgeBook::load(store.clone(), Arc::new(LogNotifier));
        Self::new(PlaybackConfig::default(), Vec::new(), store, badges)
    }
}

impl std::fmt::Debug for PlaybackManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlaybackManager")
            .field("current", &self.current_track().map(|t| &t.id))
            .field("index", &self.queue.current_index())
            .field("is_playing", &self.is_playing)
            .field("progress", &self.progress)
            .field("shuffle", &self.shuffle)
            .field("repeat", &self.repeat)
            .finish_non_exhaustive()
    }
}
