//! Playback Events
//!
//! Event-based communication for UI synchronization. The manager queues
//! events as state changes; the UI layer drains them after each operation
//! or clock tick.

use crate::types::RepeatMode;
use serde::{Deserialize, Serialize};
use xl_core::{AppTheme, BadgeId, SourcePlatform, TrackId};

/// Events emitted by the playback system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PlaybackEvent {
    /// Playing flag flipped
    StateChanged { is_playing: bool },

    /// A different (or restarted) track became current
    TrackChanged {
        track_id: TrackId,
        previous_track_id: Option<TrackId>,
    },

    /// Progress moved (tick, seek, or restart)
    ProgressChanged { position_secs: u32, duration_secs: u32 },

    /// Queue was rebuilt or reordered
    QueueChanged { length: usize },

    ShuffleChanged { enabled: bool },

    RepeatChanged { mode: RepeatMode },

    /// Active source changed
    SourceChanged { platform: Option<SourcePlatform> },

    ThemeChanged { theme: AppTheme },

    VolumeChanged { level: f32, is_muted: bool },

    /// A badge was earned for the first time
    BadgeUnlocked { badge_id: BadgeId, name: String },
}
