//! Achievement evaluation and badge bookkeeping
//!
//! The evaluator functions are pure: they map session facts to the badges
//! those facts qualify for. [`BadgeBook`] applies unlocks, which are
//! monotonic and idempotent: each badge notifies and persists exactly once.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use xl_core::storage::{self, keys};
use xl_core::{Album, Badge, BadgeId, KeyValueStore, NotificationSink, Track};

/// Favorites needed for `collector`
pub const COLLECTOR_THRESHOLD: usize = 5;

/// Distinct played tracks needed for `flint-ambassador`
pub const AMBASSADOR_THRESHOLD: usize = 8;

const RETRO_FUTURIST_ALBUM: &str = "Vaporwave Nights";
const DAY_ONE_ALBUM: &str = "Concrete Dreams";

/// `collector` once the favorites set reaches the threshold
pub fn collector(favorites_len: usize) -> Option<BadgeId> {
    (favorites_len >= COLLECTOR_THRESHOLD).then_some(BadgeId::Collector)
}

/// `flint-ambassador` once enough distinct tracks have been played
pub fn flint_ambassador(played_len: usize) -> Option<BadgeId> {
    (played_len >= AMBASSADOR_THRESHOLD).then_some(BadgeId::FlintAmbassador)
}

/// Badges earned by reaching the end of `original_queue`
///
/// The first album whose track set equals the queue's counts. Completion
/// yields `album-completer`, plus the album-specific badge for the two
/// named albums.
pub fn album_completion(albums: &[Album], original_queue: &[Track]) -> Vec<BadgeId> {
    let Some(album) = albums.iter().find(|a| a.is_completed_by(original_queue)) else {
        return Vec::new();
    };

    let mut badges = vec![BadgeId::AlbumCompleter];
    if album.name == RETRO_FUTURIST_ALBUM {
        badges.push(BadgeId::RetroFuturist);
    }
    if album.name == DAY_ONE_ALBUM {
        badges.push(BadgeId::DayOne);
    }
    badges
}

/// Shared handle to the badge set
///
/// Cloning shares state, so the playback manager and the favorites store
/// unlock against the same set.
#[derive(Clone)]
pub struct BadgeBook {
    badges: Arc<Mutex<Vec<Badge>>>,
    store: Arc<dyn KeyValueStore>,
    sink: Arc<dyn NotificationSink>,
}

impl BadgeBook {
    /// Load earned ids from the store; unknown or malformed entries are ignored
    pub fn load(store: Arc<dyn KeyValueStore>, sink: Arc<dyn NotificationSink>) -> Self {
        let earned: Vec<String> =
            storage::load_json(store.as_ref(), keys::EARNED_BADGES).unwrap_or_default();

        let mut badges = Badge::catalogue();
        for badge in &mut badges {
            badge.earned = earned.iter().any(|id| id == badge.id.as_str());
        }

        Self {
            badges: Arc::new(Mutex::new(badges)),
            store,
            sink,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Badge>> {
        self.badges.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Mark a badge earned
    ///
    /// Returns the badge only when this call earned it. Already-earned badges
    /// produce no notification and no write.
    pub fn unlock(&self, id: BadgeId) -> Option<Badge> {
        let mut badges = self.lock();
        let badge = badges.iter_mut().find(|b| b.id == id)?;
        if badge.earned {
            return None;
        }
        badge.earned = true;
        let unlocked = badge.clone();

        let earned: Vec<&str> = badges
            .iter()
            .filter(|b| b.earned)
            .map(|b| b.id.as_str())
            .collect();
        storage::save_json(self.store.as_ref(), keys::EARNED_BADGES, &earned);
        drop(badges);

        tracing::info!(badge = %id, "Badge unlocked");
        self.sink
            .notify(&format!("Achievement Unlocked: {}!", unlocked.name));

        Some(unlocked)
    }

    pub fn is_earned(&self, id: BadgeId) -> bool {
        self.lock().iter().any(|b| b.id == id && b.earned)
    }

    /// All badges in catalogue order
    pub fn badges(&self) -> Vec<Badge> {
        self.lock().clone()
    }

    pub fn earned_ids(&self) -> Vec<BadgeId> {
        self.lock()
            .iter()
            .filter(|b| b.earned)
            .map(|b| b.id)
            .collect()
    }
}

impl std::fmt::Debug for BadgeBook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BadgeBook")
            .field("earned", &self.earned_ids())
            .finish_non_exhaustive()
    }
}
