//! Favorites store
//!
//! A set of track ids, persisted in full on every toggle. Adding a favorite
//! re-evaluates the `collector` badge.

use crate::achievements::{self, BadgeBook};
use std::collections::HashSet;
use std::sync::Arc;
use xl_core::storage::{self, keys};
use xl_core::{KeyValueStore, Track, TrackId};

pub struct Favorites {
    ids: HashSet<TrackId>,
    store: Arc<dyn KeyValueStore>,
    badges: BadgeBook,
}

impl Favorites {
    pub fn load(store: Arc<dyn KeyValueStore>, badges: BadgeBook) -> Self {
        let ids: Vec<TrackId> =
            storage::load_json(store.as_ref(), keys::FAVORITED_SONGS).unwrap_or_default();
        Self {
            ids: ids.into_iter().collect(),
            store,
            badges,
        }
    }

    /// Add or remove a favorite, returning whether it is now favorited
    pub fn toggle(&mut self, id: &TrackId) -> bool {
        let favorited = if self.ids.remove(id) {
            false
        } else {
            self.ids.insert(id.clone());
            true
        };

        self.persist();
        tracing::debug!(track = %id, favorited, "Favorite toggled");

        if favorited {
            if let Some(badge) = achievements::collector(self.ids.len()) {
                self.badges.unlock(badge);
            }
        }
        favorited
    }

    fn persist(&self) {
        let mut ids: Vec<&TrackId> = self.ids.iter().collect();
        ids.sort();
        storage::save_json(self.store.as_ref(), keys::FAVORITED_SONGS, &ids);
    }

    pub fn is_favorited(&self, id: &TrackId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Favorited tracks from `tracks`, in the given order
    pub fn favorite_tracks(&self, tracks: &[Track]) -> Vec<Track> {
        tracks
            .iter()
            .filter(|t| self.ids.contains(&t.id))
            .cloned()
            .collect()
    }
}
