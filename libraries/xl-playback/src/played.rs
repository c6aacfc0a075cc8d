//! Played-track set
//!
//! Distinct track ids started during any session. Feeds the
//! `flint-ambassador` badge and is written through on every new id.

use std::collections::HashSet;
use std::sync::Arc;
use xl_core::storage::{self, keys};
use xl_core::{KeyValueStore, TrackId};

pub struct PlayedTracks {
    ids: HashSet<TrackId>,
    store: Arc<dyn KeyValueStore>,
}

impl PlayedTracks {
    /// Load persisted ids; malformed data starts empty
    pub fn load(store: Arc<dyn KeyValueStore>) -> Self {
        let ids: Vec<TrackId> =
            storage::load_json(store.as_ref(), keys::PLAYED_TRACKS).unwrap_or_default();
        Self {
            ids: ids.into_iter().collect(),
            store,
        }
    }

    /// Record a play, returning true when the id is new
    pub fn insert(&mut self, id: &TrackId) -> bool {
        if !self.ids.insert(id.clone()) {
            return false;
        }
        let mut ids: Vec<&TrackId> = self.ids.iter().collect();
        ids.sort();
        storage::save_json(self.store.as_ref(), keys::PLAYED_TRACKS, &ids);
        true
    }

    pub fn contains(&self, id: &TrackId) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl std::fmt::Debug for PlayedTracks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PlayedTracks")
            .field("len", &self.ids.len())
            .finish_non_exhaustive()
    }
}
