/// Album domain type
use crate::types::Track;
use serde::{Deserialize, Serialize};

/// Album with tracks in default play order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artist: String,
    pub year: u16,
    #[serde(default)]
    pub album_art_url: String,
    pub tracks: Vec<Track>,
}

impl Album {
    /// True when `queue` is exactly this album's track set, in any order
    ///
    /// Single-track albums never count as completed.
    pub fn is_completed_by(&self, queue: &[Track]) -> bool {
        self.tracks.len() > 1
            && self.tracks.len() == queue.len()
            && self
                .tracks
                .iter()
                .all(|t| queue.iter().any(|q| q.id == t.id))
    }
}
