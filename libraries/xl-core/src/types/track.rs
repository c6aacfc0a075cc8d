/// Track domain type
use crate::types::TrackId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Streaming platform a source points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SourcePlatform {
    #[serde(rename = "YouTube")]
    YouTube,
    #[serde(rename = "Spotify")]
    Spotify,
    #[serde(rename = "Apple Music")]
    AppleMusic,
    #[serde(rename = "BeatStars")]
    BeatStars,
    #[serde(rename = "Other")]
    Other,
}

impl SourcePlatform {
    /// Display name, identical to the persisted tag
    pub fn as_str(&self) -> &'static str {
        match self {
            SourcePlatform::YouTube => "YouTube",
            SourcePlatform::Spotify => "Spotify",
            SourcePlatform::AppleMusic => "Apple Music",
            SourcePlatform::BeatStars => "BeatStars",
            SourcePlatform::Other => "Other",
        }
    }
}

impl fmt::Display for SourcePlatform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A place a track can be played or opened from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Source {
    pub platform: SourcePlatform,
    pub url: String,

    /// Whether the source can be played in-app (otherwise it links out)
    pub is_embeddable: bool,
}

impl Source {
    pub fn new(platform: SourcePlatform, url: impl Into<String>, is_embeddable: bool) -> Self {
        Self {
            platform,
            url: url.into(),
            is_embeddable,
        }
    }
}

/// Catalog track
///
/// Immutable once loaded. A track can sit in several playback contexts at
/// once (album, singles, favorites, search results).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    pub id: TrackId,
    pub title: String,
    pub artist: String,

    /// Album name ("Single" for standalone releases)
    pub album: String,

    #[serde(default)]
    pub album_art_url: String,

    /// Duration in whole seconds
    pub duration: u32,

    /// Ordered sources; the first embeddable one wins
    #[serde(default)]
    pub sources: Vec<Source>,
}

impl Track {
    /// The source used for playback: first embeddable, else first overall
    pub fn active_source(&self) -> Option<&Source> {
        self.sources
            .iter()
            .find(|s| s.is_embeddable)
            .or_else(|| self.sources.first())
    }

    /// Case-insensitive substring match over title, artist and album
    pub fn matches(&self, lower_query: &str) -> bool {
        self.title.to_lowercase().contains(lower_query)
            || self.artist.to_lowercase().contains(lower_query)
            || self.album.to_lowercase().contains(lower_query)
    }
}
