//! Indexer request/response types.

use serde::{Deserialize, Serialize};

/// URL placeholder used for every platform when indexing fails
pub const ERROR_FETCHING: &str = "Error fetching";

/// Default generative model
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default Generative Language API base URL
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Streaming links found for one title
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexedTrack {
    pub track_title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spotify_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub apple_music_url: Option<String>,
}

impl IndexedTrack {
    /// Record marking every platform as failed
    pub fn fetch_failed(title: impl Into<String>) -> Self {
        Self {
            track_title: title.into(),
            youtube_url: Some(ERROR_FETCHING.to_string()),
            spotify_url: Some(ERROR_FETCHING.to_string()),
            apple_music_url: Some(ERROR_FETCHING.to_string()),
        }
    }

    /// Whether any platform still carries the failure placeholder
    pub fn has_fetch_errors(&self) -> bool {
        [&self.youtube_url, &self.spotify_url, &self.apple_music_url]
            .into_iter()
            .any(|url| url.as_deref().map(str::trim) == Some(ERROR_FETCHING))
    }
}

/// Indexer settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexerConfig {
    /// API key; `None` disables indexing
    pub api_key: Option<String>,

    pub model: String,

    /// API base URL, without trailing `/models`
    pub endpoint: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for IndexerConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 30,
        }
    }
}
