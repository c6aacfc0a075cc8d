//! Gemini-backed track indexer.

use crate::error::{IndexerError, Result};
use crate::types::{IndexedTrack, IndexerConfig};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Finds streaming links for a list of titles
///
/// Never fails: on any error every title comes back as
/// [`IndexedTrack::fetch_failed`]. An empty title list yields an empty result
/// without contacting anything.
#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait]
pub trait TrackIndexer: Send + Sync {
    async fn index_tracks(&self, titles: &[String], artist: &str) -> Vec<IndexedTrack>;
}

/// Indexer calling the Generative Language `generateContent` endpoint
///
/// # Example
///
/// ```ignore
/// use xl_indexer::{GeminiIndexer, IndexerConfig, TrackIndexer};
///
/// let config = IndexerConfig {
///     api_key: Some("key".into()),
///     ..IndexerConfig::default()
/// };
/// let indexer = GeminiIndexer::new(&config)?;
///
/// let records = indexer
///     .index_tracks(&["Flint Town Hustle".to_string()], "XL Beats")
///     .await;
/// ```
#[derive(Debug, Clone)]
pub struct GeminiIndexer {
    http: Client,
    url: String,
    api_key: String,
}

impl GeminiIndexer {
    /// Create a new indexer from configuration
    pub fn new(config: &IndexerConfig) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or(IndexerError::MissingApiKey)?;

        let endpoint = config.endpoint.trim_end_matches('/');
        url::Url::parse(endpoint).map_err(|e| IndexerError::InvalidUrl(format!("{endpoint}: {e}")))?;

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("XLBeatsPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            url: format!("{endpoint}/models/{}:generateContent", config.model),
            api_key,
        })
    }

    /// The request itself; errors are mapped to fallbacks by the caller
    async fn request(&self, titles: &[String], artist: &str) -> Result<Vec<IndexedTrack>> {
        debug!(url = %self.url, titles = titles.len(), "Requesting track index");

        let response = self
            .http
            .post(&self.url)
            .header("x-goog-api-key", &self.api_key)
            .json(&request_body(titles, artist))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(IndexerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| IndexerError::ParseError(format!("Invalid response body: {e}")))?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().find_map(|p| p.text))
            .ok_or_else(|| IndexerError::ParseError("Response has no text part".into()))?;

        serde_json::from_str(text.trim())
            .map_err(|e| IndexerError::ParseError(format!("Invalid track list: {e}")))
    }
}

#[async_trait]
impl TrackIndexer for GeminiIndexer {
    async fn index_tracks(&self, titles: &[String], artist: &str) -> Vec<IndexedTrack> {
        if titles.is_empty() {
            return Vec::new();
        }

        match self.request(titles, artist).await {
            Ok(records) => {
                info!(artist, requested = titles.len(), indexed = records.len(), "Tracks indexed");
                records
            }
            Err(e) => {
                warn!(artist, error = %e, "Track indexing failed, returning placeholders");
                titles.iter().map(IndexedTrack::fetch_failed).collect()
            }
        }
    }
}

fn prompt(titles: &[String], artist: &str) -> String {
    format!(
        "Analyze the following list of track titles by the artist or producer \"{artist}\".\n\
         For each track, find the official public streaming URL on YouTube, Spotify, and Apple Music.\n\
         Prioritize official artist channels, music videos, or official audio uploads.\n\
         If a valid, official URL cannot be found for a specific platform, return an empty string for that field.\n\
         Track Titles:\n{}",
        titles.join("\n")
    )
}

fn request_body(titles: &[String], artist: &str) -> Value {
    json!({
        "contents": [{ "parts": [{ "text": prompt(titles, artist) }] }],
        "generationConfig": {
            "responseMimeType": "application/json",
            "responseSchema": {
                "type": "ARRAY",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "trackTitle": { "type": "STRING" },
                        "youtubeUrl": { "type": "STRING" },
                        "spotifyUrl": { "type": "STRING" },
                        "appleMusicUrl": { "type": "STRING" }
                    },
                    "required": ["trackTitle"]
                }
            }
        }
    })
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Content,
}

#[derive(Debug, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    text: Option<String>,
}
