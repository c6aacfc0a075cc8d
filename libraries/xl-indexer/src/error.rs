//! Error types for the track indexer.

use thiserror::Error;

/// Errors from the indexing request
///
/// These never leave [`TrackIndexer::index_tracks`](crate::TrackIndexer);
/// they are logged and replaced by per-title fallback records.
#[derive(Error, Debug)]
pub enum IndexerError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("Indexing service error ({status}): {message}")]
    Api { status: u16, message: String },

    /// No API key configured
    #[error("API key not configured (set indexer.api_key or API_KEY)")]
    MissingApiKey,

    /// Invalid endpoint URL
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Response did not contain the expected JSON
    #[error("Failed to parse response: {0}")]
    ParseError(String),
}

/// Result type for indexer operations.
pub type Result<T> = std::result::Result<T, IndexerError>;
