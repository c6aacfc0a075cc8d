//! Error types for playback management

use thiserror::Error;

/// Playback errors
///
/// Queue transitions never fail; invalid ones are no-ops. Only operations
/// that take a caller-supplied index or need a loaded track report errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaybackError {
    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
