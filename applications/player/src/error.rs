/// Player error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Access denied: invalid admin credentials")]
    AccessDenied,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Storage error: {0}")]
    Core(#[from] xl_core::CoreError),

    #[error("Playback error: {0}")]
    Playback(#[from] xl_playback::PlaybackError),

    #[error("Indexer error: {0}")]
    Indexer(#[from] xl_indexer::IndexerError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid records file: {0}")]
    Records(#[from] serde_json::Error),
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}
