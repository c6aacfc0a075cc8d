/// Player configuration
use crate::error::{AppError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use xl_indexer::{IndexerConfig, DEFAULT_ADMIN_EMAIL};
use xl_playback::{PlaybackConfig, RepeatMode};

/// Config file read from the working directory when `--config` is absent
pub const DEFAULT_CONFIG_FILE: &str = "xl-player.toml";

/// Environment prefix; nested keys use `__` (`XL_PLAYBACK__TICK_MS`)
pub const ENV_PREFIX: &str = "XL";

/// Fallback variable for the indexer key
pub const API_KEY_VAR: &str = "API_KEY";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_playback")]
    pub playback: PlaybackSettings,

    #[serde(default)]
    pub indexer: IndexerConfig,

    #[serde(default = "default_admin")]
    pub admin: AdminSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct StorageSettings {
    #[serde(default = "default_state_file")]
    pub state_file: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlaybackSettings {
    #[serde(default)]
    pub shuffle: bool,

    #[serde(default)]
    pub repeat: RepeatMode,

    #[serde(default = "default_volume")]
    pub volume: f32,

    /// Progress clock period in milliseconds
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AdminSettings {
    #[serde(default = "default_admin_email")]
    pub email: String,
}

impl PlayerConfig {
    /// Load configuration from file and process environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_from(path, None)
    }

    /// Load with an explicit environment map instead of the process environment
    ///
    /// An explicitly named file must exist; the default file is optional.
    pub fn load_from(path: Option<&Path>, env: Option<config::Map<String, String>>) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = match path {
            Some(path) => settings.add_source(config::File::from(path).required(true)),
            None => settings
                .add_source(config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false)),
        };

        let api_key_fallback = match &env {
            Some(vars) => vars.get(API_KEY_VAR).cloned(),
            None => std::env::var(API_KEY_VAR).ok(),
        };

        // Override with environment variables (prefixed with XL_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .source(env),
        );

        let mut config: PlayerConfig = settings.build()?.try_deserialize()?;

        if config.indexer.api_key.is_none() {
            config.indexer.api_key = api_key_fallback.filter(|k| !k.is_empty());
        }

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.playback.volume) {
            return Err(AppError::Config(format!(
                "playback.volume must be within 0.0-1.0, got {}",
                self.playback.volume
            )));
        }

        if self.playback.tick_ms == 0 {
            return Err(AppError::Config(
                "playback.tick_ms must be greater than zero".to_string(),
            ));
        }

        if self.admin.email.trim().is_empty() {
            return Err(AppError::Config("admin.email cannot be empty".to_string()));
        }

        Ok(())
    }

    pub fn playback_config(&self) -> PlaybackConfig {
        PlaybackConfig {
            shuffle: self.playback.shuffle,
            repeat: self.playback.repeat,
            volume: self.playback.volume,
        }
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.playback.tick_ms)
    }
}

// Default values
fn default_storage() -> StorageSettings {
    StorageSettings {
        state_file: default_state_file(),
    }
}

fn default_state_file() -> PathBuf {
    PathBuf::from("xl-beats-state.json")
}

fn default_playback() -> PlaybackSettings {
    PlaybackSettings {
        shuffle: false,
        repeat: RepeatMode::Off,
        volume: default_volume(),
        tick_ms: default_tick_ms(),
    }
}

fn default_volume() -> f32 {
    1.0
}

fn default_tick_ms() -> u64 {
    1000
}

fn default_admin() -> AdminSettings {
    AdminSettings {
        email: default_admin_email(),
    }
}

fn default_admin_email() -> String {
    DEFAULT_ADMIN_EMAIL.to_string()
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            storage: default_storage(),
            playback: default_playback(),
            indexer: IndexerConfig::default(),
            admin: default_admin(),
        }
    }
}
