//! XL Beats - Playback Management
//!
//! Queue and transition logic for the XL Beats player.
//!
//! This crate provides:
//! - Play queue with original and play order (shuffle pins the current track first)
//! - Repeat modes (Off, All, One)
//! - Simulated progress with a single cancelable clock
//! - Achievement evaluation (collector, flint-ambassador, album completion)
//! - Favorites with write-through persistence
//! - Theme selection from the playing track
//!
//! # Architecture
//!
//! [`PlaybackManager`] is synchronous and owns all queue state; every
//! transition is a `&mut self` call. [`PlaybackSession`] wraps it in a tokio
//! mutex and keeps exactly one [`ProgressClock`] alive while playback runs.
//! Persistence and notifications are injected through the `xl-core` traits.
//!
//! # Example: Album playback
//!
//! ```rust
//! use xl_core::Catalog;
//! use xl_playback::{PlaybackManager, RepeatMode};
//!
//! let catalog = Catalog::default_catalog();
//! let album = catalog.find_album("Concrete Dreams").unwrap().clone();
//!
//! let mut manager = PlaybackManager::default();
//! manager.set_albums(catalog.albums.clone());
//! manager.play_track(album.tracks[0].clone(), Some(album.tracks.clone()));
//!
//! manager.next();
//! assert_eq!(manager.current_index(), Some(1));
//!
//! assert_eq!(manager.cycle_repeat_mode(), RepeatMode::All);
//! ```
//!
//! # Example: Favorites
//!
//! ```rust
//! use std::sync::Arc;
//! use xl_core::{KeyValueStore, LogNotifier, MemoryStore, TrackId};
//! use xl_playback::{BadgeBook, Favorites};
//!
//! let store: Arc<dyn KeyValueStore> = Arc::new(MemoryStore::new());
//! let badges = BadgeBook::load(store.clone(), Arc::new(LogNotifier));
//! let mut favorites = Favorites::load(store, badges);
//!
//! assert!(favorites.toggle(&TrackId::new("xlb001")));
//! assert!(!favorites.toggle(&TrackId::new("xlb001")));
//! ```

#![forbid(unsafe_code)]

pub mod achievements;
pub mod clock;
pub mod error;
pub mod events;
pub mod favorites;
pub mod manager;
pub mod played;
pub mod queue;
pub mod shuffle;
pub mod theme;
pub mod types;
pub mod volume;

pub use achievements::BadgeBook;
pub use clock::{PlaybackSession, ProgressClock, DEFAULT_TICK};
pub use error::{PlaybackError, Result};
pub use events::PlaybackEvent;
pub use favorites::Favorites;
pub use manager::PlaybackManager;
pub use played::PlayedTracks;
pub use queue::Queue;
pub use theme::select_theme;
pub use types::{PlaybackConfig, PlaybackSnapshot, RepeatMode, TickOutcome};
pub use volume::Volume;
