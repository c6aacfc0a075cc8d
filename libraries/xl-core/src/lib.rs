//! XL Beats Core
//!
//! Platform-agnostic catalog types, persistence and notification traits for
//! the XL Beats player.
//!
//! # Architecture
//!
//! The core crate defines:
//! - **Domain Types**: `Track`, `Source`, `Album`, `Badge`, `AppTheme`
//! - **Persistence**: the `KeyValueStore` abstraction with in-memory and
//!   JSON-file implementations, plus the keys the player writes
//! - **Notifications**: the fire-and-forget `NotificationSink`
//! - **Catalog**: the built-in album/single set, loading, search and admin import
//! - **Error Handling**: unified `CoreError` and `Result` types
//!
//! # Example
//!
//! ```rust
//! use xl_core::{Catalog, MemoryStore};
//!
//! let store = MemoryStore::new();
//! let catalog = Catalog::load(&store);
//!
//! let album = catalog.find_album("Concrete Dreams").unwrap();
//! assert_eq!(album.tracks.len(), 3);
//! ```

#![forbid(unsafe_code)]

pub mod catalog;
pub mod error;
pub mod storage;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use catalog::{Catalog, SearchResults, ADMIN_SEARCH_COMMAND};
pub use error::{CoreError, Result};
pub use storage::{JsonFileStore, KeyValueStore, MemoryStore};
pub use traits::{LogNotifier, NotificationSink};

pub use types::{
    Album, AppTheme, Badge, BadgeId, Source, SourcePlatform, Track, TrackId,
};
