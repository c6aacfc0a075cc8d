//! XL Beats - Track Indexer
//!
//! Admin-side tooling for adding singles to the catalog.
//!
//! - [`TrackIndexer`]: async collaborator that looks up streaming links for
//!   a list of titles; [`GeminiIndexer`] calls the Generative Language API
//! - [`tracks_from_indexed`]: converts indexer output into catalog tracks,
//!   dropping unusable links
//! - [`is_admin_email`]: the admin entry check
//!
//! Indexing failures never surface as errors to the caller. Each requested
//! title comes back with the `"Error fetching"` placeholder instead, which
//! the import step filters out.

#![forbid(unsafe_code)]

pub mod admin;
pub mod client;
pub mod error;
pub mod import;
pub mod types;

pub use admin::{is_admin_email, DEFAULT_ADMIN_EMAIL};
pub use client::{GeminiIndexer, TrackIndexer};
pub use error::{IndexerError, Result};
pub use import::tracks_from_indexed;
pub use types::{IndexedTrack, IndexerConfig, ERROR_FETCHING};

#[cfg(any(test, feature = "mock"))]
pub use client::MockTrackIndexer;
