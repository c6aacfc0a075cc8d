//! XL Beats Player
//!
//! Command-line front end: catalog browsing, simulated playback sessions,
//! favorites, badges and the admin track import.
//!
//! This library exposes the application components for testing purposes.

#![forbid(unsafe_code)]

pub mod app;
pub mod config;
pub mod error;
pub mod notify;
pub mod output;

// Re-export commonly used types for convenience
pub use app::{
    read_records, records_to_json, App, PlayOutcome, PlayRequest, PlayTarget, SearchOutcome,
};
pub use config::PlayerConfig;
pub use error::{AppError, Result};
pub use notify::ConsoleNotifier;
