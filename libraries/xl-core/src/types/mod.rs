//! Domain types for the XL Beats catalog and player

mod album;
mod badge;
mod ids;
mod theme;
mod track;

pub use album::Album;
pub use badge::{Badge, BadgeId};
pub use ids::TrackId;
pub use theme::AppTheme;
pub use track::{Source, SourcePlatform, Track};
