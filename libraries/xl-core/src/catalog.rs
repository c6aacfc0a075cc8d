//! Music catalog
//!
//! Albums and singles supplied at startup. The catalog is read from the
//! store when both lists are present and valid, otherwise the built-in
//! default set is used.

use crate::storage::{self, keys, KeyValueStore};
use crate::types::{Album, Source, SourcePlatform, Track, TrackId};
use serde::{Deserialize, Serialize};

/// Search query that opens the admin panel instead of searching
pub const ADMIN_SEARCH_COMMAND: &str = "/admin-protocol";

const DEMO_VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

/// Albums plus standalone singles
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub albums: Vec<Album>,
    pub singles: Vec<Track>,
}

/// Result of a catalog search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResults {
    pub albums: Vec<Album>,
    pub tracks: Vec<Track>,
}

impl SearchResults {
    pub fn is_empty(&self) -> bool {
        self.albums.is_empty() && self.tracks.is_empty()
    }
}

impl Catalog {
    /// Load from the store, falling back to the built-in set
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let albums: Option<Vec<Album>> = storage::load_json(store, keys::ALBUMS);
        let singles: Option<Vec<Track>> = storage::load_json(store, keys::SINGLES);

        match (albums, singles) {
            (Some(albums), Some(singles)) => {
                tracing::debug!(
                    albums = albums.len(),
                    singles = singles.len(),
                    "Loaded catalog from store"
                );
                Self { albums, singles }
            }
            _ => Self::default_catalog(),
        }
    }

    /// Persist both lists
    pub fn save(&self, store: &dyn KeyValueStore) {
        storage::save_json(store, keys::ALBUMS, &self.albums);
        storage::save_json(store, keys::SINGLES, &self.singles);
    }

    /// Append new singles (admin import) and persist the catalog
    pub fn add_singles(&mut self, store: &dyn KeyValueStore, tracks: Vec<Track>) -> usize {
        let added = tracks.len();
        self.singles.extend(tracks);
        self.save(store);
        tracing::info!(added, "Tracks added to Singles");
        added
    }

    /// Every track: singles first, then album tracks in album order
    pub fn all_tracks(&self) -> Vec<Track> {
        self.singles
            .iter()
            .chain(self.albums.iter().flat_map(|a| a.tracks.iter()))
            .cloned()
            .collect()
    }

    pub fn find_track(&self, id: &TrackId) -> Option<Track> {
        self.singles
            .iter()
            .chain(self.albums.iter().flat_map(|a| a.tracks.iter()))
            .find(|t| &t.id == id)
            .cloned()
    }

    /// Find an album by name, ignoring case
    pub fn find_album(&self, name: &str) -> Option<&Album> {
        self.albums
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// Case-insensitive substring search over tracks and albums
    ///
    /// A blank query yields no results.
    pub fn search(&self, query: &str) -> SearchResults {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return SearchResults::default();
        }

        let tracks = self
            .all_tracks()
            .into_iter()
            .filter(|t| t.matches(&query))
            .collect();

        let albums = self
            .albums
            .iter()
            .filter(|a| {
                a.name.to_lowercase().contains(&query) || a.artist.to_lowercase().contains(&query)
            })
            .cloned()
            .collect();

        SearchResults { albums, tracks }
    }

    /// Whether a search query is the admin entry command
    pub fn is_admin_command(query: &str) -> bool {
        query.trim().eq_ignore_ascii_case(ADMIN_SEARCH_COMMAND)
    }

    /// The built-in catalog
    pub fn default_catalog() -> Self {
        let concrete_art = "https://picsum.photos/seed/xlb001/500/500";
        let vaporwave_art = "https://picsum.photos/seed/xlb004/500/500";

        let youtube = || Source::new(SourcePlatform::YouTube, DEMO_VIDEO_URL, true);
        let linked = |platform| Source::new(platform, "#", false);

        let concrete = vec![
            catalog_track(
                "xlb001",
                "Flint Town Hustle",
                "XL Beats",
                "Concrete Dreams",
                concrete_art,
                185,
                vec![youtube(), linked(SourcePlatform::Spotify)],
            ),
            catalog_track(
                "xlb002",
                "810 Freeway",
                "XL Beats ft. Rudeboi Slymm",
                "Concrete Dreams",
                concrete_art,
                210,
                vec![
                    youtube(),
                    linked(SourcePlatform::Spotify),
                    linked(SourcePlatform::AppleMusic),
                ],
            ),
            catalog_track(
                "xlb003",
                "Chevy in the Hole",
                "XL Beats",
                "Concrete Dreams",
                concrete_art,
                192,
                vec![linked(SourcePlatform::Spotify)],
            ),
        ];

        let vaporwave = vec![
            catalog_track(
                "xlb004",
                "Platinum Bronco",
                "XL Beats",
                "Vaporwave Nights",
                vaporwave_art,
                220,
                vec![youtube()],
            ),
            catalog_track(
                "xlb005",
                "Slay Ride",
                "XL Beats",
                "Vaporwave Nights",
                vaporwave_art,
                205,
                vec![youtube(), linked(SourcePlatform::BeatStars)],
            ),
        ];

        let albums = vec![
            Album {
                id: "album01".to_string(),
                name: "Concrete Dreams".to_string(),
                artist: "XL Beats".to_string(),
                year: 2023,
                album_art_url: concrete_art.to_string(),
                tracks: concrete,
            },
            Album {
                id: "album02".to_string(),
                name: "Vaporwave Nights".to_string(),
                artist: "XL Beats".to_string(),
                year: 2021,
                album_art_url: vaporwave_art.to_string(),
                tracks: vaporwave,
            },
        ];

        let singles = vec![catalog_track(
            "xls01",
            "Summer in the City",
            "XL Beats",
            "Single",
            "https://picsum.photos/seed/xls01/500/500",
            180,
            vec![youtube(), linked(SourcePlatform::Spotify)],
        )];

        Self { albums, singles }
    }
}

fn catalog_track(
    id: &str,
    title: &str,
    artist: &str,
    album: &str,
    art: &str,
    duration: u32,
    sources: Vec<Source>,
) -> Track {
    Track {
        id: TrackId::new(id),
        title: title.to_string(),
        artist: artist.to_string(),
        album: album.to_string(),
        album_art_url: art.to_string(),
        duration,
        sources,
    }
}
