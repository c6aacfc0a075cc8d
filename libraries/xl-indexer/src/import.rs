//! Turning indexed records into catalog singles.

use crate::types::{IndexedTrack, ERROR_FETCHING};
use url::form_urlencoded;
use xl_core::{Source, SourcePlatform, Track, TrackId};

/// Artist credited on imported singles
pub const IMPORT_ARTIST: &str = "XL Beats";

/// Album name for imported singles
pub const IMPORT_ALBUM: &str = "Single";

/// Duration assigned to imported singles, in seconds
pub const IMPORT_DURATION_SECS: u32 = 180;

/// Build new singles from indexer output
///
/// YouTube links are embeddable; Spotify and Apple Music are external.
/// Empty URLs and the failure placeholder are dropped, so a record can
/// yield a track with no sources at all.
pub fn tracks_from_indexed(records: &[IndexedTrack]) -> Vec<Track> {
    records.iter().map(track_from_indexed).collect()
}

fn track_from_indexed(record: &IndexedTrack) -> Track {
    let candidates = [
        (SourcePlatform::YouTube, &record.youtube_url, true),
        (SourcePlatform::Spotify, &record.spotify_url, false),
        (SourcePlatform::AppleMusic, &record.apple_music_url, false),
    ];

    let sources = candidates
        .into_iter()
        .filter_map(|(platform, url, embeddable)| {
            let url = url.as_deref().map(str::trim)?;
            is_usable_url(url).then(|| Source::new(platform, url, embeddable))
        })
        .collect();

    Track {
        id: TrackId::generate(),
        title: record.track_title.clone(),
        artist: IMPORT_ARTIST.to_string(),
        album: IMPORT_ALBUM.to_string(),
        album_art_url: placeholder_art(&record.track_title),
        duration: IMPORT_DURATION_SECS,
        sources,
    }
}

/// Whether an indexed URL can become a source
pub fn is_usable_url(url: &str) -> bool {
    !url.is_empty() && url != ERROR_FETCHING
}

fn placeholder_art(title: &str) -> String {
    let seed: String = form_urlencoded::byte_serialize(title.as_bytes()).collect();
    format!("https://picsum.photos/seed/{seed}/500/500")
}
