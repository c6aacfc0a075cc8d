//! Theme selection from the playing track

use xl_core::{AppTheme, Track};

const VAPORWAVE_ALBUM: &str = "Vaporwave Nights";
const RUDEBOI_ARTIST: &str = "Rudeboi Slymm";

/// Theme for the current track; the default theme when nothing is playing
///
/// Album match takes precedence over artist match.
pub fn select_theme(track: Option<&Track>) -> AppTheme {
    match track {
        Some(t) if t.album == VAPORWAVE_ALBUM => AppTheme::PlatinumBroncoSlay,
        Some(t) if t.artist.contains(RUDEBOI_ARTIST) => AppTheme::RudeboiSlymm,
        _ => AppTheme::XlBeats,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use xl_core::TrackId;

    fn track(artist: &str, album: &str) -> Track {
        Track {
            id: TrackId::new("t"),
            title: "T".to_string(),
            artist: artist.to_string(),
            album: album.to_string(),
            album_art_url: String::new(),
            duration: 100,
            sources: Vec::new(),
        }
    }

    #[test]
    fn no_track_is_default() {
        assert_eq!(select_theme(None), AppTheme::XlBeats);
    }

    #[test]
    fn vaporwave_album_wins_over_artist() {
        let t = track("XL Beats ft. Rudeboi Slymm", "Vaporwave Nights");
        assert_eq!(select_theme(Some(&t)), AppTheme::PlatinumBroncoSlay);
    }

    #[test]
    fn featured_artist_selects_theme() {
        let t = track("XL Beats ft. Rudeboi Slymm", "Concrete Dreams");
        assert_eq!(select_theme(Some(&t)), AppTheme::RudeboiSlymm);
    }

    #[test]
    fn everything_else_is_default() {
        let t = track("XL Beats", "Concrete Dreams");
        assert_eq!(select_theme(Some(&t)), AppTheme::XlBeats);
    }
}
