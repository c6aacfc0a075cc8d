//! Terminal rendering of catalog items and playback events

use xl_core::{Badge, Catalog, Track};
use xl_playback::PlaybackEvent;

/// `m:ss`
pub fn format_duration(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

pub fn track_line(track: &Track, favorited: bool) -> String {
    let platforms: Vec<&str> = track.sources.iter().map(|s| s.platform.as_str()).collect();
    format!(
        "{} {:<10} {} - {} [{}] ({})",
        if favorited { "♥" } else { " " },
        track.id.as_str(),
        track.title,
        track.artist,
        format_duration(track.duration),
        platforms.join(", ")
    )
}

pub fn badge_line(badge: &Badge) -> String {
    format!(
        "[{}] {} - {} ({})",
        if badge.earned { "x" } else { " " },
        badge.name,
        badge.description,
        badge.criteria
    )
}

/// One line per event worth showing; progress ticks are skipped
pub fn describe_event(event: &PlaybackEvent, catalog: &Catalog) -> Option<String> {
    let line = match event {
        PlaybackEvent::StateChanged { is_playing } => {
            if *is_playing { "Playing" } else { "Paused" }.to_string()
        }
        PlaybackEvent::TrackChanged { track_id, .. } => match catalog.find_track(track_id) {
            Some(track) => format!("Now playing: {} - {}", track.title, track.artist),
            None => format!("Now playing: {track_id}"),
        },
        PlaybackEvent::ProgressChanged { .. } => return None,
        PlaybackEvent::QueueChanged { length } => format!("Queue: {length} tracks"),
        PlaybackEvent::ShuffleChanged { enabled } => {
            format!("Shuffle {}", if *enabled { "on" } else { "off" })
        }
        PlaybackEvent::RepeatChanged { mode } => format!("Repeat {mode}"),
        PlaybackEvent::SourceChanged { platform } => match platform {
            Some(platform) => format!("Source: {}", platform.as_str()),
            None => "No playable source".to_string(),
        },
        PlaybackEvent::ThemeChanged { theme } => format!("Theme: {}", theme.as_str()),
        PlaybackEvent::VolumeChanged { level, is_muted } => {
            format!("Volume {:.0}%{}", level * 100.0, if *is_muted { " (muted)" } else { "" })
        }
        PlaybackEvent::BadgeUnlocked { name, .. } => format!("Badge unlocked: {name}"),
    };
    Some(line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use xl_core::TrackId;

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_duration(185), "3:05");
        assert_eq!(format_duration(59), "0:59");
    }

    #[test]
    fn describes_track_change_with_catalog_title() {
        let catalog = Catalog::default_catalog();
        let event = PlaybackEvent::TrackChanged {
            track_id: TrackId::new("xlb002"),
            previous_track_id: None,
        };
        assert_eq!(
            describe_event(&event, &catalog).unwrap(),
            "Now playing: 810 Freeway - XL Beats ft. Rudeboi Slymm"
        );
    }

    #[test]
    fn skips_progress_events() {
        let event = PlaybackEvent::ProgressChanged {
            position_secs: 1,
            duration_secs: 10,
        };
        assert!(describe_event(&event, &Catalog::default_catalog()).is_none());
    }

    #[test]
    fn track_line_lists_platforms() {
        let catalog = Catalog::default_catalog();
        let track = catalog.find_track(&TrackId::new("xlb001")).unwrap();
        let line = track_line(&track, true);
        assert!(line.starts_with("♥"));
        assert!(line.contains("Flint Town Hustle"));
        assert!(line.ends_with("(YouTube, Spotify)"));
    }
}
