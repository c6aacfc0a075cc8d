/// Achievement badge types
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an achievement badge
///
/// Persisted as the kebab-case string (e.g. `"flint-ambassador"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeId {
    /// Favorite five different songs
    Collector,
    /// Play eight unique tracks
    FlintAmbassador,
    /// Listen to an entire album
    AlbumCompleter,
    /// Complete "Vaporwave Nights"
    RetroFuturist,
    /// Complete "Concrete Dreams"
    DayOne,
}

impl BadgeId {
    pub const ALL: [BadgeId; 5] = [
        BadgeId::Collector,
        BadgeId::FlintAmbassador,
        BadgeId::AlbumCompleter,
        BadgeId::RetroFuturist,
        BadgeId::DayOne,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BadgeId::Collector => "collector",
            BadgeId::FlintAmbassador => "flint-ambassador",
            BadgeId::AlbumCompleter => "album-completer",
            BadgeId::RetroFuturist => "retro-futurist",
            BadgeId::DayOne => "day-one",
        }
    }
}

impl fmt::Display for BadgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BadgeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BadgeId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| format!("unknown badge id: {s}"))
    }
}

/// Achievement badge with display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Badge {
    pub id: BadgeId,
    pub name: String,
    pub description: String,
    pub criteria: String,

    /// Only ever transitions false -> true
    pub earned: bool,
}

impl Badge {
    fn unearned(id: BadgeId, name: &str, description: &str, criteria: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            description: description.to_string(),
            criteria: criteria.to_string(),
            earned: false,
        }
    }

    /// The full badge catalogue, all unearned
    pub fn catalogue() -> Vec<Badge> {
        vec![
            Badge::unearned(
                BadgeId::Collector,
                "Collector",
                "You've got good taste. Keep curating your favorites list.",
                "Upvote 5 different songs.",
            ),
            Badge::unearned(
                BadgeId::FlintAmbassador,
                "Flint Ambassador",
                "You're exploring the catalog and repping the 810.",
                "Play 8 unique tracks.",
            ),
            Badge::unearned(
                BadgeId::AlbumCompleter,
                "Album Completer",
                "Full spin, no skips. A true listener.",
                "Listen to an entire album from start to finish.",
            ),
            Badge::unearned(
                BadgeId::RetroFuturist,
                "Retro Futurist",
                "Vibing with the retro wave.",
                "Play all tracks from the 'Vaporwave Nights' album.",
            ),
            Badge::unearned(
                BadgeId::DayOne,
                "Day One",
                "Down since the Concrete Dreams.",
                "Play all tracks from the 'Concrete Dreams' album.",
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalogue_covers_every_id_unearned() {
        let badges = Badge::catalogue();
        assert_eq!(badges.len(), BadgeId::ALL.len());
        for id in BadgeId::ALL {
            assert!(badges.iter().any(|b| b.id == id && !b.earned));
        }
    }

    #[test]
    fn ids_round_trip_through_strings() {
        for id in BadgeId::ALL {
            assert_eq!(id.as_str().parse::<BadgeId>().unwrap(), id);
            assert_eq!(serde_json::to_string(&id).unwrap(), format!("\"{}\"", id.as_str()));
        }
        assert!("platinum".parse::<BadgeId>().is_err());
    }
}
