/// Display theme tags
use serde::{Deserialize, Serialize};

/// Display theme
///
/// Only `XlBeats`, `PlatinumBroncoSlay` and `RudeboiSlymm` are chosen
/// automatically from the playing track; the rest are manual picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppTheme {
    #[default]
    XlBeats,
    PlatinumBroncoSlay,
    SwinnOrLose,
    BobbyOchoa,
    RudeboiSlymm,
    TheCircleBoyz,
}

impl AppTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppTheme::XlBeats => "xl-beats",
            AppTheme::PlatinumBroncoSlay => "platinum-bronco-slay",
            AppTheme::SwinnOrLose => "swinn-or-lose",
            AppTheme::BobbyOchoa => "bobby-ochoa",
            AppTheme::RudeboiSlymm => "rudeboi-slymm",
            AppTheme::TheCircleBoyz => "the-circle-boyz",
        }
    }
}
