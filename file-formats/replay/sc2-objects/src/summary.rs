//! Post-game player summaries from the score screen.

use crate::graph::Graph;
use crate::types::Race;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// Readable names for score screen stat keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatNames {
    names: HashMap<String, String>,
}

impl StatNames {
    /// Create an empty lookup
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a readable name
    pub fn insert(&mut self, key: impl Into<String>, name: impl Into<String>) {
        self.names.insert(key.into(), name.into());
    }

    /// Readable name for a key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.names.get(key).map(String::as_str)
    }

    /// Names for the standard score screen stats
    pub fn builtin() -> Self {
        let mut names = Self::new();
        for (key, name) in [
            ("R", "Resources"),
            ("U", "Units"),
            ("S", "Structures"),
            ("O", "Overview"),
            ("AUR", "Average Unspent Resources"),
            ("RCR", "Resource Collection Rate"),
            ("WC", "Workers Created"),
            ("UT", "Units Trained"),
            ("KUC", "Killed Unit Count"),
            ("SB", "Structures Built"),
            ("SRC", "Structures Razed Count"),
            ("APM", "Actions Per Minute"),
        ] {
            names.insert(key, name);
        }
        names
    }
}

/// Post-game statistics for one player
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSummary {
    /// Index of the player in the game
    pub pid: u8,
    /// Index of the player's team
    pub teamid: u8,
    /// Race played in the game
    pub play_race: Option<Race>,
    /// Race picked in the lobby
    pub pick_race: Option<Race>,
    /// Whether the player is a computer
    pub is_ai: bool,
    /// Whether the player won
    pub is_winner: bool,
    /// Battle.net id of the player
    pub bnetid: u32,
    /// Subregion of the player
    pub subregion: u32,
    /// Gateway, such as `us` or `eu`
    pub gateway: String,
    /// Region, such as `na`, `la`, `eu` or `ru`
    pub region: String,
    /// Unidentified field
    pub unknown1: u32,
    /// Unidentified fields keyed by their raw position
    pub unknown2: BTreeMap<u32, u32>,
    /// Army value over time in seconds
    pub army_graph: Option<Graph>,
    /// Income over time in seconds
    pub income_graph: Option<Graph>,
    /// Score screen stats keyed by stat code
    pub stats: BTreeMap<String, u32>,
}

impl PlayerSummary {
    /// Create an empty summary for a player
    pub fn new(pid: u8) -> Self {
        Self {
            pid,
            ..Self::default()
        }
    }

    /// Store one stat value
    pub fn set_stat(&mut self, key: impl Into<String>, value: u32) {
        self.stats.insert(key.into(), value);
    }

    /// Look up one stat value
    pub fn stat(&self, key: &str) -> Option<u32> {
        self.stats.get(key).copied()
    }

    /// Stats as `name: value` lines, in key order
    ///
    /// Keys missing from `names` are printed as-is.
    pub fn get_stats(&self, names: &StatNames) -> String {
        self.stats
            .iter()
            .map(|(key, value)| {
                let name = names.get(key).unwrap_or(key.as_str());
                format!("{}: {}", name, value)
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl fmt::Display for PlayerSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let race = self
            .play_race
            .map_or_else(|| "Unknown".to_string(), |race| race.to_string());
        if self.is_ai {
            write!(f, "{} - {} - AI", self.teamid, race)
        } else {
            write!(
                f,
                "{} - {} - {}/{}/",
                self.teamid, race, self.subregion, self.bnetid
            )
        }
    }
}
