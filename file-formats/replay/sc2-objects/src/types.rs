//! Plain value records shared by the replay objects.

use std::fmt;
use std::str::FromStr;

/// A position on the map grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    /// Horizontal coordinate
    pub x: i32,
    /// Vertical coordinate
    pub y: i32,
}

impl Location {
    /// Create a new location
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Identity of the map a game was played on
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapData {
    /// Gateway hosting the map, such as `us` or `eu`
    pub gateway: String,
    /// Hex encoded content hash of the map file
    pub map_hash: String,
}

/// A player color as stored in the replay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColorData {
    /// Alpha channel
    pub a: u8,
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl ColorData {
    /// Create a new color from its channels
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// The color as an `RRGGBB` hex string
    pub fn hex(&self) -> String {
        hex::encode_upper([self.r, self.g, self.b])
    }
}

/// Battle.net account reference of a player
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BnetData {
    /// Gateway, such as `us` or `eu`
    pub gateway: String,
    /// Unidentified field
    pub unknown2: u32,
    /// Subregion within the gateway
    pub subregion: u32,
    /// Account id within the subregion
    pub uid: u32,
}

/// One step of a build order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildEntry {
    /// Supply in use when the order was issued
    pub supply: u32,
    /// Supply cap when the order was issued
    pub total_supply: u32,
    /// Game time in seconds
    pub time: u32,
    /// Name of the unit, structure or upgrade
    pub order: String,
    /// Position of the step in the build order
    pub build_index: u32,
}

/// Outcome of a game for a team or player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameResult {
    /// The team won
    Win,
    /// The team lost
    Loss,
    /// No result was recorded
    #[default]
    Unknown,
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Win => "Win",
            Self::Loss => "Loss",
            Self::Unknown => "Unknown",
        };
        f.write_str(name)
    }
}

/// A playable race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Race {
    /// Protoss
    Protoss,
    /// Terran
    Terran,
    /// Zerg
    Zerg,
    /// Random pick, only valid as a lobby choice
    Random,
}

impl Race {
    /// Single letter used in team lineups
    pub fn letter(self) -> char {
        match self {
            Self::Protoss => 'P',
            Self::Terran => 'T',
            Self::Zerg => 'Z',
            Self::Random => 'R',
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Protoss => "Protoss",
            Self::Terran => "Terran",
            Self::Zerg => "Zerg",
            Self::Random => "Random",
        };
        f.write_str(name)
    }
}

impl FromStr for Race {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "protoss" | "prot" | "p" => Ok(Self::Protoss),
            "terran" | "terr" | "t" => Ok(Self::Terran),
            "zerg" | "z" => Ok(Self::Zerg),
            "random" | "rand" | "r" => Ok(Self::Random),
            _ => Err(format!("Unknown race: {}", s)),
        }
    }
}

/// Computer opponent difficulty. Human players are always `Medium`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Very easy
    VeryEasy,
    /// Easy
    Easy,
    /// Medium
    #[default]
    Medium,
    /// Hard
    Hard,
    /// Very hard
    VeryHard,
    /// Insane
    Insane,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::VeryEasy => "Very easy",
            Self::Easy => "Easy",
            Self::Medium => "Medium",
            Self::Hard => "Hard",
            Self::VeryHard => "Very hard",
            Self::Insane => "Insane",
        };
        f.write_str(name)
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "very easy" | "vyey" => Ok(Self::VeryEasy),
            "easy" => Ok(Self::Easy),
            "medium" | "medi" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "very hard" | "vyhd" => Ok(Self::VeryHard),
            "insane" | "insa" => Ok(Self::Insane),
            _ => Err(format!("Unknown difficulty: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_race_parsing() {
        assert_eq!("Protoss".parse::<Race>().unwrap(), Race::Protoss);
        assert_eq!("z".parse::<Race>().unwrap(), Race::Zerg);
        assert_eq!("RAND".parse::<Race>().unwrap(), Race::Random);
        assert!("Xel'Naga".parse::<Race>().is_err());
    }

    #[test]
    fn test_difficulty_round_trip_names() {
        for difficulty in [
            Difficulty::VeryEasy,
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::VeryHard,
            Difficulty::Insane,
        ] {
            let parsed: Difficulty = difficulty.to_string().parse().unwrap();
            assert_eq!(parsed, difficulty);
        }
    }

    #[test]
    fn test_game_result_display() {
        assert_eq!(GameResult::default().to_string(), "Unknown");
        assert_eq!(GameResult::Win.to_string(), "Win");
    }

    #[test]
    fn test_color_hex() {
        let color = ColorData::new(255, 180, 20, 30);
        assert_eq!(color.hex(), "B4141E");
    }
}
