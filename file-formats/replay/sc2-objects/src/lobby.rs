//! Lobby attribute registry.
//!
//! Every lobby attribute id maps to a display name and a table from
//! four-character codes (`Prot`, `Fasr`, `tc01`, ...) to readable values.

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Well-known lobby attribute ids
pub mod ids {
    /// Human, computer, open or closed slot
    pub const PLAYER_TYPE: u32 = 0x01F4;
    /// 1v1, 2v2, ..., FFA or custom
    pub const GAME_TYPE: u32 = 0x07D1;
    /// Team slot for 1v1 games
    pub const TEAMS_1V1: u32 = 0x07D2;
    /// Team slot for 2v2 games
    pub const TEAMS_2V2: u32 = 0x07D3;
    /// Team slot for 3v3 games
    pub const TEAMS_3V3: u32 = 0x07D4;
    /// Team slot for 4v4 games
    pub const TEAMS_4V4: u32 = 0x07D5;
    /// Team slot for free-for-all games
    pub const TEAMS_FFA: u32 = 0x07D6;
    /// Game speed
    pub const GAME_SPEED: u32 = 0x0BB8;
    /// Lobby race pick
    pub const RACE: u32 = 0x0BB9;
    /// Player color
    pub const COLOR: u32 = 0x0BBA;
    /// Handicap percentage
    pub const HANDICAP: u32 = 0x0BBB;
    /// Computer difficulty
    pub const DIFFICULTY: u32 = 0x0BBC;
    /// Private, public, ladder or single player
    pub const CATEGORY: u32 = 0x0BC1;
}

/// Display name and value table of one lobby attribute id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LobbyProperty {
    /// Human readable attribute name
    pub name: String,
    values: HashMap<Vec<u8>, String>,
}

impl LobbyProperty {
    /// Create a property with an empty value table
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Builder-style variant of [`LobbyProperty::insert`]
    pub fn with_value(mut self, code: impl AsRef<[u8]>, value: impl Into<String>) -> Self {
        self.insert(code, value);
        self
    }

    /// Map a lookup code to a decoded value
    pub fn insert(&mut self, code: impl AsRef<[u8]>, value: impl Into<String>) {
        self.values.insert(code.as_ref().to_vec(), value.into());
    }

    /// Decoded value for a lookup code
    pub fn lookup(&self, code: &[u8]) -> Option<&str> {
        self.values.get(code).map(String::as_str)
    }

    /// Number of known values
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the value table is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over `(code, value)` pairs in no particular order
    pub fn values(&self) -> impl Iterator<Item = (&[u8], &str)> {
        self.values
            .iter()
            .map(|(code, value)| (code.as_slice(), value.as_str()))
    }
}

/// Read-only table of lobby attribute definitions
///
/// The registry is passed to [`crate::Attribute::decode`] explicitly so
/// that decoding can be tested against hand-built tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeRegistry {
    properties: BTreeMap<u32, LobbyProperty>,
}

impl AttributeRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a property definition
    pub fn insert(&mut self, id: u32, property: LobbyProperty) -> Option<LobbyProperty> {
        self.properties.insert(id, property)
    }

    /// Look up a property definition
    pub fn get(&self, id: u32) -> Option<&LobbyProperty> {
        self.properties.get(&id)
    }

    /// Whether the id is known
    pub fn contains(&self, id: u32) -> bool {
        self.properties.contains_key(&id)
    }

    /// Number of known attribute ids
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the registry has no entries
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Known ids in ascending order
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.properties.keys().copied()
    }

    /// Iterate over `(id, property)` pairs in ascending id order
    pub fn iter(&self) -> impl Iterator<Item = (u32, &LobbyProperty)> {
        self.properties.iter().map(|(id, property)| (*id, property))
    }

    /// Process-wide copy of [`AttributeRegistry::builtin`], built on first use
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<AttributeRegistry> = OnceLock::new();
        SHARED.get_or_init(Self::builtin)
    }

    /// The standard StarCraft II lobby attribute table
    pub fn builtin() -> Self {
        let mut registry = Self::new();

        registry.insert(
            ids::PLAYER_TYPE,
            LobbyProperty::new("Player Type")
                .with_value("Humn", "Human")
                .with_value("Comp", "Computer")
                .with_value("Open", "Open")
                .with_value("Clsd", "Closed"),
        );

        registry.insert(
            ids::GAME_TYPE,
            LobbyProperty::new("Game Type")
                .with_value("1v1", "1v1")
                .with_value("2v2", "2v2")
                .with_value("3v3", "3v3")
                .with_value("4v4", "4v4")
                .with_value("FFA", "FFA")
                .with_value("Cust", "Custom"),
        );

        for (id, name, slots) in [
            (ids::TEAMS_1V1, "Teams1v1", 2),
            (ids::TEAMS_2V2, "Teams2v2", 2),
            (ids::TEAMS_3V3, "Teams3v3", 2),
            (ids::TEAMS_4V4, "Teams4v4", 2),
            (ids::TEAMS_FFA, "TeamsFFA", 8),
        ] {
            let mut property = LobbyProperty::new(name);
            for slot in 1..=slots {
                property.insert(format!("T{}", slot), format!("Team {}", slot));
            }
            registry.insert(id, property);
        }

        registry.insert(
            ids::GAME_SPEED,
            LobbyProperty::new("Game Speed")
                .with_value("Slor", "Slower")
                .with_value("Slow", "Slow")
                .with_value("Norm", "Normal")
                .with_value("Fast", "Fast")
                .with_value("Fasr", "Faster"),
        );

        registry.insert(
            ids::RACE,
            LobbyProperty::new("Race")
                .with_value("Prot", "Protoss")
                .with_value("Terr", "Terran")
                .with_value("Zerg", "Zerg")
                .with_value("RAND", "Random"),
        );

        let colors = [
            "Red",
            "Blue",
            "Teal",
            "Purple",
            "Yellow",
            "Orange",
            "Green",
            "Light Pink",
            "Violet",
            "Light Grey",
            "Dark Green",
            "Brown",
            "Light Green",
            "Dark Grey",
            "Pink",
        ];
        let mut color = LobbyProperty::new("Color");
        for (index, name) in colors.iter().enumerate() {
            color.insert(format!("tc{:02}", index + 1), *name);
        }
        registry.insert(ids::COLOR, color);

        let mut handicap = LobbyProperty::new("Handicap");
        for percent in (50..=100).step_by(10) {
            handicap.insert(percent.to_string(), percent.to_string());
        }
        registry.insert(ids::HANDICAP, handicap);

        registry.insert(
            ids::DIFFICULTY,
            LobbyProperty::new("Difficulty")
                .with_value("VyEy", "Very easy")
                .with_value("Easy", "Easy")
                .with_value("Medi", "Medium")
                .with_value("Hard", "Hard")
                .with_value("VyHd", "Very hard")
                .with_value("Insa", "Insane"),
        );

        registry.insert(
            ids::CATEGORY,
            LobbyProperty::new("Category")
                .with_value("Priv", "Private")
                .with_value("Pub", "Public")
                .with_value("Amm", "Ladder")
                .with_value("", "Single"),
        );

        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_contents() {
        let registry = AttributeRegistry::builtin();
        assert_eq!(registry.len(), 13);

        let race = registry.get(ids::RACE).unwrap();
        assert_eq!(race.name, "Race");
        assert_eq!(race.lookup(b"Prot"), Some("Protoss"));
        assert_eq!(race.lookup(b"torP"), None);

        let color = registry.get(ids::COLOR).unwrap();
        assert_eq!(color.len(), 15);
        assert_eq!(color.lookup(b"tc15"), Some("Pink"));

        let ffa = registry.get(ids::TEAMS_FFA).unwrap();
        assert_eq!(ffa.lookup(b"T8"), Some("Team 8"));
    }

    #[test]
    fn test_ids_are_sorted() {
        let registry = AttributeRegistry::builtin();
        let ids: Vec<u32> = registry.ids().collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        assert_eq!(ids, sorted);
        assert_eq!(ids.first(), Some(&ids::PLAYER_TYPE));
    }

    #[test]
    fn test_shared_matches_builtin() {
        assert_eq!(AttributeRegistry::shared(), &AttributeRegistry::builtin());
    }

    #[test]
    fn test_custom_registry() {
        let mut registry = AttributeRegistry::new();
        assert!(registry.is_empty());

        registry.insert(42, LobbyProperty::new("Test").with_value("abc", "ABC"));
        assert!(registry.contains(42));
        assert!(!registry.contains(43));

        let replaced = registry.insert(42, LobbyProperty::new("Other"));
        assert_eq!(replaced.map(|p| p.name), Some("Test".to_string()));
    }
}
