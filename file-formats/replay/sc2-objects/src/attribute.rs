//! Decoded lobby attributes.

use crate::lobby::AttributeRegistry;
use crate::{Error, Result};
use std::fmt;

/// One lobby setting decoded from the replay's attribute block
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attribute {
    /// Header value of the attribute block this record came from
    pub header: u32,
    /// Attribute id
    pub id: u32,
    /// Player slot the setting applies to, `None` for lobby-wide settings
    pub player: Option<u8>,
    /// Display name from the registry
    pub name: String,
    /// Decoded value from the registry
    pub value: String,
}

impl Attribute {
    /// Decode a raw attribute record
    ///
    /// The raw value is a fixed-width field holding a reversed code, so
    /// `b"torP"` decodes through the lookup key `Prot`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sc2_objects::{Attribute, AttributeRegistry};
    /// use sc2_objects::lobby::ids;
    ///
    /// let registry = AttributeRegistry::builtin();
    /// let speed = Attribute::decode(&registry, 999, ids::GAME_SPEED, None, b"rsaF").unwrap();
    /// assert_eq!(speed.name, "Game Speed");
    /// assert_eq!(speed.value, "Faster");
    /// ```
    pub fn decode(
        registry: &AttributeRegistry,
        header: u32,
        id: u32,
        player: Option<u8>,
        raw: &[u8],
    ) -> Result<Self> {
        let property = registry.get(id).ok_or_else(|| {
            log::warn!("Attribute id {:#06X} is not in the registry", id);
            Error::UnknownAttributeId(id)
        })?;

        let key = lookup_key(raw);
        let value = property
            .lookup(&key)
            .ok_or_else(|| {
                let key = String::from_utf8_lossy(&key).into_owned();
                log::warn!("Value {:?} is not registered for attribute {:#06X}", key, id);
                Error::UnknownAttributeValue { id, key }
            })?;

        log::trace!(
            "Decoded attribute {:#06X} for {:?}: {} = {}",
            id,
            player,
            property.name,
            value
        );

        Ok(Self {
            header,
            id,
            player,
            name: property.name.clone(),
            value: value.to_string(),
        })
    }
}

/// Build the registry lookup key for a raw attribute value
///
/// Null and space padding is removed and the remaining bytes are
/// reversed.
pub fn lookup_key(raw: &[u8]) -> Vec<u8> {
    let is_padding = |b: &u8| *b == 0 || *b == b' ';
    let start = raw.iter().position(|b| !is_padding(b)).unwrap_or(raw.len());
    let end = raw
        .iter()
        .rposition(|b| !is_padding(b))
        .map_or(start, |pos| pos + 1);

    raw[start..end].iter().rev().copied().collect()
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.player {
            Some(player) => write!(f, "[{}] {}: {}", player, self.name, self.value),
            None => write!(f, "[all] {}: {}", self.name, self.value),
        }
    }
}

impl AttributeRegistry {
    /// Decode a raw attribute record against this registry
    pub fn decode(&self, header: u32, id: u32, player: Option<u8>, raw: &[u8]) -> Result<Attribute> {
        Attribute::decode(self, header, id, player, raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lobby::{LobbyProperty, ids};
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test_case(b"nmuH", b"Humn" ; "full width")]
    #[test_case(b"05\0\0", b"50" ; "trailing nulls")]
    #[test_case(b"001 ", b"100" ; "trailing space")]
    #[test_case(b"\0AFF", b"FFA" ; "leading null")]
    #[test_case(b"\0\0\0\0", b"" ; "all padding")]
    fn test_lookup_key(raw: &[u8; 4], expected: &[u8]) {
        assert_eq!(lookup_key(raw), expected);
    }

    #[test]
    fn test_decode_race() {
        let registry = AttributeRegistry::builtin();
        let attribute = Attribute::decode(&registry, 999, ids::RACE, Some(2), b"torP").unwrap();

        assert_eq!(attribute.header, 999);
        assert_eq!(attribute.id, ids::RACE);
        assert_eq!(attribute.player, Some(2));
        assert_eq!(attribute.name, "Race");
        assert_eq!(attribute.value, "Protoss");
        assert_eq!(attribute.to_string(), "[2] Race: Protoss");
    }

    #[test]
    fn test_decode_lobby_wide() {
        let registry = AttributeRegistry::builtin();
        let attribute = registry.decode(999, ids::CATEGORY, None, b"\0\0\0\0").unwrap();
        assert_eq!(attribute.value, "Single");
        assert_eq!(attribute.to_string(), "[all] Category: Single");
    }

    #[test]
    fn test_unknown_id() {
        let registry = AttributeRegistry::builtin();
        let result = Attribute::decode(&registry, 999, 0xFFFF, None, b"torP");
        assert!(matches!(result, Err(Error::UnknownAttributeId(0xFFFF))));
    }

    #[test]
    fn test_unknown_value() {
        let _ = env_logger::builder().is_test(true).try_init();
        let registry = AttributeRegistry::builtin();
        let result = Attribute::decode(&registry, 999, ids::RACE, Some(1), b"graW");
        match result {
            Err(Error::UnknownAttributeValue { id, key }) => {
                assert_eq!(id, ids::RACE);
                assert_eq!(key, "Warg");
            }
            other => panic!("Expected UnknownAttributeValue, got {:?}", other),
        }
    }

    #[test]
    fn test_unreversed_value_is_rejected() {
        let registry = AttributeRegistry::builtin();
        assert!(Attribute::decode(&registry, 999, ids::RACE, Some(1), b"Prot").is_err());
    }

    #[test]
    fn test_custom_registry_is_used() {
        let mut registry = AttributeRegistry::new();
        registry.insert(7, LobbyProperty::new("Mode").with_value("ABC", "Alpha"));

        let attribute = Attribute::decode(&registry, 1, 7, None, b"CBA\0").unwrap();
        assert_eq!(attribute.value, "Alpha");

        assert!(Attribute::decode(&registry, 1, ids::RACE, None, b"torP").is_err());
    }
}
