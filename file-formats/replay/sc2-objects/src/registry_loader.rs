//! Lobby registry loading from YAML.
//!
//! ```yaml
//! - id: 3001
//!   name: Race
//!   values:
//!     Prot: Protoss
//!     Terr: Terran
//! ```

use crate::lobby::{AttributeRegistry, LobbyProperty};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Property definition as stored in a registry file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PropertyDefinition {
    /// Attribute id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Lookup codes mapped to decoded values
    #[serde(default)]
    pub values: BTreeMap<String, String>,
}

impl From<&PropertyDefinition> for LobbyProperty {
    fn from(definition: &PropertyDefinition) -> Self {
        let mut property = LobbyProperty::new(definition.name.clone());
        for (code, value) in &definition.values {
            property.insert(code, value.clone());
        }
        property
    }
}

impl AttributeRegistry {
    /// Load a registry from a YAML file
    pub fn from_yaml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("Loading lobby registry from {}", path.display());

        let reader = BufReader::new(File::open(path)?);
        let definitions: Vec<PropertyDefinition> =
            serde_yaml_ng::from_reader(reader).map_err(|e| Error::Registry(e.to_string()))?;
        Ok(Self::from_definitions(&definitions))
    }

    /// Load a registry from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let definitions: Vec<PropertyDefinition> =
            serde_yaml_ng::from_str(yaml).map_err(|e| Error::Registry(e.to_string()))?;
        Ok(Self::from_definitions(&definitions))
    }

    /// Serialize the registry as YAML
    pub fn to_yaml_string(&self) -> Result<String> {
        serde_yaml_ng::to_string(&self.definitions()?).map_err(|e| Error::Registry(e.to_string()))
    }

    /// Build a registry from definitions; later ids replace earlier ones
    pub fn from_definitions(definitions: &[PropertyDefinition]) -> Self {
        let mut registry = Self::new();
        for definition in definitions {
            if registry.insert(definition.id, definition.into()).is_some() {
                log::warn!("Duplicate lobby attribute id {:#06X}", definition.id);
            }
        }
        registry
    }

    /// Export the registry as definitions, sorted by id
    ///
    /// Fails with [`Error::Registry`] if a lookup code is not UTF-8, since
    /// the text format cannot carry it unchanged.
    pub fn definitions(&self) -> Result<Vec<PropertyDefinition>> {
        self.iter()
            .map(|(id, property)| -> Result<PropertyDefinition> {
                let values: BTreeMap<String, String> = property
                    .values()
                    .map(|(code, value)| -> Result<(String, String)> {
                        let code = std::str::from_utf8(code).map_err(|_| {
                            Error::Registry(format!(
                                "Attribute {:#06X} has a non-UTF-8 code: {}",
                                id,
                                hex::encode(code)
                            ))
                        })?;
                        Ok((code.to_string(), value.to_string()))
                    })
                    .collect::<Result<_>>()?;

                Ok(PropertyDefinition {
                    id,
                    name: property.name.clone(),
                    values,
                })
            })
            .collect()
    }
}
