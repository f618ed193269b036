//! Battle.net depot file references.
//!
//! Replays point at maps, mods and other assets through 12+ byte depot
//! descriptors:
//!
//! | Offset | Size | Content |
//! |--------|------|---------|
//! | 0      | 4    | asset type code, such as `s2ma` |
//! | 4      | 4    | server code, padded with `\0` or spaces |
//! | 8      | n    | content hash |
//!
//! The descriptor is only formatted into a URL here; nothing is fetched.

use crate::{Error, Result};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Smallest descriptor that holds a type code, a server code and a hash byte run
pub const DESCRIPTOR_MIN_LEN: usize = 12;

/// A content-addressed asset hosted on a Battle.net depot server
#[derive(Debug, Clone)]
pub struct DepotFile {
    server: String,
    hash: String,
    file_type: [u8; 4],
}

impl DepotFile {
    /// Decode a raw depot descriptor
    ///
    /// # Examples
    ///
    /// ```
    /// use sc2_objects::DepotFile;
    ///
    /// let mut raw = b"s2maus\0\0".to_vec();
    /// raw.extend_from_slice(&[0xde, 0xad, 0xbe, 0xef]);
    ///
    /// let depot = DepotFile::from_bytes(&raw).unwrap();
    /// assert_eq!(depot.url(), "http://us.depot.battle.net:1119/deadbeef.s2ma");
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() < DESCRIPTOR_MIN_LEN {
            log::warn!("Depot descriptor too short: {} bytes", bytes.len());
            return Err(Error::MalformedDepotFile { len: bytes.len() });
        }

        let mut file_type = [0u8; 4];
        file_type.copy_from_slice(&bytes[0..4]);

        let server = std::str::from_utf8(&bytes[4..8])
            .map_err(|_| Error::InvalidDepotServer)?
            .trim_matches(|c| c == '\0' || c == ' ')
            .to_string();

        let hash = hex::encode(&bytes[8..]);

        log::trace!(
            "Decoded depot file: server={}, type={:?}, hash={}",
            server,
            String::from_utf8_lossy(&file_type),
            hash
        );

        Ok(Self {
            server,
            hash,
            file_type,
        })
    }

    /// Server code, such as `us` or `eu`
    pub fn server(&self) -> &str {
        &self.server
    }

    /// Lowercase hex content hash
    pub fn hash(&self) -> &str {
        &self.hash
    }

    /// Raw 4-byte asset type code
    pub fn file_type(&self) -> [u8; 4] {
        self.file_type
    }

    /// Asset type code as text, used as the URL extension
    pub fn extension(&self) -> String {
        String::from_utf8_lossy(&self.file_type).into_owned()
    }

    /// Download URL of the asset
    pub fn url(&self) -> String {
        format!(
            "http://{}.depot.battle.net:1119/{}.{}",
            self.server,
            self.hash,
            self.extension()
        )
    }
}

impl TryFrom<&[u8]> for DepotFile {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        Self::from_bytes(bytes)
    }
}

// Identity is the URL, not the raw descriptor bytes.
impl PartialEq for DepotFile {
    fn eq(&self, other: &Self) -> bool {
        self.url() == other.url()
    }
}

impl Eq for DepotFile {}

impl Hash for DepotFile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.url().hash(state);
    }
}

impl fmt::Display for DepotFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url())
    }
}
