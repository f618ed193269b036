//! Error types for replay object construction

use std::io;
use thiserror::Error;

/// Result type alias for replay object operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building replay objects from raw fields
#[derive(Debug, Error)]
pub enum Error {
    /// Attribute id is not present in the lobby registry
    #[error("Unknown attribute id: {0:#06X}")]
    UnknownAttributeId(u32),

    /// Decoded attribute key is not present in the id's value table
    #[error("Unknown value {key:?} for attribute {id:#06X}")]
    UnknownAttributeValue {
        /// The attribute id
        id: u32,
        /// The reversed, stripped lookup key (lossy text)
        key: String,
    },

    /// Depot descriptor is shorter than the fixed layout
    #[error("Malformed depot file descriptor: expected at least 12 bytes, got {len}")]
    MalformedDepotFile {
        /// Length of the input that was rejected
        len: usize,
    },

    /// Depot server code is not valid UTF-8
    #[error("Invalid UTF-8 in depot server code")]
    InvalidDepotServer,

    /// Graph axes have different lengths
    #[error("Graph length mismatch: {times} times, {values} values")]
    GraphLengthMismatch {
        /// Number of entries on the time axis
        times: usize,
        /// Number of entries on the value axis
        values: usize,
    },

    /// Placeholder in a player format string does not name a field
    #[error("Unknown format field: {{{0}}}")]
    UnknownFormatField(String),

    /// Player format string has an unmatched brace
    #[error("Malformed format string at byte {position}: {reason}")]
    MalformedFormat {
        /// Byte offset of the offending brace
        position: usize,
        /// What was wrong with it
        reason: &'static str,
    },

    /// I/O error occurred while loading a registry
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Registry definition could not be parsed
    #[error("Registry error: {0}")]
    Registry(String),
}
