//! Shared utilities for the starcraft-rs CLI

pub mod parse;

pub use parse::*;
