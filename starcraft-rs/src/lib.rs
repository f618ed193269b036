//! Starcraft-RS library
//!
//! Command definitions and helpers behind the `starcraft-rs` binary.

pub mod cli;
pub mod commands;
pub mod utils;
