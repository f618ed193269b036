//! Command implementations for each object type

pub mod attribute;
pub mod depot;
pub mod team;
