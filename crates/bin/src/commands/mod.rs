//! Subcommand implementations.

pub mod access;
pub mod flat;
pub mod merge;
pub mod transform;
