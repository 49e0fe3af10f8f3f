//! CLI command implementations.

pub mod orders;
