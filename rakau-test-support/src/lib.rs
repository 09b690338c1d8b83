//! Shared test utilities used across rakau crates.

pub mod ci;
pub mod tracing;
