//! Benchmark support crate for rakau.
//!
//! Provides the parameter types and seeded Prüfer sequence fixtures used by
//! the Criterion benchmarks for decoding, encoding and batch generation.

pub mod fixtures;
pub mod params;
