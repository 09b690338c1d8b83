//! Property-based tests for the Prüfer decoder and encoder.
//!
//! Checks decoded edge lists against an independent breadth-first oracle
//! (edge count, connectivity, acyclicity, degree correspondence), verifies
//! that encoding inverts decoding, and measures how evenly sampled trees
//! cover every labelled tree on a small vertex set.

mod bijection;
mod oracle;
mod strategies;
mod structural;
mod types;
mod uniformity;
