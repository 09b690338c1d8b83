//! Benchmark parameter types.

use std::fmt;

/// Parameters for a single-tree benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreeBenchParams {
    /// Number of tree vertices.
    pub node_count: usize,
}

impl fmt::Display for TreeBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.node_count)
    }
}

/// Parameters for a batch generation benchmark run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BatchBenchParams {
    /// Number of vertices in each tree.
    pub node_count: usize,
    /// Number of trees per batch.
    pub trees: usize,
}

impl fmt::Display for BatchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},trees={}", self.node_count, self.trees)
    }
}
