//! Seeded inputs shared by the benchmarks.

use rand::{SeedableRng, rngs::SmallRng};

use rakau_core::{TreeEdge, decode_tree, sample_sequence_with_rng};

use crate::params::TreeBenchParams;

/// Tree sizes measured by the decode and encode benchmarks.
pub const NODE_COUNTS: &[usize] = &[1_000, 10_000, 100_000];

/// A Prüfer sequence and the tree it decodes to.
#[derive(Clone, Debug)]
pub struct TreeFixture {
    /// Parameters identifying the fixture.
    pub params: TreeBenchParams,
    /// Sampled Prüfer sequence.
    pub sequence: Vec<usize>,
    /// Edges decoded from `sequence`.
    pub edges: Vec<TreeEdge>,
}

/// Builds one fixture per entry of `node_counts`, all drawn from `seed`.
///
/// # Errors
/// Returns [`rakau_core::TreeError`] if a sampled sequence fails to decode,
/// which would indicate a decoder defect.
///
/// # Examples
/// ```
/// use rakau_benches::fixtures::tree_fixtures;
///
/// let fixtures = tree_fixtures(&[5, 50], 42)?;
/// assert_eq!(fixtures.len(), 2);
/// assert_eq!(fixtures[1].sequence.len(), 48);
/// assert_eq!(fixtures[1].edges.len(), 49);
/// # Ok::<(), rakau_core::TreeError>(())
/// ```
pub fn tree_fixtures(node_counts: &[usize], seed: u64) -> rakau_core::Result<Vec<TreeFixture>> {
    let mut rng = SmallRng::seed_from_u64(seed);
    node_counts
        .iter()
        .map(|&node_count| {
            let sequence = sample_sequence_with_rng(node_count, &mut rng);
            let edges = decode_tree(node_count, &sequence)?;
            Ok(TreeFixture {
                params: TreeBenchParams { node_count },
                sequence,
                edges,
            })
        })
        .collect()
}
