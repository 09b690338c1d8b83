//! Structural properties of decoded trees.
//!
//! For every valid sequence the decoder must produce:
//!
//! - **Edge count**: exactly `n - 1` edges (none for `n <= 1`).
//! - **Range**: endpoints in `[0, n)`, never a self loop.
//! - **Spanning**: every vertex reachable from vertex 0, which together
//!   with the edge count rules out cycles.
//! - **Degrees**: `deg(v) = 1 + occurrences(v)` for `n >= 2`.
//! - **Oracle agreement**: the same edges, in the same order, as the
//!   quadratic reference decoder.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{decode_tree, degree_table, test_utils::occurrences};

use super::oracle::{quadratic_decode, reachable_from_zero};
use super::types::SequenceFixture;

/// Runs the structural property for the given fixture.
pub(super) fn run_structural_property(fixture: &SequenceFixture) -> TestCaseResult {
    let SequenceFixture {
        node_count,
        sequence,
        shape,
    } = fixture;
    let node_count = *node_count;

    let edges = decode_tree(node_count, sequence).map_err(|err| {
        TestCaseError::fail(format!(
            "decode failed: {err} (shape={shape:?}, nodes={node_count})"
        ))
    })?;

    let expected_edges = node_count.saturating_sub(1);
    if edges.len() != expected_edges {
        return Err(TestCaseError::fail(format!(
            "expected {expected_edges} edges, got {} (shape={shape:?})",
            edges.len()
        )));
    }

    for edge in &edges {
        let (left, right) = edge.as_pair();
        if left == right || left >= node_count || right >= node_count {
            return Err(TestCaseError::fail(format!(
                "invalid edge ({left}, {right}) for {node_count} nodes"
            )));
        }
    }

    let reached = reachable_from_zero(node_count, &edges);
    if reached != node_count {
        return Err(TestCaseError::fail(format!(
            "only {reached} of {node_count} vertices reachable (shape={shape:?})"
        )));
    }

    if node_count >= 2 {
        for (vertex, degree) in degree_table(node_count, &edges).into_iter().enumerate() {
            let expected = 1 + occurrences(sequence, vertex);
            if degree != expected {
                return Err(TestCaseError::fail(format!(
                    "vertex {vertex} has degree {degree}, expected {expected}"
                )));
            }
        }
    }

    let emitted: Vec<_> = edges.iter().map(|edge| edge.as_pair()).collect();
    let reference = quadratic_decode(node_count, sequence);
    if emitted != reference {
        return Err(TestCaseError::fail(format!(
            "decoder diverged from oracle (shape={shape:?}): {emitted:?} != {reference:?}"
        )));
    }
    Ok(())
}
