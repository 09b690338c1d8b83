//! Prüfer sequence decoding.
//!
//! Turns a sequence of `n - 2` vertex ids into the `n - 1` edges of the
//! unique labelled tree it encodes. Each step attaches the smallest current
//! leaf to the next symbol, so the output is fully determined by the input.
//! Leaves are kept in a min-heap, giving `O(n log n)` overall.

mod frontier;

use tracing::{debug, error, instrument};

use crate::{
    edge::TreeEdge,
    error::{Result, TreeError},
    sequence::sequence_len,
};

use self::frontier::{DegreeTable, LeafFrontier};

/// Decodes a Prüfer sequence into the edge list of a tree on `node_count`
/// vertices.
///
/// Edges are returned in emission order: one `(leaf, symbol)` edge per
/// sequence entry followed by the edge joining the last two leaves. Trees on
/// zero or one vertex have no edges.
///
/// # Errors
/// Returns [`TreeError::SequenceLengthMismatch`] when the sequence does not
/// have `max(n - 2, 0)` entries and [`TreeError::VertexOutOfRange`] when a
/// symbol is not below `node_count`. Both are checked before any edge is
/// produced. [`TreeError::InvariantViolation`] signals a defect in the
/// decoder itself.
///
/// # Examples
/// ```
/// use rakau_core::{TreeEdge, decode_tree};
///
/// let edges = decode_tree(4, &[0, 0])?;
/// assert_eq!(
///     edges,
///     vec![TreeEdge::new(1, 0), TreeEdge::new(2, 0), TreeEdge::new(0, 3)]
/// );
/// # Ok::<(), rakau_core::TreeError>(())
/// ```
#[instrument(
    name = "core.decode",
    level = "debug",
    err,
    skip(sequence),
    fields(node_count = node_count, sequence_len = sequence.len()),
)]
pub fn decode_tree(node_count: usize, sequence: &[usize]) -> Result<Vec<TreeEdge>> {
    check_sequence(node_count, sequence)?;
    if node_count < 2 {
        return Ok(Vec::new());
    }

    let mut degrees = DegreeTable::from_sequence(node_count, sequence);
    let mut leaves = LeafFrontier::new(degrees.leaves());
    let mut edges = Vec::with_capacity(node_count - 1);

    for &symbol in sequence {
        let Some(leaf) = leaves.take_smallest() else {
            return Err(report_defect(TreeError::InvariantViolation {
                invariant: "a leaf must be available for every sequence symbol",
                remaining: 0,
            }));
        };
        edges.push(TreeEdge::new(leaf, symbol));
        degrees.release(leaf).map_err(report_defect)?;
        if degrees.release(symbol).map_err(report_defect)? == 1 {
            leaves.admit(symbol);
        }
    }

    let consumed = leaves.consumed();
    let (first, second) = leaves.into_final_pair().map_err(report_defect)?;
    edges.push(TreeEdge::new(first, second));
    debug!(edges = edges.len(), consumed, "decoded tree");
    Ok(edges)
}

/// Validates sequence length and symbol range without decoding.
///
/// # Errors
/// Returns the same argument errors as [`decode_tree`].
pub fn check_sequence(node_count: usize, sequence: &[usize]) -> Result<()> {
    let expected = sequence_len(node_count);
    if sequence.len() != expected {
        return Err(TreeError::SequenceLengthMismatch {
            node_count,
            expected,
            got: sequence.len(),
        });
    }
    if let Some(&vertex) = sequence.iter().find(|&&symbol| symbol >= node_count) {
        return Err(TreeError::VertexOutOfRange { vertex, node_count });
    }
    Ok(())
}

fn report_defect(err: TreeError) -> TreeError {
    error!(code = %err.code(), error = %err, "tree decoder bookkeeping is broken");
    err
}
