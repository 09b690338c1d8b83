//! Prüfer sequence encoding, the inverse of [`crate::decode_tree`].
//!
//! Repeatedly removes the smallest leaf and records its neighbour. Each
//! vertex keeps the XOR of its live neighbours, so a leaf's single neighbour
//! is read off directly without adjacency lists.

use std::{cmp::Reverse, collections::BinaryHeap};

use tracing::instrument;

use crate::{
    edge::TreeEdge,
    error::{Result, TreeError},
    sequence::sequence_len,
    validate::validate_tree,
};

/// Encodes a tree on `node_count` vertices as its Prüfer sequence.
///
/// The edge list may be in any order and orientation.
///
/// # Errors
/// Returns the errors of [`validate_tree`] when `edges` is not a tree on
/// `[0, node_count)`. [`TreeError::InvariantViolation`] signals a defect in
/// the encoder.
///
/// # Examples
/// ```
/// use rakau_core::{TreeEdge, decode_tree, encode_tree};
///
/// let star = [TreeEdge::new(0, 3), TreeEdge::new(1, 0), TreeEdge::new(0, 2)];
/// let sequence = encode_tree(4, &star)?;
/// assert_eq!(sequence, vec![0, 0]);
/// assert_eq!(decode_tree(4, &sequence)?.len(), 3);
/// # Ok::<(), rakau_core::TreeError>(())
/// ```
#[instrument(
    name = "core.encode",
    level = "debug",
    err,
    skip(edges),
    fields(node_count = node_count, edges = edges.len()),
)]
pub fn encode_tree(node_count: usize, edges: &[TreeEdge]) -> Result<Vec<usize>> {
    validate_tree(node_count, edges)?;

    let mut degrees = vec![0_usize; node_count];
    let mut neighbours = vec![0_usize; node_count];
    for edge in edges {
        let (left, right) = edge.as_pair();
        attach(&mut degrees, &mut neighbours, left, right)?;
        attach(&mut degrees, &mut neighbours, right, left)?;
    }

    let mut leaves: BinaryHeap<Reverse<usize>> = degrees
        .iter()
        .enumerate()
        .filter_map(|(vertex, &degree)| (degree == 1).then_some(Reverse(vertex)))
        .collect();

    let length = sequence_len(node_count);
    let mut sequence = Vec::with_capacity(length);
    while sequence.len() < length {
        let Some(Reverse(leaf)) = leaves.pop() else {
            return Err(TreeError::InvariantViolation {
                invariant: "a leaf must be available until the sequence is complete",
                remaining: 0,
            });
        };
        let parent = neighbours.get(leaf).copied().ok_or_else(|| missing(leaves.len()))?;
        sequence.push(parent);

        let remaining = leaves.len();
        let parent_degree = degrees.get_mut(parent).ok_or_else(|| missing(remaining))?;
        *parent_degree -= 1;
        let now_leaf = *parent_degree == 1;
        if let Some(slot) = neighbours.get_mut(parent) {
            *slot ^= leaf;
        }
        if now_leaf {
            leaves.push(Reverse(parent));
        }
    }
    Ok(sequence)
}

fn attach(
    degrees: &mut [usize],
    neighbours: &mut [usize],
    vertex: usize,
    neighbour: usize,
) -> Result<()> {
    let node_count = degrees.len();
    let out_of_range = TreeError::VertexOutOfRange { vertex, node_count };
    *degrees.get_mut(vertex).ok_or_else(|| out_of_range.clone())? += 1;
    *neighbours.get_mut(vertex).ok_or(out_of_range)? ^= neighbour;
    Ok(())
}

const fn missing(remaining: usize) -> TreeError {
    TreeError::InvariantViolation {
        invariant: "encoder bookkeeping must cover every vertex",
        remaining,
    }
}
