//! Structural checks and summaries for tree edge lists.
//!
//! A graph on `n` vertices with `n - 1` edges and no cycle is connected, so
//! validation only needs the edge count, endpoint ranges and a union-find
//! cycle check.

use crate::{
    edge::TreeEdge,
    error::{Result, TreeError},
};

/// Checks that `edges` form a tree on the vertices `[0, node_count)`.
///
/// # Errors
/// Returns [`TreeError::EdgeCountMismatch`] when the edge count is not
/// `max(n - 1, 0)`, [`TreeError::VertexOutOfRange`] for endpoints outside the
/// vertex range, [`TreeError::SelfLoop`] for edges joining a vertex to itself
/// and [`TreeError::CycleDetected`] for the first edge that closes a cycle.
///
/// # Examples
/// ```
/// use rakau_core::{TreeEdge, TreeError, validate_tree};
///
/// let path = [TreeEdge::new(0, 1), TreeEdge::new(1, 2)];
/// assert!(validate_tree(3, &path).is_ok());
///
/// let looped = [TreeEdge::new(0, 1), TreeEdge::new(1, 0)];
/// assert_eq!(
///     validate_tree(3, &looped),
///     Err(TreeError::CycleDetected { left: 1, right: 0 })
/// );
/// ```
pub fn validate_tree(node_count: usize, edges: &[TreeEdge]) -> Result<()> {
    let expected = node_count.saturating_sub(1);
    if edges.len() != expected {
        return Err(TreeError::EdgeCountMismatch {
            node_count,
            expected,
            got: edges.len(),
        });
    }

    let mut components = DisjointSet::new(node_count);
    for edge in edges {
        let (left, right) = edge.as_pair();
        for vertex in [left, right] {
            if vertex >= node_count {
                return Err(TreeError::VertexOutOfRange { vertex, node_count });
            }
        }
        if left == right {
            return Err(TreeError::SelfLoop { vertex: left });
        }
        if !components.union(left, right) {
            return Err(TreeError::CycleDetected { left, right });
        }
    }
    Ok(())
}

/// Returns the degree of every vertex in `[0, node_count)`.
///
/// Endpoints outside the range are ignored.
///
/// # Examples
/// ```
/// use rakau_core::{TreeEdge, degree_table};
///
/// let star = [TreeEdge::new(1, 0), TreeEdge::new(2, 0), TreeEdge::new(0, 3)];
/// assert_eq!(degree_table(4, &star), vec![3, 1, 1, 1]);
/// ```
#[must_use]
pub fn degree_table(node_count: usize, edges: &[TreeEdge]) -> Vec<usize> {
    let mut degrees = vec![0; node_count];
    for edge in edges {
        for vertex in [edge.source(), edge.target()] {
            if let Some(degree) = degrees.get_mut(vertex) {
                *degree += 1;
            }
        }
    }
    degrees
}

/// Returns an order-independent signature of an edge set.
///
/// Every edge is normalised to `(min, max)` and the list is sorted, so two
/// edge lists describe the same tree exactly when their signatures match.
///
/// # Examples
/// ```
/// use rakau_core::{TreeEdge, canonical_signature};
///
/// let left = [TreeEdge::new(2, 0), TreeEdge::new(1, 0)];
/// let right = [TreeEdge::new(0, 1), TreeEdge::new(0, 2)];
/// assert_eq!(canonical_signature(&left), canonical_signature(&right));
/// ```
#[must_use]
pub fn canonical_signature(edges: &[TreeEdge]) -> Vec<(usize, usize)> {
    let mut signature: Vec<_> = edges.iter().map(TreeEdge::canonical).collect();
    signature.sort_unstable();
    signature
}

/// Sequential union-find with path halving and union by size.
struct DisjointSet {
    parent: Vec<usize>,
    size: Vec<usize>,
}

impl DisjointSet {
    fn new(node_count: usize) -> Self {
        Self {
            parent: (0..node_count).collect(),
            size: vec![1; node_count],
        }
    }

    fn find(&mut self, mut node: usize) -> usize {
        while let Some(&parent) = self.parent.get(node) {
            if parent == node {
                break;
            }
            let grandparent = self.parent.get(parent).copied().unwrap_or(parent);
            if let Some(slot) = self.parent.get_mut(node) {
                *slot = grandparent;
            }
            node = grandparent;
        }
        node
    }

    /// Joins the sets holding `left` and `right`; `false` when already joined.
    fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }
        let left_size = self.size.get(left_root).copied().unwrap_or(1);
        let right_size = self.size.get(right_root).copied().unwrap_or(1);
        let (parent, child) = if left_size >= right_size {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };
        if let Some(slot) = self.parent.get_mut(child) {
            *slot = parent;
        }
        if let Some(slot) = self.size.get_mut(parent) {
            *slot = left_size + right_size;
        }
        true
    }
}
