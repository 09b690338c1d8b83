//! Vertex relabelling for presentation.
//!
//! Trees are built over `[0, n)`; judges usually expect `[1, n]`.

use crate::{
    edge::TreeEdge,
    error::{Result, TreeError},
};

/// Offset that maps internal 0-based ids onto the customary 1-based labels.
pub const ONE_BASED: usize = 1;

/// Returns a copy of `edges` with every vertex shifted by `offset`.
///
/// Emission order and edge orientation are preserved.
///
/// # Errors
/// Returns [`TreeError::LabelOverflow`] when a shifted label would not fit in
/// `usize`.
///
/// # Examples
/// ```
/// use rakau_core::{ONE_BASED, TreeEdge, shift_labels};
///
/// let shifted = shift_labels(&[TreeEdge::new(1, 0), TreeEdge::new(0, 2)], ONE_BASED)?;
/// assert_eq!(shifted, vec![TreeEdge::new(2, 1), TreeEdge::new(1, 3)]);
/// # Ok::<(), rakau_core::TreeError>(())
/// ```
pub fn shift_labels(edges: &[TreeEdge], offset: usize) -> Result<Vec<TreeEdge>> {
    edges
        .iter()
        .map(|edge| {
            Ok(TreeEdge::new(
                shift(edge.source(), offset)?,
                shift(edge.target(), offset)?,
            ))
        })
        .collect()
}

fn shift(vertex: usize, offset: usize) -> Result<usize> {
    vertex
        .checked_add(offset)
        .ok_or(TreeError::LabelOverflow { vertex, offset })
}
