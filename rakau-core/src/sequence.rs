//! Prüfer sequence sampling.
//!
//! A sequence of `n - 2` symbols drawn independently and uniformly from
//! `[0, n)` decodes to a uniformly random labelled tree on `n` vertices.

use rand::{Rng, SeedableRng, rngs::SmallRng};

use crate::error::{Result, TreeError};

/// Returns the Prüfer sequence length for a tree on `node_count` vertices.
///
/// # Examples
/// ```
/// use rakau_core::sequence_len;
///
/// assert_eq!(sequence_len(0), 0);
/// assert_eq!(sequence_len(2), 0);
/// assert_eq!(sequence_len(7), 5);
/// ```
#[must_use]
pub const fn sequence_len(node_count: usize) -> usize {
    node_count.saturating_sub(2)
}

/// Converts a signed node count from an outer surface into a vertex count.
///
/// # Errors
/// Returns [`TreeError::NegativeNodeCount`] when `raw` is negative.
///
/// # Examples
/// ```
/// use rakau_core::{TreeError, node_count_from_signed};
///
/// assert_eq!(node_count_from_signed(5), Ok(5));
/// assert_eq!(
///     node_count_from_signed(-1),
///     Err(TreeError::NegativeNodeCount { got: -1 })
/// );
/// ```
pub fn node_count_from_signed(raw: i64) -> Result<usize> {
    usize::try_from(raw).map_err(|_| TreeError::NegativeNodeCount { got: raw })
}

/// Samples a Prüfer sequence for a tree on `node_count` vertices.
///
/// With `Some(seed)` the sequence is reproducible; with `None` the generator
/// is seeded from operating system entropy.
///
/// # Examples
/// ```
/// use rakau_core::sample_sequence;
///
/// let first = sample_sequence(10, Some(7));
/// let second = sample_sequence(10, Some(7));
/// assert_eq!(first, second);
/// assert_eq!(first.len(), 8);
/// assert!(first.iter().all(|&symbol| symbol < 10));
/// ```
#[must_use]
pub fn sample_sequence(node_count: usize, seed: Option<u64>) -> Vec<usize> {
    let mut rng = match seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    sample_sequence_with_rng(node_count, &mut rng)
}

/// Samples a Prüfer sequence using a caller-supplied random number generator.
#[must_use]
pub fn sample_sequence_with_rng<R: Rng + ?Sized>(node_count: usize, rng: &mut R) -> Vec<usize> {
    (0..sequence_len(node_count))
        .map(|_| rng.gen_range(0..node_count))
        .collect()
}
