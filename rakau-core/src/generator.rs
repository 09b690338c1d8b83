//! Uniform random tree generation.
//!
//! Chains the sampler, the decoder and the label adapter. Every call owns its
//! own sequence and decode state, so generators can be shared freely across
//! threads.

use rand::{Rng, SeedableRng, rngs::SmallRng};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{info, instrument};

use crate::{
    decode::decode_tree,
    edge::TreeEdge,
    error::Result,
    labels::shift_labels,
    seed::derive_tree_seed,
    sequence::{sample_sequence, sample_sequence_with_rng},
};

/// A generated tree together with the sequence it was decoded from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RandomTree {
    node_count: usize,
    label_offset: usize,
    sequence: Vec<usize>,
    edges: Vec<TreeEdge>,
    labelled: Vec<TreeEdge>,
}

impl RandomTree {
    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the offset applied to the presented labels.
    #[must_use]
    #[rustfmt::skip]
    pub const fn label_offset(&self) -> usize { self.label_offset }

    /// Returns the Prüfer sequence the tree was decoded from.
    #[must_use]
    #[rustfmt::skip]
    pub fn sequence(&self) -> &[usize] { &self.sequence }

    /// Returns the edges over the internal ids `[0, n)`.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[TreeEdge] { &self.edges }

    /// Returns the edges with the label offset applied.
    #[must_use]
    #[rustfmt::skip]
    pub fn labelled_edges(&self) -> &[TreeEdge] { &self.labelled }

    /// Consumes the tree, returning the presented edges.
    #[must_use]
    pub fn into_labelled_edges(self) -> Vec<TreeEdge> {
        self.labelled
    }
}

/// Generates uniformly random labelled trees of a fixed size.
///
/// # Examples
/// ```
/// use rakau_core::{TreeGeneratorBuilder, validate_tree};
///
/// let generator = TreeGeneratorBuilder::new()
///     .with_node_count(10)
///     .with_seed(1)
///     .build()?;
/// let tree = generator.generate()?;
/// assert_eq!(tree.edges().len(), 9);
/// validate_tree(10, tree.edges())?;
/// assert_eq!(generator.generate()?, tree);
/// # Ok::<(), rakau_core::TreeError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeGenerator {
    node_count: usize,
    seed: Option<u64>,
    label_offset: usize,
}

impl TreeGenerator {
    pub(crate) const fn new(node_count: usize, seed: Option<u64>, label_offset: usize) -> Self {
        Self {
            node_count,
            seed,
            label_offset,
        }
    }

    /// Returns the number of vertices in generated trees.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count }

    /// Returns the configured seed, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> Option<u64> { self.seed }

    /// Returns the offset applied to presented labels.
    #[must_use]
    #[rustfmt::skip]
    pub const fn label_offset(&self) -> usize { self.label_offset }

    /// Generates one tree using the configured seed.
    ///
    /// A seeded generator returns the same tree on every call.
    ///
    /// # Errors
    /// Returns a [`crate::TreeError`] only when decoding hits a defect; the
    /// label range was validated when the generator was built.
    #[instrument(
        name = "core.generate",
        level = "debug",
        err,
        skip(self),
        fields(node_count = self.node_count, seeded = self.seed.is_some()),
    )]
    pub fn generate(&self) -> Result<RandomTree> {
        self.assemble(sample_sequence(self.node_count, self.seed))
    }

    /// Generates one tree drawing randomness from `rng`.
    ///
    /// # Errors
    /// See [`TreeGenerator::generate`].
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RandomTree> {
        self.assemble(sample_sequence_with_rng(self.node_count, rng))
    }

    /// Generates `count` independent trees.
    ///
    /// Tree `i` is seeded from the base seed and `i`, so the batch is the same
    /// whether it runs on one thread or many. Without a configured seed a
    /// base seed is drawn from entropy once per call.
    ///
    /// # Errors
    /// See [`TreeGenerator::generate`].
    ///
    /// # Examples
    /// ```
    /// use rakau_core::TreeGeneratorBuilder;
    ///
    /// let generator = TreeGeneratorBuilder::new()
    ///     .with_node_count(6)
    ///     .with_seed(3)
    ///     .build()?;
    /// let batch = generator.generate_batch(4)?;
    /// assert_eq!(batch.len(), 4);
    /// assert_eq!(generator.generate_batch(4)?, batch);
    /// # Ok::<(), rakau_core::TreeError>(())
    /// ```
    #[instrument(
        name = "core.generate_batch",
        err,
        skip(self),
        fields(node_count = self.node_count, seeded = self.seed.is_some()),
    )]
    pub fn generate_batch(&self, count: usize) -> Result<Vec<RandomTree>> {
        let base_seed = self.seed.unwrap_or_else(rand::random);
        let build_one = |index: usize| {
            let mut rng = SmallRng::seed_from_u64(derive_tree_seed(base_seed, index as u64));
            self.generate_with_rng(&mut rng)
        };

        #[cfg(feature = "parallel")]
        let trees = (0..count)
            .into_par_iter()
            .map(build_one)
            .collect::<Result<Vec<_>>>()?;
        #[cfg(not(feature = "parallel"))]
        let trees = (0..count).map(build_one).collect::<Result<Vec<_>>>()?;

        info!(trees = trees.len(), "batch generation completed");
        Ok(trees)
    }

    fn assemble(&self, sequence: Vec<usize>) -> Result<RandomTree> {
        let edges = decode_tree(self.node_count, &sequence)?;
        let labelled = shift_labels(&edges, self.label_offset)?;
        Ok(RandomTree {
            node_count: self.node_count,
            label_offset: self.label_offset,
            sequence,
            edges,
            labelled,
        })
    }
}
