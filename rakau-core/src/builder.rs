//! Builder for configuring [`TreeGenerator`] instances.
//!
//! Validates the label range up front so a built generator can never fail
//! while presenting labels.

use crate::{
    error::{Result, TreeError},
    generator::TreeGenerator,
};

/// Configures and constructs [`TreeGenerator`] instances.
///
/// # Examples
/// ```
/// use rakau_core::TreeGeneratorBuilder;
///
/// let generator = TreeGeneratorBuilder::new()
///     .with_node_count(8)
///     .with_seed(2025)
///     .with_label_offset(1)
///     .build()?;
/// assert_eq!(generator.node_count(), 8);
/// assert_eq!(generator.seed(), Some(2025));
/// # Ok::<(), rakau_core::TreeError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeGeneratorBuilder {
    node_count: usize,
    seed: Option<u64>,
    label_offset: usize,
}

impl Default for TreeGeneratorBuilder {
    fn default() -> Self {
        Self {
            node_count: 2,
            seed: None,
            label_offset: 0,
        }
    }
}

impl TreeGeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use rakau_core::TreeGeneratorBuilder;
    ///
    /// let builder = TreeGeneratorBuilder::new();
    /// assert_eq!(builder.node_count(), 2);
    /// assert_eq!(builder.seed(), None);
    /// assert_eq!(builder.label_offset(), 0);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of vertices in generated trees.
    #[must_use]
    pub const fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Returns the configured number of vertices.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Fixes the random seed so generation is reproducible.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Sets the offset added to every vertex id when presenting edges.
    ///
    /// # Examples
    /// ```
    /// use rakau_core::{ONE_BASED, TreeGeneratorBuilder};
    ///
    /// let builder = TreeGeneratorBuilder::new().with_label_offset(ONE_BASED);
    /// assert_eq!(builder.label_offset(), 1);
    /// ```
    #[must_use]
    pub const fn with_label_offset(mut self, offset: usize) -> Self {
        self.label_offset = offset;
        self
    }

    /// Returns the configured label offset.
    #[must_use]
    pub const fn label_offset(&self) -> usize {
        self.label_offset
    }

    /// Validates the configuration and constructs a [`TreeGenerator`].
    ///
    /// # Errors
    /// Returns [`TreeError::LabelOverflow`] when the largest vertex id plus
    /// the label offset does not fit in `usize`.
    ///
    /// # Examples
    /// ```
    /// use rakau_core::{TreeError, TreeGeneratorBuilder};
    ///
    /// let err = TreeGeneratorBuilder::new()
    ///     .with_node_count(3)
    ///     .with_label_offset(usize::MAX)
    ///     .build()
    ///     .expect_err("labels would overflow");
    /// assert!(matches!(err, TreeError::LabelOverflow { vertex: 2, .. }));
    /// ```
    pub fn build(self) -> Result<TreeGenerator> {
        let largest = self.node_count.saturating_sub(1);
        if largest.checked_add(self.label_offset).is_none() {
            return Err(TreeError::LabelOverflow {
                vertex: largest,
                offset: self.label_offset,
            });
        }
        Ok(TreeGenerator::new(
            self.node_count,
            self.seed,
            self.label_offset,
        ))
    }
}
