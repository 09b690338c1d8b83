//! Fixture and shape types for decoder property tests.

use test_strategy::Arbitrary;

/// How the symbols of a generated Prüfer sequence are chosen.
///
/// Skewed shapes push the leaf frontier into its edge cases: long runs of a
/// single hub, vertices re-entering the frontier below the cursor, and
/// sequences touching only the extreme labels.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Arbitrary)]
pub(super) enum SequenceShape {
    /// Every symbol drawn uniformly from `[0, n)`.
    #[weight(4)]
    Uniform,
    /// One hub repeated throughout, decoding to a star.
    #[weight(1)]
    Star,
    /// Consecutive labels, decoding to a caterpillar around a path.
    #[weight(2)]
    Path,
    /// Symbols drawn from a pool of one to three hubs.
    #[weight(2)]
    FewHubs,
    /// Only the smallest and largest labels.
    #[weight(1)]
    Extremes,
}

/// A node count, a valid sequence for it, and how the sequence was built.
#[derive(Clone, Debug)]
pub(super) struct SequenceFixture {
    /// Number of vertices in the encoded tree.
    pub node_count: usize,
    /// Prüfer sequence of length `max(node_count - 2, 0)`.
    pub sequence: Vec<usize>,
    /// Shape used during generation.
    pub shape: SequenceShape,
}
