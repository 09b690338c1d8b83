//! Edge representation shared by the decoder, encoder and label adapter.

use std::fmt;

/// A single undirected tree edge in emission order.
///
/// The decoder emits `source` as the consumed leaf and `target` as the
/// Prüfer symbol it was attached to. The orientation carries no meaning for
/// the tree itself; use [`TreeEdge::canonical`] when comparing edge sets.
///
/// # Examples
/// ```
/// use rakau_core::TreeEdge;
///
/// let edge = TreeEdge::new(4, 1);
/// assert_eq!(edge.as_pair(), (4, 1));
/// assert_eq!(edge.canonical(), (1, 4));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct TreeEdge {
    source: usize,
    target: usize,
}

impl TreeEdge {
    /// Creates an edge joining `source` and `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Returns the first endpoint as emitted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second endpoint as emitted.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the endpoints in emission order.
    #[must_use]
    pub const fn as_pair(&self) -> (usize, usize) {
        (self.source, self.target)
    }

    /// Returns the endpoints ordered as `(min, max)`.
    #[must_use]
    pub const fn canonical(&self) -> (usize, usize) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}

impl From<(usize, usize)> for TreeEdge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}

impl fmt::Display for TreeEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.source, self.target)
    }
}
