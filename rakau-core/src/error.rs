//! Error types for the rakau core library.
//!
//! Defines the error enum exposed by the public API, its stable error codes
//! and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Errors produced while sampling, decoding, encoding or relabelling trees.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum TreeError {
    /// A signed node count supplied at an outer boundary was negative.
    #[error("node count must be non-negative (got {got})")]
    NegativeNodeCount {
        /// The rejected node count.
        got: i64,
    },
    /// A Prüfer sequence did not have `max(n - 2, 0)` entries.
    #[error("a tree on {node_count} nodes needs a sequence of {expected} entries, got {got}")]
    SequenceLengthMismatch {
        /// Number of vertices in the requested tree.
        node_count: usize,
        /// Required sequence length.
        expected: usize,
        /// Supplied sequence length.
        got: usize,
    },
    /// A vertex id fell outside `[0, node_count)`.
    #[error("vertex {vertex} is out of range for {node_count} nodes")]
    VertexOutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the tree.
        node_count: usize,
    },
    /// Shifting a vertex label overflowed `usize`.
    #[error("shifting vertex {vertex} by {offset} overflows")]
    LabelOverflow {
        /// The vertex that could not be shifted.
        vertex: usize,
        /// The requested offset.
        offset: usize,
    },
    /// An edge list did not contain `n - 1` edges.
    #[error("a tree on {node_count} nodes has {expected} edges, got {got}")]
    EdgeCountMismatch {
        /// Number of vertices in the tree.
        node_count: usize,
        /// Required number of edges.
        expected: usize,
        /// Supplied number of edges.
        got: usize,
    },
    /// An edge joined a vertex to itself.
    #[error("edge ({vertex}, {vertex}) is a self loop")]
    SelfLoop {
        /// The vertex at both ends of the edge.
        vertex: usize,
    },
    /// An edge closed a cycle.
    #[error("edge ({left}, {right}) closes a cycle")]
    CycleDetected {
        /// First endpoint of the offending edge.
        left: usize,
        /// Second endpoint of the offending edge.
        right: usize,
    },
    /// Decoder bookkeeping broke. This is a defect in rakau, not bad input.
    #[error("tree decoder invariant violated: {invariant} (remaining leaves {remaining})")]
    InvariantViolation {
        /// Name of the violated invariant.
        invariant: &'static str,
        /// Number of leaves left when the violation was detected.
        remaining: usize,
    },
}

impl TreeError {
    /// Returns `true` when the error signals a programming defect rather than
    /// an invalid argument.
    ///
    /// # Examples
    /// ```
    /// use rakau_core::TreeError;
    ///
    /// let err = TreeError::SelfLoop { vertex: 3 };
    /// assert!(!err.is_defect());
    /// ```
    #[must_use]
    pub const fn is_defect(&self) -> bool {
        matches!(self, Self::InvariantViolation { .. })
    }
}

define_error_codes! {
    /// Stable codes describing [`TreeError`] variants.
    enum TreeErrorCode for TreeError {
        /// A signed node count was negative.
        NegativeNodeCount => NegativeNodeCount { .. } => "NEGATIVE_NODE_COUNT",
        /// A Prüfer sequence had the wrong length.
        SequenceLengthMismatch => SequenceLengthMismatch { .. } => "SEQUENCE_LENGTH_MISMATCH",
        /// A vertex id fell outside the vertex range.
        VertexOutOfRange => VertexOutOfRange { .. } => "VERTEX_OUT_OF_RANGE",
        /// Shifting a vertex label overflowed.
        LabelOverflow => LabelOverflow { .. } => "LABEL_OVERFLOW",
        /// An edge list had the wrong number of edges.
        EdgeCountMismatch => EdgeCountMismatch { .. } => "EDGE_COUNT_MISMATCH",
        /// An edge joined a vertex to itself.
        SelfLoop => SelfLoop { .. } => "SELF_LOOP",
        /// An edge closed a cycle.
        CycleDetected => CycleDetected { .. } => "CYCLE_DETECTED",
        /// Decoder bookkeeping broke.
        InvariantViolation => InvariantViolation { .. } => "INVARIANT_VIOLATION",
    }
}

/// Convenient result alias for rakau operations.
pub type Result<T> = core::result::Result<T, TreeError>;
