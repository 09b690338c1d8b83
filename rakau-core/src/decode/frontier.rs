//! Leaf frontier and degree bookkeeping for the Prüfer decoder.
//!
//! The frontier holds every vertex whose current degree is one and has not
//! yet been attached. It always yields the smallest such vertex next, and
//! tracks how many leaves have been consumed (the cursor). Admitting a vertex
//! never reorders leaves that were already consumed.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::error::{Result, TreeError};

/// Remaining degree of every vertex during a decode.
pub(super) struct DegreeTable {
    degrees: Vec<usize>,
}

impl DegreeTable {
    /// Builds the table from a validated sequence: one per vertex plus one per
    /// occurrence.
    ///
    /// The sequence must already have passed [`super::check_sequence`]; symbols
    /// outside `0..node_count` are a caller bug and trip a debug assertion.
    pub(super) fn from_sequence(node_count: usize, sequence: &[usize]) -> Self {
        let mut degrees = vec![1_usize; node_count];
        for &symbol in sequence {
            debug_assert!(symbol < node_count, "unchecked symbol {symbol}");
            if let Some(degree) = degrees.get_mut(symbol) {
                *degree += 1;
            }
        }
        Self { degrees }
    }

    /// Vertices whose degree is currently one, ascending.
    pub(super) fn leaves(&self) -> impl Iterator<Item = usize> + '_ {
        self.degrees
            .iter()
            .enumerate()
            .filter_map(|(vertex, &degree)| (degree == 1).then_some(vertex))
    }

    /// Removes one unit of degree from `vertex` and returns what remains.
    pub(super) fn release(&mut self, vertex: usize) -> Result<usize> {
        let node_count = self.degrees.len();
        let degree = self
            .degrees
            .get_mut(vertex)
            .ok_or(TreeError::VertexOutOfRange { vertex, node_count })?;
        *degree = degree.checked_sub(1).ok_or(TreeError::InvariantViolation {
            invariant: "a vertex degree must not drop below zero",
            remaining: 0,
        })?;
        Ok(*degree)
    }
}

/// Ordered set of unconsumed leaves with a consumption cursor.
#[derive(Debug)]
pub(super) struct LeafFrontier {
    pending: BinaryHeap<Reverse<usize>>,
    consumed: usize,
}

impl LeafFrontier {
    pub(super) fn new(leaves: impl IntoIterator<Item = usize>) -> Self {
        Self {
            pending: leaves.into_iter().map(Reverse).collect(),
            consumed: 0,
        }
    }

    /// Consumes and returns the smallest unconsumed leaf.
    pub(super) fn take_smallest(&mut self) -> Option<usize> {
        let Reverse(leaf) = self.pending.pop()?;
        self.consumed += 1;
        Some(leaf)
    }

    /// Adds a vertex whose degree has just dropped to one.
    pub(super) fn admit(&mut self, vertex: usize) {
        self.pending.push(Reverse(vertex));
    }

    pub(super) fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub(super) const fn consumed(&self) -> usize {
        self.consumed
    }

    /// Returns the two leaves left after every symbol has been processed,
    /// smaller first.
    ///
    /// Any other count means the degree bookkeeping is broken.
    pub(super) fn into_final_pair(mut self) -> Result<(usize, usize)> {
        let remaining = self.remaining();
        if remaining != 2 {
            return Err(TreeError::InvariantViolation {
                invariant: "exactly two leaves must remain after decoding",
                remaining,
            });
        }
        match (self.take_smallest(), self.take_smallest()) {
            (Some(first), Some(second)) => Ok((first, second)),
            _ => Err(TreeError::InvariantViolation {
                invariant: "final leaves must be retrievable",
                remaining,
            }),
        }
    }
}
