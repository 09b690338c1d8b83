//! Rakau core library.
//!
//! Generates uniformly random labelled trees by sampling a Prüfer sequence and
//! decoding it. Decoding always attaches the smallest current leaf, which
//! makes sequence and tree a bijection: a uniformly sampled sequence yields a
//! uniformly random tree on `n` vertices.
//!
//! ```
//! use rakau_core::{ONE_BASED, decode_tree, sample_sequence, shift_labels};
//!
//! let sequence = sample_sequence(1_000, Some(2025));
//! let edges = decode_tree(1_000, &sequence)?;
//! let presented = shift_labels(&edges, ONE_BASED)?;
//! assert_eq!(presented.len(), 999);
//! # Ok::<(), rakau_core::TreeError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod decode;
mod edge;
mod encode;
mod error;
mod generator;
mod labels;
mod seed;
mod sequence;
mod validate;

#[cfg(test)]
mod property;
#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::TreeGeneratorBuilder,
    decode::{check_sequence, decode_tree},
    edge::TreeEdge,
    encode::encode_tree,
    error::{Result, TreeError, TreeErrorCode},
    generator::{RandomTree, TreeGenerator},
    labels::{ONE_BASED, shift_labels},
    seed::derive_tree_seed,
    sequence::{node_count_from_signed, sample_sequence, sample_sequence_with_rng, sequence_len},
    validate::{canonical_signature, degree_table, validate_tree},
};
