//! Goodness-of-fit helpers for the uniform tree distribution.

use std::collections::HashMap;

use rand::{SeedableRng, rngs::SmallRng};

use crate::{canonical_signature, decode_tree, sample_sequence_with_rng};

/// Edge-set signature identifying one labelled tree.
pub(super) type Signature = Vec<(usize, usize)>;

/// Decodes every sequence over `[0, n)` and returns the distinct trees.
pub(super) fn enumerate_trees(node_count: usize) -> HashMap<Signature, Vec<usize>> {
    let length = node_count.saturating_sub(2);
    let total = node_count.pow(u32::try_from(length).expect("small trees only"));
    let mut trees = HashMap::with_capacity(total);
    for mut code in 0..total {
        let mut sequence = Vec::with_capacity(length);
        for _ in 0..length {
            sequence.push(code % node_count);
            code /= node_count;
        }
        let edges = decode_tree(node_count, &sequence).expect("every sequence is valid");
        trees.insert(canonical_signature(&edges), sequence);
    }
    trees
}

/// Samples `samples` trees and tallies them by signature.
pub(super) fn sample_counts(
    node_count: usize,
    samples: usize,
    seed: u64,
) -> HashMap<Signature, usize> {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut counts = HashMap::new();
    for _ in 0..samples {
        let sequence = sample_sequence_with_rng(node_count, &mut rng);
        let edges = decode_tree(node_count, &sequence).expect("sampled sequence is valid");
        *counts.entry(canonical_signature(&edges)).or_insert(0) += 1;
    }
    counts
}

/// Pearson's chi-square statistic against a uniform distribution over
/// `classes` outcomes. Unobserved classes contribute their full expectation.
pub(super) fn chi_square_uniform(counts: &HashMap<Signature, usize>, classes: usize) -> f64 {
    let samples: usize = counts.values().sum();
    let expected = samples as f64 / classes as f64;
    let observed: f64 = counts
        .values()
        .map(|&count| {
            let diff = count as f64 - expected;
            diff * diff / expected
        })
        .sum();
    let missing = classes.saturating_sub(counts.len()) as f64;
    observed + missing * expected
}
