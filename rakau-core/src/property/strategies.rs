//! Strategy builders for decoder property tests.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::sequence::sequence_len;

use super::types::{SequenceFixture, SequenceShape};

/// Largest tree generated by the property strategies.
const MAX_NODES: usize = 96;

/// Generates fixtures across every [`SequenceShape`].
pub(super) fn sequence_fixture_strategy() -> impl Strategy<Value = SequenceFixture> {
    (any::<SequenceShape>(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: SequenceShape, rng: &mut SmallRng) -> SequenceFixture {
    let node_count = rng.gen_range(0..=MAX_NODES);
    let length = sequence_len(node_count);
    let sequence = if length == 0 {
        Vec::new()
    } else {
        match shape {
            SequenceShape::Uniform => (0..length).map(|_| rng.gen_range(0..node_count)).collect(),
            SequenceShape::Star => vec![rng.gen_range(0..node_count); length],
            SequenceShape::Path => {
                let start = rng.gen_range(0..node_count);
                (0..length).map(|step| (start + step) % node_count).collect()
            }
            SequenceShape::FewHubs => {
                let hubs: Vec<usize> = (0..rng.gen_range(1..=3))
                    .map(|_| rng.gen_range(0..node_count))
                    .collect();
                (0..length)
                    .map(|_| hubs[rng.gen_range(0..hubs.len())])
                    .collect()
            }
            SequenceShape::Extremes => (0..length)
                .map(|_| if rng.gen_bool(0.5) { 0 } else { node_count - 1 })
                .collect(),
        }
    };
    SequenceFixture {
        node_count,
        sequence,
        shape,
    }
}
