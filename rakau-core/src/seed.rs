//! Seed derivation for batch generation.

/// SplitMix64 increment (the 64-bit golden ratio) used to space per-tree
/// seeds.
const TREE_SEED_SPACING: u64 = 0x9E37_79B9_7F4A_7C15;
const SPLITMIX_MULT_A: u64 = 0xBF58_476D_1CE4_E5B9;
const SPLITMIX_MULT_B: u64 = 0x94D0_49BB_1331_11EB;

/// Derives the seed of tree `index` within a batch seeded by `base_seed`.
///
/// The result depends only on the two inputs, so a batch is reproducible no
/// matter how its trees are scheduled across workers.
#[inline]
#[must_use]
pub fn derive_tree_seed(base_seed: u64, index: u64) -> u64 {
    splitmix64(base_seed ^ index.wrapping_add(1).wrapping_mul(TREE_SEED_SPACING))
}

#[inline]
const fn splitmix64(mut state: u64) -> u64 {
    state = state.wrapping_add(TREE_SEED_SPACING);
    state = (state ^ (state >> 30)).wrapping_mul(SPLITMIX_MULT_A);
    state = (state ^ (state >> 27)).wrapping_mul(SPLITMIX_MULT_B);
    state ^ (state >> 31)
}
