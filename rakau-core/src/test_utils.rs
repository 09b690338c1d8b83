//! Shared test utilities for `rakau-core`.

use proptest::test_runner::Config as ProptestConfig;
use rakau_test_support::ci::property_test_profile::ProptestRunProfile;

/// Builds a standard proptest configuration from the shared run profile.
///
/// Keeps every property suite on the same `PROPTEST_CASES` and
/// `RAKAU_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Counts how often `vertex` appears in `sequence`.
#[must_use]
pub(crate) fn occurrences(sequence: &[usize], vertex: usize) -> usize {
    sequence.iter().filter(|&&symbol| symbol == vertex).count()
}
