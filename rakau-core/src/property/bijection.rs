//! Encoding inverts decoding, in both directions.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{TreeEdge, canonical_signature, decode_tree, encode_tree};

use super::types::SequenceFixture;

/// Checks `encode(decode(s)) == s` and `decode(encode(t)) == t`.
pub(super) fn run_bijection_property(fixture: &SequenceFixture) -> TestCaseResult {
    let node_count = fixture.node_count;
    let tree = decode_tree(node_count, &fixture.sequence)
        .map_err(|err| TestCaseError::fail(format!("decode failed: {err}")))?;

    let encoded = encode_tree(node_count, &tree)
        .map_err(|err| TestCaseError::fail(format!("encode failed: {err}")))?;
    if encoded != fixture.sequence {
        return Err(TestCaseError::fail(format!(
            "round trip changed the sequence (shape={:?}): {:?} != {encoded:?}",
            fixture.shape, fixture.sequence
        )));
    }

    let reoriented: Vec<TreeEdge> = tree
        .iter()
        .rev()
        .map(|edge| TreeEdge::new(edge.target(), edge.source()))
        .collect();
    let reencoded = encode_tree(node_count, &reoriented)
        .map_err(|err| TestCaseError::fail(format!("encode failed: {err}")))?;
    let redecoded = decode_tree(node_count, &reencoded)
        .map_err(|err| TestCaseError::fail(format!("decode failed: {err}")))?;
    if canonical_signature(&redecoded) != canonical_signature(&tree) {
        return Err(TestCaseError::fail(
            "decode(encode(t)) produced a different tree",
        ));
    }
    Ok(())
}
