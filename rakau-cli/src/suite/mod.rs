//! Tree-query test suite generation.
//!
//! A suite is built in three stages: [`CaseGenerator`] draws random trees and
//! queries, an [`Oracle`] computes the expected answer for each rendered
//! input, and a [`CaseSink`] persists the resulting [`TestCase`] records.

mod case;
mod oracle;
mod sink;

use serde::{Deserialize, Serialize};

pub use self::{
    case::{CaseError, CaseGenerator, CaseShape, Query, Tier, TreeQueryCase},
    oracle::{EmptyOracle, Oracle, OracleError, ProcessOracle},
    sink::{CaseSink, JsonFileSink, SinkError},
};

/// One generated input together with the oracle's answer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCase {
    /// Rendered problem input.
    pub input: String,
    /// Trimmed oracle output; empty when no oracle was configured.
    pub output: String,
}
