//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite in the workspace reads its case count and fork mode
//! through [`ProptestRunProfile`], so one pair of environment variables tunes
//! them all.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const RAKAU_PBT_FORK_ENV_KEY: &str = "RAKAU_PBT_FORK";

/// Reasons an environment override is ignored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OverrideError {
    /// The case count was not an unsigned integer.
    #[error("parse error: {reason}")]
    NotANumber {
        /// Parser message.
        reason: String,
    },
    /// A case count of zero would skip the suite silently.
    #[error("cases must be > 0")]
    ZeroCases,
    /// The fork flag was not a recognised boolean spelling.
    #[error("expected one of: true/false/1/0/yes/no/on/off")]
    NotABool,
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the environment, falling back to the supplied
    /// defaults for unset or invalid variables.
    ///
    /// # Examples
    ///
    /// ```
    /// use rakau_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: override_or(PROPTEST_CASES_ENV_KEY, default_cases, parse_cases),
            fork: override_or(RAKAU_PBT_FORK_ENV_KEY, default_fork, parse_flag),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn override_or<T: Copy>(
    key: &'static str,
    default: T,
    parse: fn(&str) -> Result<T, OverrideError>,
) -> T {
    let Ok(raw) = env::var(key) else {
        return default;
    };
    parse(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

/// Parses a positive case count.
///
/// # Errors
/// Returns [`OverrideError::NotANumber`] or [`OverrideError::ZeroCases`].
pub fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err(OverrideError::ZeroCases),
        Ok(cases) => Ok(cases),
        Err(error) => Err(OverrideError::NotANumber {
            reason: error.to_string(),
        }),
    }
}

/// Parses a boolean flag in any of the common spellings.
///
/// # Errors
/// Returns [`OverrideError::NotABool`] for anything else.
pub fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::NotABool),
    }
}
