//! Property-test run profile parsing for CI and local overrides.
//!
//! Every property suite reads the same three variables so a CI job can scale
//! all of them at once:
//!
//! - `PROGTEST_CASES`: cases per property (positive integer).
//! - `CONCORD_PBT_FORK`: run cases in forked subprocesses (boolean).
//! - `CONCORD_PBT_REPETITIONS`: re-runs per case for scheduling-stability
//!   properties (positive integer).
//!
//! Invalid values are logged and replaced by the suite's default.

use std::env;

/// Environment variable controlling proptest case counts.
pub const PROGTEST_CASES_ENV_KEY: &str = "PROGTEST_CASES";
/// Environment variable controlling proptest process forking.
pub const CONCORD_PBT_FORK_ENV_KEY: &str = "CONCORD_PBT_FORK";
/// Environment variable controlling repeated runs per generated case.
pub const CONCORD_PBT_REPETITIONS_ENV_KEY: &str = "CONCORD_PBT_REPETITIONS";

/// Repetitions used when a suite does not pick its own default.
pub const DEFAULT_REPETITIONS: usize = 4;

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
    repetitions: usize,
}

impl ProptestRunProfile {
    /// Loads a profile from the environment with the provided defaults.
    ///
    /// # Examples
    ///
    /// ```
    /// use concord_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// assert!(profile.repetitions() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Builds a profile from an arbitrary variable lookup.
    ///
    /// # Examples
    ///
    /// ```
    /// use concord_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::from_lookup(64, false, |key| {
    ///     (key == "PROGTEST_CASES").then(|| "8".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 8);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let cases = resolve(&lookup, PROGTEST_CASES_ENV_KEY, default_cases, parse_positive);
        let fork = resolve(&lookup, CONCORD_PBT_FORK_ENV_KEY, default_fork, parse_bool);
        let repetitions = resolve(
            &lookup,
            CONCORD_PBT_REPETITIONS_ENV_KEY,
            DEFAULT_REPETITIONS,
            parse_positive,
        );
        Self {
            cases,
            fork,
            repetitions,
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }

    /// Number of times a scheduling-stability property re-runs each case.
    #[must_use]
    pub fn repetitions(&self) -> usize {
        self.repetitions
    }
}

fn resolve<T, F>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    parser: F,
) -> T
where
    F: Fn(&str) -> Result<T, String>,
{
    let Some(raw) = lookup(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason = %reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_positive<T>(raw: &str) -> Result<T, String>
where
    T: std::str::FromStr + Default + PartialEq,
    T::Err: std::fmt::Display,
{
    let parsed = raw
        .trim()
        .parse::<T>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == T::default() {
        return Err("value must be > 0".to_owned());
    }
    Ok(parsed)
}

fn parse_bool(raw: &str) -> Result<bool, String> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off".to_owned()),
    }
}
