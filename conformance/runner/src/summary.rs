//! Per-suite results

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::RunnerConfig;

/// One failed test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Failure {
    /// 1-based line in the test file.
    pub line: usize,
    pub input: String,
    pub message: String,
}

/// Result of checking one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Pass,
    Fail(Failure),
}

impl Outcome {
    pub fn fail(line: usize, input: &str, message: impl Into<String>) -> Self {
        Outcome::Fail(Failure {
            line,
            input: input.to_string(),
            message: message.into(),
        })
    }
}

/// Counts for one conformance suite.
///
/// Lines that cannot be parsed are `skipped`; they never count as
/// evaluated. Every evaluated case is either `passed` or `failed`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConformanceSummary {
    pub suite: String,
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub skipped: usize,
    /// The first failures, up to `max_failures_to_log`.
    pub failures: Vec<Failure>,
}

impl ConformanceSummary {
    pub fn new(suite: impl Into<String>) -> Self {
        Self {
            suite: suite.into(),
            ..Self::default()
        }
    }

    pub fn skip(&mut self, line: usize, reason: &str) {
        log::debug!("{}:{line}: skipped ({reason})", self.suite);
        self.skipped += 1;
    }

    /// Fold outcomes in test-file order.
    pub fn record(&mut self, outcomes: impl IntoIterator<Item = Outcome>, max_failures: usize) {
        for outcome in outcomes {
            self.total += 1;
            match outcome {
                Outcome::Pass => self.passed += 1,
                Outcome::Fail(failure) => {
                    self.failed += 1;
                    if self.failures.len() < max_failures {
                        self.failures.push(failure);
                    }
                }
            }
        }
    }

    pub fn is_success(&self) -> bool {
        self.failed == 0
    }

    pub fn pass_rate(&self) -> f64 {
        if self.total == 0 {
            1.0
        } else {
            self.passed as f64 / self.total as f64
        }
    }
}

/// Check `cases` with per-worker state from `init`, on the rayon pool when
/// the configuration asks for it. Outcomes keep the order of `cases`.
pub(crate) fn evaluate<C, S, I, F>(
    cases: &[C],
    config: &RunnerConfig,
    init: I,
    check: F,
) -> Vec<Outcome>
where
    C: Sync,
    S: Send,
    I: Fn() -> S + Sync + Send,
    F: Fn(&mut S, &C) -> Outcome + Sync + Send,
{
    if config.parallel {
        cases
            .par_iter()
            .map_init(&init, |state, case| check(state, case))
            .collect()
    } else {
        let mut state = init();
        cases.iter().map(|case| check(&mut state, case)).collect()
    }
}
