//! Conformance runner for `blitz-unicode`
//!
//! Each suite reads one of the Unicode conformance files, evaluates every
//! well-formed case against the algorithms and folds the results into a
//! [`ConformanceSummary`]. Malformed lines are counted as skipped and never
//! abort a run.

pub mod bidi_character;
pub mod config;
pub mod error;
pub mod grapheme;
pub mod line_break;
pub mod scripts;
pub mod summary;

mod parse;

#[cfg(test)]
pub(crate) mod test_data;

use blitz_unicode::UnicodeDataProvider;
use serde::{Deserialize, Serialize};

pub use config::RunnerConfig;
pub use error::{RunnerError, RunnerResult};
pub use summary::{ConformanceSummary, Failure, Outcome};

/// The conformance files the runner understands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Suite {
    BidiCharacter,
    Bidi,
    LineBreak,
    Grapheme,
    Scripts,
    ScriptAnalyzer,
}

impl Suite {
    pub const ALL: [Suite; 6] = [
        Suite::BidiCharacter,
        Suite::Bidi,
        Suite::LineBreak,
        Suite::Grapheme,
        Suite::Scripts,
        Suite::ScriptAnalyzer,
    ];

    /// File name of the suite inside a test directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Suite::BidiCharacter => "BidiCharacterTest.txt",
            Suite::Bidi => "BidiTest.txt",
            Suite::LineBreak => "LineBreakTest.txt",
            Suite::Grapheme => "GraphemeBreakTest.txt",
            Suite::Scripts => "Scripts.txt",
            Suite::ScriptAnalyzer => "ScriptAnalyzerTest.txt",
        }
    }
}

/// Run one suite over the contents of its test file.
pub fn run_suite(
    suite: Suite,
    data: &UnicodeDataProvider,
    text: &str,
    config: &RunnerConfig,
) -> ConformanceSummary {
    log::info!("Running {suite:?} ({})", suite.file_name());
    let summary = match suite {
        Suite::BidiCharacter => bidi_character::run(data, text, config),
        Suite::Bidi => bidi_test::run(data, text, config),
        Suite::LineBreak => line_break::run(data, text, config),
        Suite::Grapheme => grapheme::run(data, text, config),
        Suite::Scripts => scripts::run_data(data, text, config),
        Suite::ScriptAnalyzer => scripts::run_analyzer(data, text, config),
    };
    log::info!(
        "{}: {}/{} passed, {} failed, {} skipped",
        summary.suite,
        summary.passed,
        summary.total,
        summary.failed,
        summary.skipped
    );
    summary
}
