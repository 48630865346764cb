//! GraphemeBreakTest.txt: `÷ 0041 × 0301 ÷` lines

use blitz_unicode::{GraphemeBreaker, UnicodeDataProvider};

use crate::config::RunnerConfig;
use crate::parse;
use crate::summary::{evaluate, ConformanceSummary, Outcome};

struct Case<'t> {
    line: usize,
    input: &'t str,
    codepoints: Vec<u32>,
    breaks: Vec<bool>,
}

fn check(breaker: &GraphemeBreaker<'_>, actual: &mut Vec<bool>, case: &Case<'_>) -> Outcome {
    actual.clear();
    actual.resize(case.codepoints.len() + 1, false);
    if let Err(err) = breaker.break_opportunities_into(&case.codepoints, actual) {
        return Outcome::fail(case.line, case.input, err.to_string());
    }
    match parse::break_mismatch(&case.breaks, actual) {
        None => Outcome::Pass,
        Some(message) => Outcome::fail(case.line, case.input, message),
    }
}

pub fn run(data: &UnicodeDataProvider, text: &str, config: &RunnerConfig) -> ConformanceSummary {
    let mut summary = ConformanceSummary::new("GraphemeBreakTest");
    let mut cases = Vec::new();
    for (line, input) in parse::lines(text) {
        match parse::break_markers(input) {
            Ok((codepoints, breaks)) => cases.push(Case {
                line,
                input,
                codepoints,
                breaks,
            }),
            Err(reason) => summary.skip(line, &reason),
        }
    }

    let breaker = GraphemeBreaker::new(data);
    let outcomes = evaluate(&cases, config, Vec::<bool>::new, |actual, case| {
        check(&breaker, actual, case)
    });
    summary.record(outcomes, config.max_failures_to_log);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::provider;

    const EXCERPT: &str = "\
# GraphemeBreakTest excerpt
÷ 0041 × 0301 ÷\t#  ÷ [0.2] LATIN CAPITAL LETTER A (Other) × [9.0] COMBINING ACUTE ACCENT (Extend) ÷ [0.3]
÷ 000D × 000A ÷
÷ 0041 ÷ 0042 ÷
÷ 0041 × 0042 ÷
÷ 0041 0042 ÷
";

    #[test]
    fn counts_passes_failures_and_skips() {
        for config in [RunnerConfig::default(), RunnerConfig::sequential()] {
            let summary = run(provider(), EXCERPT, &config);
            assert_eq!(summary.total, 4);
            assert_eq!(summary.passed, 3);
            assert_eq!(summary.failed, 1);
            assert_eq!(summary.skipped, 1);
            assert_eq!(summary.failures[0].line, 5);
            assert_eq!(
                summary.failures[0].message,
                "boundary 1: break, expected no break"
            );
        }
    }
}
