//! LineBreakTest.txt: `× 0061 × 0020 ÷ 0062 ÷` lines

use blitz_unicode::{LineBreakAlgorithm, LineBreakType, UnicodeDataProvider};

use crate::config::RunnerConfig;
use crate::parse;
use crate::summary::{evaluate, ConformanceSummary, Outcome};

struct Case<'t> {
    line: usize,
    input: &'t str,
    codepoints: Vec<u32>,
    breaks: Vec<bool>,
}

#[derive(Default)]
struct Buffers {
    types: Vec<LineBreakType>,
    breaks: Vec<bool>,
}

fn check(algorithm: &LineBreakAlgorithm<'_>, buffers: &mut Buffers, case: &Case<'_>) -> Outcome {
    let Buffers { types, breaks } = buffers;
    types.clear();
    types.resize(case.codepoints.len() + 1, LineBreakType::None);
    if let Err(err) = algorithm.break_opportunities_into(&case.codepoints, types) {
        return Outcome::fail(case.line, case.input, err.to_string());
    }
    breaks.clear();
    breaks.extend(types.iter().map(|kind| kind.is_break()));

    match parse::break_mismatch(&case.breaks, breaks) {
        None => Outcome::Pass,
        Some(message) => Outcome::fail(case.line, case.input, message),
    }
}

pub fn run(data: &UnicodeDataProvider, text: &str, config: &RunnerConfig) -> ConformanceSummary {
    let mut summary = ConformanceSummary::new("LineBreakTest");
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

    let algorithm = LineBreakAlgorithm::new(data);
    let outcomes = evaluate(&cases, config, Buffers::default, |buffers, case| {
        check(&algorithm, buffers, case)
    });
    summary.record(outcomes, config.max_failures_to_log);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::provider;

    const EXCERPT: &str = "\
# LineBreakTest excerpt
× 0061 × 0062 ÷\t#  × [0.3] LATIN SMALL LETTER A (AL) × [28.0] LATIN SMALL LETTER B (AL) ÷ [0.3]
× 0061 × 0020 ÷ 0062 ÷
× 0031 × 002C × 0032 ÷
× 4E00 × 4E01 ÷
× 0061 0062 ÷
× ZZZZ ÷
";

    #[test]
    fn counts_passes_failures_and_skips() {
        for config in [RunnerConfig::default(), RunnerConfig::sequential()] {
            let summary = run(provider(), EXCERPT, &config);
            assert_eq!(summary.total, 4);
            assert_eq!(summary.passed, 3);
            assert_eq!(summary.failed, 1);
            assert_eq!(summary.skipped, 2);
            assert_eq!(summary.failures[0].line, 5);
            assert_eq!(
                summary.failures[0].message,
                "boundary 1: break, expected no break"
            );
        }
    }
}
