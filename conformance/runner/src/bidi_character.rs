//! BidiCharacterTest.txt: explicit codepoints, one paragraph direction per line
//!
//! Fields: codepoints; direction (0 LTR, 1 RTL, 2 Auto); resolved paragraph
//! level; resolved levels (`x` for removed characters); visual order.

use blitz_unicode::{BidiEngine, BidiScratch, Direction, UnicodeDataProvider};

use crate::config::RunnerConfig;
use crate::parse;
use crate::summary::{evaluate, ConformanceSummary, Outcome};

struct Case<'t> {
    line: usize,
    input: &'t str,
    codepoints: Vec<u32>,
    direction: Direction,
    paragraph_level: u8,
    levels: Vec<Option<u8>>,
    reorder: Vec<usize>,
}

fn parse_case(line: usize, input: &str) -> Result<Case<'_>, String> {
    let fields: Vec<&str> = input.split(';').map(str::trim).collect();
    if fields.len() < 5 {
        return Err(format!("expected 5 fields, found {}", fields.len()));
    }
    let codepoints = parse::hex_codepoints(fields[0])?;
    let direction = fields[1]
        .parse::<i32>()
        .map_err(|_| format!("invalid direction '{}'", fields[1]))
        .and_then(|code| Direction::try_from(code).map_err(|err| err.to_string()))?;
    let paragraph_level = fields[2]
        .parse()
        .map_err(|_| format!("invalid paragraph level '{}'", fields[2]))?;
    let levels = parse::levels(fields[3])?;
    if levels.len() != codepoints.len() {
        return Err(format!(
            "{} levels for {} codepoints",
            levels.len(),
            codepoints.len()
        ));
    }
    Ok(Case {
        line,
        input,
        codepoints,
        direction,
        paragraph_level,
        levels,
        reorder: parse::indices(fields[4])?,
    })
}

/// Compare resolved levels, ignoring positions expected as `x`.
pub(crate) fn check_levels(expected: &[Option<u8>], actual: &[u8]) -> Result<(), String> {
    if expected.len() != actual.len() {
        return Err(format!(
            "levels length {}, expected {}",
            actual.len(),
            expected.len()
        ));
    }
    for (i, (want, &got)) in expected.iter().zip(actual).enumerate() {
        if let Some(want) = *want {
            if want != got {
                return Err(format!("level at {i} is {got}, expected {want}"));
            }
        }
    }
    Ok(())
}

/// Compare the visual order of the characters not expected as `x`.
///
/// Removed characters are dropped before reordering, so the line is
/// reordered from the levels of the visible characters alone.
pub(crate) fn check_reorder(
    expected_levels: &[Option<u8>],
    expected_order: &[usize],
    actual_levels: &[u8],
) -> Result<(), String> {
    let visible: Vec<usize> = expected_levels
        .iter()
        .enumerate()
        .filter_map(|(i, level)| level.map(|_| i))
        .collect();
    if visible.len() != expected_order.len() {
        return Err(format!(
            "{} visible characters, expected order has {}",
            visible.len(),
            expected_order.len()
        ));
    }
    if visible.is_empty() {
        return Ok(());
    }

    let filtered: Vec<u8> = visible.iter().map(|&i| actual_levels[i]).collect();
    let mut order = vec![0; filtered.len()];
    BidiEngine::reorder_line(&filtered, 0, filtered.len() - 1, &mut order)
        .map_err(|err| err.to_string())?;

    for (visual, (&logical, &want)) in order.iter().zip(expected_order).enumerate() {
        let got = visible[logical];
        if got != want {
            return Err(format!(
                "visual position {visual} shows {got}, expected {want}"
            ));
        }
    }
    Ok(())
}

fn check(engine: &BidiEngine<'_>, scratch: &mut BidiScratch, case: &Case<'_>) -> Outcome {
    let result = engine.process_with(&case.codepoints, case.direction, scratch);
    if result.paragraph_level != case.paragraph_level {
        return Outcome::fail(
            case.line,
            case.input,
            format!(
                "paragraph level {}, expected {}",
                result.paragraph_level, case.paragraph_level
            ),
        );
    }
    let verdict = check_levels(&case.levels, &result.levels)
        .and_then(|()| check_reorder(&case.levels, &case.reorder, &result.levels));
    match verdict {
        Ok(()) => Outcome::Pass,
        Err(message) => Outcome::fail(case.line, case.input, message),
    }
}

pub fn run(data: &UnicodeDataProvider, text: &str, config: &RunnerConfig) -> ConformanceSummary {
    let mut summary = ConformanceSummary::new("BidiCharacterTest");
    let mut cases = Vec::new();
    for (line, input) in parse::lines(text) {
        match parse_case(line, input) {
            Ok(case) => cases.push(case),
            Err(reason) => summary.skip(line, &reason),
        }
    }

    let engine = BidiEngine::new(data);
    let outcomes = evaluate(&cases, config, BidiScratch::new, |scratch, case| {
        check(&engine, scratch, case)
    });
    summary.record(outcomes, config.max_failures_to_log);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::provider;

    const EXCERPT: &str = "\
# BidiCharacterTest excerpt
0041 05D0 05D1 0042;0;0;0 1 1 0;0 2 1 3
05D0 0020 0031 0032;1;1;1 1 2 2;2 3 1 0
0041 202B 0041 202C;0;0;0 x 2 x;0 2
0041;1;1;1;0
0041;0;0
00ZZ;0;0;0;0
0041;7;0;0;0
";

    #[test]
    fn counts_passes_failures_and_skips() {
        for config in [RunnerConfig::default(), RunnerConfig::sequential()] {
            let summary = run(provider(), EXCERPT, &config);
            assert_eq!(summary.total, 4);
            assert_eq!(summary.passed, 3);
            assert_eq!(summary.failed, 1);
            assert_eq!(summary.skipped, 3);
            assert_eq!(summary.failures[0].line, 5);
            assert_eq!(summary.failures[0].message, "level at 0 is 2, expected 1");
        }
    }

    #[test]
    fn reorder_ignores_removed_characters() {
        let expected = [Some(0), None, Some(1), Some(1)];
        assert_eq!(check_reorder(&expected, &[0, 3, 2], &[0, 0, 1, 1]), Ok(()));
        assert!(check_reorder(&expected, &[0, 2, 3], &[0, 0, 1, 1]).is_err());
        assert!(check_reorder(&expected, &[0, 2], &[0, 0, 1, 1]).is_err());
    }
}
