//! Script property checks
//!
//! `Scripts.txt` lines map a codepoint range to a Script value; long ranges
//! are sampled rather than walked in full. `ScriptAnalyzerTest.txt` lines
//! pair a codepoint sequence with the expected per-codepoint scripts.

use blitz_unicode::{Script, ScriptAnalyzer, UnicodeDataProvider, MAX_CODEPOINT};

use crate::config::RunnerConfig;
use crate::parse;
use crate::summary::{evaluate, ConformanceSummary, Outcome};

/// Ranges up to this size are checked at every codepoint.
const FULL_CHECK_SIZE: u32 = 10;

/// Codepoints checked for the inclusive range `start..=end`: every point of
/// a short range, otherwise both ends, their neighbours, the middle and
/// four evenly spaced points.
pub fn sample_points(start: u32, end: u32) -> Vec<u32> {
    let size = end - start + 1;
    if size <= FULL_CHECK_SIZE {
        return (start..=end).collect();
    }
    let step = size / 5;
    let mut points = vec![start, end, start + 1, end - 1, start + size / 2];
    points.extend((1..5).map(|i| start + i * step));
    points
}

fn split_fields(input: &str) -> Result<(&str, &str), String> {
    let (left, right) = input
        .split_once(';')
        .ok_or_else(|| "missing ';'".to_string())?;
    let (left, right) = (left.trim(), right.trim());
    if left.is_empty() || right.is_empty() {
        return Err("empty field".to_string());
    }
    Ok((left, right))
}

fn parse_script(name: &str) -> Result<Script, String> {
    Script::from_name(name).ok_or_else(|| format!("unknown script '{name}'"))
}

fn parse_range(field: &str) -> Result<(u32, u32), String> {
    let hex = |token: &str| {
        u32::from_str_radix(token.trim(), 16).map_err(|_| format!("invalid range '{field}'"))
    };
    let (start, end) = match field.split_once("..") {
        Some((start, end)) => (hex(start)?, hex(end)?),
        None => {
            let cp = hex(field)?;
            (cp, cp)
        }
    };
    if end < start || end > MAX_CODEPOINT {
        return Err(format!("invalid range '{field}'"));
    }
    Ok((start, end))
}

struct DataCase<'t> {
    line: usize,
    input: &'t str,
    codepoint: u32,
    expected: Script,
}

/// Check the Script property table against `Scripts.txt`.
pub fn run_data(data: &UnicodeDataProvider, text: &str, config: &RunnerConfig) -> ConformanceSummary {
    let mut summary = ConformanceSummary::new("Scripts");
    let mut cases = Vec::new();

    for (line, input) in parse::lines(text) {
        let parsed = split_fields(input).and_then(|(range, name)| {
            let expected = parse_script(name)?;
            Ok((parse_range(range)?, expected))
        });
        match parsed {
            Ok(((start, end), expected)) => {
                cases.extend(sample_points(start, end).into_iter().map(|codepoint| DataCase {
                    line,
                    input,
                    codepoint,
                    expected,
                }))
            }
            Err(reason) => summary.skip(line, &reason),
        }
    }

    let outcomes = evaluate(&cases, config, || (), |_, case| {
        let actual = data.script(case.codepoint);
        if actual == case.expected {
            Outcome::Pass
        } else {
            Outcome::fail(
                case.line,
                case.input,
                format!(
                    "{}: expected {}, got {actual}",
                    parse::format_codepoints(&[case.codepoint]),
                    case.expected
                ),
            )
        }
    });
    summary.record(outcomes, config.max_failures_to_log);
    summary
}

struct AnalyzerCase<'t> {
    line: usize,
    input: &'t str,
    codepoints: Vec<u32>,
    expected: Vec<Script>,
}

fn parse_analyzer_case(line: usize, input: &str) -> Result<AnalyzerCase<'_>, String> {
    let (codepoints, scripts) = split_fields(input)?;
    let codepoints = parse::hex_codepoints(codepoints)?;
    let expected = scripts
        .split_whitespace()
        .map(parse_script)
        .collect::<Result<Vec<_>, _>>()?;
    if codepoints.len() != expected.len() {
        return Err(format!(
            "{} codepoints for {} scripts",
            codepoints.len(),
            expected.len()
        ));
    }
    Ok(AnalyzerCase {
        line,
        input,
        codepoints,
        expected,
    })
}

fn check_analyzer(
    analyzer: &ScriptAnalyzer<'_>,
    actual: &mut Vec<Script>,
    case: &AnalyzerCase<'_>,
) -> Outcome {
    actual.clear();
    actual.resize(case.codepoints.len(), Script::Unknown);
    if let Err(err) = analyzer.analyze(&case.codepoints, actual) {
        return Outcome::fail(case.line, case.input, err.to_string());
    }
    let mismatch = case
        .expected
        .iter()
        .zip(actual.iter())
        .position(|(want, got)| want != got);
    match mismatch {
        None => Outcome::Pass,
        Some(i) => Outcome::fail(
            case.line,
            case.input,
            format!(
                "index {i} ({}): expected {}, got {}",
                parse::format_codepoints(&case.codepoints[i..=i]),
                case.expected[i],
                actual[i]
            ),
        ),
    }
}

/// Check [`ScriptAnalyzer`] against `ScriptAnalyzerTest.txt`.
pub fn run_analyzer(
    data: &UnicodeDataProvider,
    text: &str,
    config: &RunnerConfig,
) -> ConformanceSummary {
    let mut summary = ConformanceSummary::new("ScriptAnalyzerTest");
    let mut cases = Vec::new();
    for (line, input) in parse::lines(text) {
        match parse_analyzer_case(line, input) {
            Ok(case) => cases.push(case),
            Err(reason) => summary.skip(line, &reason),
        }
    }

    let analyzer = ScriptAnalyzer::new(data);
    let outcomes = evaluate(&cases, config, Vec::<Script>::new, |actual, case| {
        check_analyzer(&analyzer, actual, case)
    });
    summary.record(outcomes, config.max_failures_to_log);
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::provider;

    const SCRIPTS: &str = "\
# Scripts excerpt
0041..005A    ; Latin # L&  [26] LATIN CAPITAL LETTER A..LATIN CAPITAL LETTER Z
05D0..05EA    ; Hebrew
0020          ; Common
0300..036F    ; Inherited
0100          ; Not_A_Script
XYZ           ; Latin
0391..03A1    ; Hebrew
";

    const ANALYZER: &str = "\
# ScriptAnalyzerTest excerpt
0041 05D0 0020 ; Latin Hebrew Common
0041 0301 ; Latin Inherited
0041 0301 ; Latin Latin
0041 ; Latin Hebrew
00ZZ ; Latin
";

    #[test]
    fn samples_long_ranges() {
        assert_eq!(sample_points(0x30, 0x39).len(), 10);
        assert_eq!(
            sample_points(0x41, 0x5A),
            vec![0x41, 0x5A, 0x42, 0x59, 0x4E, 0x46, 0x4B, 0x50, 0x55]
        );
        assert_eq!(sample_points(0x20, 0x20), vec![0x20]);
    }

    #[test]
    fn parses_ranges() {
        assert_eq!(parse_range("0041..005A"), Ok((0x41, 0x5A)));
        assert_eq!(parse_range("0020"), Ok((0x20, 0x20)));
        assert!(parse_range("005A..0041").is_err());
        assert!(parse_range("XYZ").is_err());
        assert!(parse_range("0..FFFFFFFF").is_err());
        assert!(parse_range("110000").is_err());
        assert_eq!(parse_range("10FFF0..10FFFF"), Ok((0x10FFF0, 0x10FFFF)));
    }

    #[test]
    fn out_of_range_lines_are_skipped() {
        let text = "0..FFFFFFFF ; Latin\n0041 ; Latin\n";
        for config in [RunnerConfig::default(), RunnerConfig::sequential()] {
            let summary = run_data(provider(), text, &config);
            assert_eq!(summary.skipped, 1);
            assert_eq!(summary.total, 1);
            assert_eq!(summary.passed, 1);
        }
    }

    #[test]
    fn data_suite_counts() {
        for config in [RunnerConfig::default(), RunnerConfig::sequential()] {
            let summary = run_data(provider(), SCRIPTS, &config);
            assert_eq!(summary.total, 37);
            assert_eq!(summary.passed, 28);
            assert_eq!(summary.failed, 9);
            assert_eq!(summary.skipped, 2);
            assert_eq!(summary.failures[0].line, 8);
            assert_eq!(summary.failures[0].message, "U+0391: expected Hebrew, got Greek");
        }
    }

    #[test]
    fn failure_log_is_capped() {
        let config = RunnerConfig {
            max_failures_to_log: 5,
            ..RunnerConfig::default()
        };
        let summary = run_data(provider(), SCRIPTS, &config);
        assert_eq!(summary.failed, 9);
        assert_eq!(summary.failures.len(), 5);
    }

    #[test]
    fn analyzer_suite_counts() {
        for config in [RunnerConfig::default(), RunnerConfig::sequential()] {
            let summary = run_analyzer(provider(), ANALYZER, &config);
            assert_eq!(summary.total, 3);
            assert_eq!(summary.passed, 2);
            assert_eq!(summary.failed, 1);
            assert_eq!(summary.skipped, 2);
            assert_eq!(
                summary.failures[0].message,
                "index 1 (U+0301): expected Latin, got Inherited"
            );
        }
    }
}
