//! Shared parsing for the conformance file formats

/// Line content with the `#` comment and surrounding whitespace removed,
/// or `None` when nothing remains.
pub(crate) fn content(line: &str) -> Option<&str> {
    let body = line.split('#').next().unwrap_or("").trim();
    (!body.is_empty()).then_some(body)
}

/// Enumerate the non-empty lines of `text` with 1-based numbers.
pub(crate) fn lines(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| content(raw).map(|body| (idx + 1, body)))
}

/// Space-separated hex codepoints.
pub(crate) fn hex_codepoints(field: &str) -> Result<Vec<u32>, String> {
    field
        .split_whitespace()
        .map(|token| {
            u32::from_str_radix(token, 16).map_err(|_| format!("invalid hex codepoint '{token}'"))
        })
        .collect()
}

/// Expected levels; `x` marks a character removed by X9.
pub(crate) fn levels(field: &str) -> Result<Vec<Option<u8>>, String> {
    field
        .split_whitespace()
        .map(|token| {
            if token.eq_ignore_ascii_case("x") {
                Ok(None)
            } else {
                token
                    .parse()
                    .map(Some)
                    .map_err(|_| format!("invalid level '{token}'"))
            }
        })
        .collect()
}

/// Expected visual order as logical indices.
pub(crate) fn indices(field: &str) -> Result<Vec<usize>, String> {
    field
        .split_whitespace()
        .filter(|token| !token.eq_ignore_ascii_case("x"))
        .map(|token| {
            token
                .parse()
                .map_err(|_| format!("invalid index '{token}'"))
        })
        .collect()
}

/// A `÷ 0041 × 0301 ÷` line: codepoints and whether each of the `n + 1`
/// boundaries is a break.
pub(crate) fn break_markers(line: &str) -> Result<(Vec<u32>, Vec<bool>), String> {
    let mut codepoints = Vec::new();
    let mut breaks = Vec::new();
    let mut expect_marker = true;

    for token in line.split_whitespace() {
        let marker = match token {
            "÷" => Some(true),
            "×" => Some(false),
            _ => None,
        };
        match (marker, expect_marker) {
            (Some(is_break), true) => breaks.push(is_break),
            (Some(_), false) => return Err(format!("unexpected marker '{token}'")),
            (None, true) => return Err(format!("expected a break marker, got '{token}'")),
            (None, false) => codepoints.push(
                u32::from_str_radix(token, 16)
                    .map_err(|_| format!("invalid hex codepoint '{token}'"))?,
            ),
        }
        expect_marker = !expect_marker;
    }

    if codepoints.is_empty() {
        return Err("no codepoints".to_string());
    }
    if breaks.len() != codepoints.len() + 1 {
        return Err(format!(
            "{} markers for {} codepoints",
            breaks.len(),
            codepoints.len()
        ));
    }
    Ok((codepoints, breaks))
}

/// Describe the first boundary where `actual` disagrees with `expected`.
pub(crate) fn break_mismatch(expected: &[bool], actual: &[bool]) -> Option<String> {
    let describe = |is_break: bool| if is_break { "break" } else { "no break" };
    if expected.len() != actual.len() {
        return Some(format!(
            "{} boundaries, expected {}",
            actual.len(),
            expected.len()
        ));
    }
    expected
        .iter()
        .zip(actual)
        .position(|(want, got)| want != got)
        .map(|pos| {
            format!(
                "boundary {pos}: {}, expected {}",
                describe(actual[pos]),
                describe(expected[pos])
            )
        })
}

pub(crate) fn format_codepoints(codepoints: &[u32]) -> String {
    codepoints
        .iter()
        .map(|cp| format!("U+{cp:04X}"))
        .collect::<Vec<_>>()
        .join(" ")
}
