//! Neutral resolution: paired brackets (N0) and N1/N2

use arrayvec::ArrayVec;
use log::trace;

use crate::bidi::types::BidiClass::{self, *};
use crate::provider::{BracketType, UnicodeDataProvider};

/// Size of the BD16 opening bracket stack.
const MAX_BRACKET_DEPTH: usize = 63;

/// Brackets compared through their canonical equivalents.
fn canonical_bracket(cp: u32) -> u32 {
    match cp {
        0x2329 => 0x3008,
        0x232A => 0x3009,
        other => other,
    }
}

/// Direction a resolved type contributes to N0 and N1. Numbers count as R.
fn strong_direction(class: BidiClass) -> Option<BidiClass> {
    match class {
        L => Some(L),
        R | AL | EN | AN => Some(R),
        _ => None,
    }
}

/// BD16: locate bracket pairs in one sequence as `(opener, closer)` sequence
/// indices, sorted by opener.
fn locate_brackets(
    data: &UnicodeDataProvider,
    codepoints: &[u32],
    positions: &[usize],
    types: &[BidiClass],
    pairs: &mut Vec<(usize, usize)>,
) {
    pairs.clear();
    let mut openers: ArrayVec<(u32, usize), MAX_BRACKET_DEPTH> = ArrayVec::new();

    for (k, &pos) in positions.iter().enumerate() {
        if types[k] != ON {
            continue;
        }
        let cp = codepoints[pos];
        let Some(bracket) = data.bracket_pair(cp) else {
            continue;
        };
        match bracket.kind {
            BracketType::Open => {
                if openers
                    .try_push((canonical_bracket(bracket.paired), k))
                    .is_err()
                {
                    trace!("Bracket stack overflow at {pos}");
                    break;
                }
            }
            BracketType::Close => {
                let closer = canonical_bracket(cp);
                if let Some(depth) = openers.iter().rposition(|&(paired, _)| paired == closer) {
                    pairs.push((openers[depth].1, k));
                    openers.truncate(depth);
                }
            }
        }
    }

    pairs.sort_unstable();
}

/// N0 over one isolating run sequence.
///
/// `classes` are the original classes of the whole text; NSMs that
/// follow a resolved bracket take its direction.
#[allow(clippy::too_many_arguments)]
pub(crate) fn resolve_brackets(
    data: &UnicodeDataProvider,
    codepoints: &[u32],
    classes: &[BidiClass],
    positions: &[usize],
    types: &mut [BidiClass],
    level: u8,
    sos: BidiClass,
    pairs: &mut Vec<(usize, usize)>,
) {
    locate_brackets(data, codepoints, positions, types, pairs);
    if pairs.is_empty() {
        return;
    }

    let embedding = BidiClass::for_level(level);
    for &(open, close) in pairs.iter() {
        let mut opposite_inside = false;
        let mut resolved = None;
        for &t in &types[open + 1..close] {
            match strong_direction(t) {
                Some(dir) if dir == embedding => {
                    resolved = Some(embedding);
                    break;
                }
                Some(_) => opposite_inside = true,
                None => {}
            }
        }

        if resolved.is_none() && opposite_inside {
            let context = types[..open]
                .iter()
                .rev()
                .find_map(|&t| strong_direction(t))
                .unwrap_or(sos);
            resolved = Some(context);
        }

        let Some(dir) = resolved else {
            continue;
        };
        for bracket in [open, close] {
            types[bracket] = dir;
            for k in bracket + 1..types.len() {
                if classes[positions[k]] != NSM {
                    break;
                }
                types[k] = dir;
            }
        }
    }
}

/// N1 and N2: runs of neutrals take the direction of matching neighbours,
/// otherwise the embedding direction.
pub(crate) fn resolve_neutrals(types: &mut [BidiClass], level: u8, sos: BidiClass, eos: BidiClass) {
    let embedding = BidiClass::for_level(level);
    let len = types.len();
    let mut i = 0;
    while i < len {
        if !types[i].is_neutral_or_isolate() {
            i += 1;
            continue;
        }
        let run_end = types[i..]
            .iter()
            .position(|t| !t.is_neutral_or_isolate())
            .map_or(len, |offset| i + offset);

        let leading = match i {
            0 => sos,
            _ => strong_direction(types[i - 1]).unwrap_or(embedding),
        };
        let trailing = match run_end {
            end if end == len => eos,
            end => strong_direction(types[end]).unwrap_or(embedding),
        };
        let resolved = if leading == trailing { leading } else { embedding };
        types[i..run_end].fill(resolved);
        i = run_end;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::provider;

    fn brackets(codepoints: &[u32], types: &[BidiClass], level: u8, sos: BidiClass) -> Vec<BidiClass> {
        let classes: Vec<BidiClass> = codepoints.iter().map(|&cp| provider().bidi_class(cp)).collect();
        let positions: Vec<usize> = (0..codepoints.len()).collect();
        let mut types = types.to_vec();
        let mut pairs = Vec::new();
        resolve_brackets(
            provider(),
            codepoints,
            &classes,
            &positions,
            &mut types,
            level,
            sos,
            &mut pairs,
        );
        types
    }

    fn neutrals(types: &[BidiClass], level: u8, sos: BidiClass, eos: BidiClass) -> Vec<BidiClass> {
        let mut types = types.to_vec();
        resolve_neutrals(&mut types, level, sos, eos);
        types
    }

    #[test]
    fn canonical_angle_brackets() {
        assert_eq!(canonical_bracket(0x2329), 0x3008);
        assert_eq!(canonical_bracket(0x232A), 0x3009);
        assert_eq!(canonical_bracket(0x0028), 0x0028);
    }

    #[test]
    fn locate_nested_and_unbalanced_pairs() {
        let data = provider();
        // ( [ ) ]  pairs only the parentheses; "[" is dropped with the stack.
        let cps = [0x28, 0x5B, 0x29, 0x5D];
        let positions: Vec<usize> = (0..4).collect();
        let mut pairs = Vec::new();
        locate_brackets(data, &cps, &positions, &[ON; 4], &mut pairs);
        assert_eq!(pairs, vec![(0, 2)]);

        // 〈 ... 〉 across the canonical equivalents.
        let cps = [0x2329, 0x41, 0x3009];
        let positions: Vec<usize> = (0..3).collect();
        locate_brackets(data, &cps, &positions, &[ON, L, ON], &mut pairs);
        assert_eq!(pairs, vec![(0, 2)]);
    }

    #[test]
    fn full_bracket_stack_still_pairs() {
        let data = provider();
        let depth = MAX_BRACKET_DEPTH;
        let mut cps = vec![0x28; depth];
        cps.extend(std::iter::repeat(0x29).take(depth));
        let positions: Vec<usize> = (0..cps.len()).collect();
        let mut pairs = Vec::new();
        locate_brackets(data, &cps, &positions, &vec![ON; cps.len()], &mut pairs);
        let expected: Vec<_> = (0..depth).map(|i| (i, 2 * depth - 1 - i)).collect();
        assert_eq!(pairs, expected);
    }

    #[test]
    fn bracket_stack_overflow_stops_matching() {
        let data = provider();
        let mut cps = vec![0x28; MAX_BRACKET_DEPTH + 1];
        cps.push(0x29);
        let positions: Vec<usize> = (0..cps.len()).collect();
        let mut pairs = vec![(0, 1)];
        locate_brackets(data, &cps, &positions, &vec![ON; cps.len()], &mut pairs);
        assert!(pairs.is_empty());

        // A balanced pair after the overflow is not matched either.
        let mut cps = vec![0x28; MAX_BRACKET_DEPTH + 1];
        cps.extend([0x5B, 0x5D]);
        let positions: Vec<usize> = (0..cps.len()).collect();
        locate_brackets(data, &cps, &positions, &vec![ON; cps.len()], &mut pairs);
        assert!(pairs.is_empty());
    }

    #[test]
    fn brackets_must_still_be_neutral() {
        let data = provider();
        let cps = [0x28, 0x29];
        let positions = [0, 1];
        let mut pairs = Vec::new();
        locate_brackets(data, &cps, &positions, &[L, ON], &mut pairs);
        assert!(pairs.is_empty());
    }

    #[test]
    fn embedding_direction_inside_wins() {
        // a ( b ) at level 0
        let out = brackets(&[0x61, 0x28, 0x62, 0x29], &[L, ON, L, ON], 0, L);
        assert_eq!(out, vec![L, L, L, L]);
    }

    #[test]
    fn opposite_direction_follows_context() {
        // alef ( bet ) a at level 0
        let out = brackets(
            &[0x05D0, 0x28, 0x05D1, 0x29, 0x61],
            &[R, ON, R, ON, L],
            0,
            L,
        );
        assert_eq!(out, vec![R, R, R, R, L]);

        // a ( bet ) at level 0: context is L, so the brackets take L.
        let out = brackets(&[0x61, 0x28, 0x05D1, 0x29], &[L, ON, R, ON], 0, L);
        assert_eq!(out, vec![L, L, R, L]);
    }

    #[test]
    fn marks_after_brackets_follow() {
        // bet ( alef ) combining grave, level 0, marks were W1-resolved to ON.
        let out = brackets(
            &[0x05D1, 0x28, 0x05D0, 0x29, 0x0300],
            &[R, ON, R, ON, ON],
            0,
            L,
        );
        assert_eq!(out, vec![R, R, R, R, R]);
    }

    #[test]
    fn neutral_runs() {
        assert_eq!(neutrals(&[R, WS, R], 0, L, L), vec![R, R, R]);
        assert_eq!(neutrals(&[R, WS, EN], 0, L, L), vec![R, R, EN]);
        assert_eq!(neutrals(&[L, ON, R], 1, R, R), vec![L, R, R]);
        assert_eq!(neutrals(&[ON, L], 0, L, L), vec![L, L]);
        assert_eq!(neutrals(&[L, WS], 1, R, R), vec![L, R]);
        assert_eq!(neutrals(&[AN, PDI, AN], 0, L, L), vec![AN, R, AN]);
    }
}
