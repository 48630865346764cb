//! BiDi engine entry points
//!
//! Each paragraph of the input runs through the phases in order:
//! explicit levels, isolating run sequences, weak types, brackets and
//! neutrals, implicit levels, then the L1 whitespace reset.

use super::explicit::{first_strong_level, match_isolates, resolve_explicit};
use super::implicit::{assign_removed_levels, reset_whitespace, resolve_implicit};
use super::neutral::{resolve_brackets, resolve_neutrals};
use super::reorder;
use super::run_sequences::SequenceArena;
use super::weak::resolve_weak;
use crate::bidi::types::{BidiClass, BidiResult, Direction};
use crate::error::PreconditionError;
use crate::provider::UnicodeDataProvider;

/// Reusable working buffers for [`BidiEngine::process_with`].
#[derive(Debug, Default)]
pub struct BidiScratch {
    classes: Vec<BidiClass>,
    types: Vec<BidiClass>,
    matching_pdi: Vec<usize>,
    sequences: SequenceArena,
    sequence_types: Vec<BidiClass>,
    bracket_pairs: Vec<(usize, usize)>,
}

impl BidiScratch {
    pub fn new() -> Self {
        Self::default()
    }
}

/// UAX #9 resolver over a shared property table.
#[derive(Debug, Clone, Copy)]
pub struct BidiEngine<'a> {
    data: &'a UnicodeDataProvider,
}

impl<'a> BidiEngine<'a> {
    pub fn new(data: &'a UnicodeDataProvider) -> Self {
        Self { data }
    }

    /// Resolve embedding levels for `codepoints`.
    ///
    /// Every paragraph separator ends a paragraph. With [`Direction::Auto`]
    /// each paragraph picks its own level; the result reports the first.
    pub fn process(&self, codepoints: &[u32], direction: Direction) -> BidiResult {
        self.process_with(codepoints, direction, &mut BidiScratch::new())
    }

    /// Same as [`BidiEngine::process`] with the numeric direction code of
    /// the conformance files (0 = LTR, 1 = RTL, 2 = Auto).
    pub fn process_code(
        &self,
        codepoints: &[u32],
        direction: i32,
    ) -> Result<BidiResult, PreconditionError> {
        Ok(self.process(codepoints, Direction::try_from(direction)?))
    }

    /// [`BidiEngine::process`] reusing the buffers in `scratch`.
    pub fn process_with(
        &self,
        codepoints: &[u32],
        direction: Direction,
        scratch: &mut BidiScratch,
    ) -> BidiResult {
        let len = codepoints.len();
        let mut levels = vec![0u8; len];
        let mut first_paragraph_level = None;

        let BidiScratch {
            classes,
            types,
            matching_pdi,
            sequences,
            sequence_types,
            bracket_pairs,
        } = scratch;

        classes.clear();
        classes.extend(codepoints.iter().map(|&cp| self.data.bidi_class(cp)));
        types.clear();
        types.extend_from_slice(classes);
        match_isolates(classes, matching_pdi);

        let mut start = 0;
        while start < len {
            // P1
            let end = classes[start..]
                .iter()
                .position(|&class| class == BidiClass::B)
                .map_or(len, |offset| start + offset + 1);

            // P2, P3
            let paragraph_level = direction
                .level()
                .or_else(|| first_strong_level(classes, matching_pdi, start, end))
                .unwrap_or(0);
            first_paragraph_level.get_or_insert(paragraph_level);

            resolve_explicit(
                classes,
                matching_pdi,
                start,
                end,
                paragraph_level,
                types,
                &mut levels,
            );
            sequences.build(
                classes,
                types,
                matching_pdi,
                &levels,
                start,
                end,
                paragraph_level,
            );

            for sequence in sequences.sequences() {
                let positions = sequences.positions(sequence);
                sequence_types.clear();
                sequence_types.extend(positions.iter().map(|&pos| types[pos]));

                resolve_weak(sequence_types, sequence.sos);
                resolve_brackets(
                    self.data,
                    codepoints,
                    classes,
                    positions,
                    sequence_types,
                    sequence.level,
                    sequence.sos,
                    bracket_pairs,
                );
                resolve_neutrals(sequence_types, sequence.level, sequence.sos, sequence.eos);
                resolve_implicit(sequence_types, positions, &mut levels);
            }

            assign_removed_levels(classes, &mut levels, start, end, paragraph_level);
            reset_whitespace(classes, &mut levels, start, end, paragraph_level);
            start = end;
        }

        BidiResult {
            levels,
            paragraph_level: first_paragraph_level
                .or_else(|| direction.level())
                .unwrap_or(0),
        }
    }

    /// L2: visual order of the inclusive line `start..=end`.
    ///
    /// `out` must hold `end - start + 1` entries; `out[v]` is the logical
    /// index shown at visual position `v`.
    pub fn reorder_line(
        levels: &[u8],
        start: usize,
        end: usize,
        out: &mut [usize],
    ) -> Result<(), PreconditionError> {
        reorder::reorder_line(levels, start, end, out)
    }

    /// Allocating variant of [`BidiEngine::reorder_line`] for a whole line.
    pub fn visual_order(levels: &[u8]) -> Vec<usize> {
        let mut out = vec![0; levels.len()];
        reorder::reorder_run(levels, 0, &mut out);
        out
    }

    /// L4: swap characters at odd levels for their mirrored glyphs.
    pub fn mirror_codepoints(&self, codepoints: &mut [u32], levels: &[u8]) {
        reorder::mirror_codepoints(self.data, codepoints, levels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::provider;

    fn levels(codepoints: &[u32], direction: Direction) -> Vec<u8> {
        BidiEngine::new(provider()).process(codepoints, direction).levels
    }

    #[test]
    fn single_latin_letter() {
        let result = BidiEngine::new(provider()).process(&[0x41], Direction::Auto);
        assert_eq!(result.paragraph_level, 0);
        assert_eq!(result.levels, vec![0]);
    }

    #[test]
    fn single_hebrew_letter() {
        let result = BidiEngine::new(provider()).process(&[0x05D0], Direction::Auto);
        assert_eq!(result.paragraph_level, 1);
        assert_eq!(result.levels, vec![1]);
        assert!(result.is_rtl());
    }

    #[test]
    fn hebrew_inside_latin() {
        let text = [0x41, 0x05D0, 0x42];
        let result = BidiEngine::new(provider()).process(&text, Direction::LeftToRight);
        assert_eq!(result.levels, vec![0, 1, 0]);
        assert_eq!(BidiEngine::visual_order(&result.levels), vec![0, 1, 2]);

        let text = [0x41, 0x05D0, 0x05D1, 0x42];
        let result = BidiEngine::new(provider()).process(&text, Direction::LeftToRight);
        assert_eq!(result.levels, vec![0, 1, 1, 0]);
        assert_eq!(BidiEngine::visual_order(&result.levels), vec![0, 2, 1, 3]);
    }

    #[test]
    fn numbers_in_right_to_left_text() {
        let text = [0x05D0, 0x20, 0x31, 0x32];
        let result = levels(&text, Direction::RightToLeft);
        assert_eq!(result, vec![1, 1, 2, 2]);
        assert_eq!(BidiEngine::visual_order(&result), vec![2, 3, 1, 0]);

        // European digits after Arabic letters become Arabic numbers.
        assert_eq!(levels(&[0x0627, 0x30], Direction::Auto), vec![1, 2]);
    }

    #[test]
    fn brackets_take_the_enclosed_direction() {
        let text = [0x05D0, 0x28, 0x05D1, 0x29, 0x41];
        assert_eq!(levels(&text, Direction::LeftToRight), vec![1, 1, 1, 1, 0]);
    }

    #[test]
    fn isolates() {
        let text = [0x41, 0x2067, 0x41, 0x2069, 0x41];
        assert_eq!(levels(&text, Direction::LeftToRight), vec![0, 0, 2, 0, 0]);

        // The first strong character inside an isolate does not decide the paragraph.
        let text = [0x2067, 0x05D0, 0x2069, 0x41];
        let result = BidiEngine::new(provider()).process(&text, Direction::Auto);
        assert_eq!(result.paragraph_level, 0);
    }

    #[test]
    fn trailing_whitespace_and_separators() {
        assert_eq!(levels(&[0x05D0, 0x20], Direction::LeftToRight), vec![1, 0]);
        assert_eq!(levels(&[0x41, 0x20], Direction::RightToLeft), vec![2, 1]);
        assert_eq!(
            levels(&[0x41, 0x09, 0x05D0], Direction::RightToLeft),
            vec![2, 1, 1]
        );
    }

    #[test]
    fn embedding_controls() {
        let text = [0x41, 0x202B, 0x41, 0x202C];
        assert_eq!(levels(&text, Direction::LeftToRight), vec![0, 0, 2, 0]);
    }

    #[test]
    fn paragraphs_resolve_separately() {
        let text = [0x05D0, 0x0A, 0x41];
        let result = BidiEngine::new(provider()).process(&text, Direction::Auto);
        assert_eq!(result.levels, vec![1, 1, 0]);
        assert_eq!(result.paragraph_level, 1);
    }

    #[test]
    fn empty_input() {
        let engine = BidiEngine::new(provider());
        let result = engine.process(&[], Direction::RightToLeft);
        assert!(result.is_empty());
        assert_eq!(result.paragraph_level, 1);
        assert_eq!(engine.process(&[], Direction::Auto).paragraph_level, 0);
        assert!(BidiEngine::visual_order(&[]).is_empty());
    }

    #[test]
    fn one_level_per_codepoint() {
        let text = [
            0x41, 0x202E, 0x05D0, 0x30, 0x2068, 0x0660, 0x2069, 0x0300, 0x20, 0x0A, 0x0627, 0x28,
            0x29,
        ];
        for direction in [Direction::LeftToRight, Direction::RightToLeft, Direction::Auto] {
            assert_eq!(levels(&text, direction).len(), text.len());
        }
    }

    #[test]
    fn deep_nesting_terminates() {
        let mut text = vec![0x202B; 200];
        text.extend([0x2067; 200]);
        text.push(0x41);
        text.extend([0x2069; 50]);
        text.extend([0x202C; 100]);
        let result = levels(&text, Direction::Auto);
        assert_eq!(result.len(), text.len());
        assert!(result.iter().all(|&level| level <= 126));
    }

    #[test]
    fn numeric_direction_codes() {
        let engine = BidiEngine::new(provider());
        assert_eq!(engine.process_code(&[0x41], 1).map(|r| r.levels), Ok(vec![2]));
        assert_eq!(
            engine.process_code(&[0x41], 7),
            Err(PreconditionError::InvalidDirection(7))
        );
    }

    #[test]
    fn scratch_reuse_matches_fresh_runs() {
        let engine = BidiEngine::new(provider());
        let mut scratch = BidiScratch::new();
        let inputs: [&[u32]; 3] = [
            &[0x05D0, 0x20, 0x31],
            &[0x41],
            &[0x41, 0x2067, 0x0627, 0x2069, 0x28, 0x05D0, 0x29],
        ];
        for text in inputs {
            assert_eq!(
                engine.process_with(text, Direction::Auto, &mut scratch),
                engine.process(text, Direction::Auto)
            );
        }
    }

    #[test]
    fn mirroring_uses_levels() {
        let engine = BidiEngine::new(provider());
        let mut text = [0x05D0, 0x28, 0x05D1, 0x29];
        let result = engine.process(&text, Direction::RightToLeft);
        engine.mirror_codepoints(&mut text, &result.levels);
        assert_eq!(text, [0x05D0, 0x29, 0x05D1, 0x28]);
    }
}
