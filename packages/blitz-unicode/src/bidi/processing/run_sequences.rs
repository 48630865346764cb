//! Level runs and isolating run sequences (X9, X10, BD13)

use std::ops::Range;

use super::explicit::NO_MATCH;
use crate::bidi::types::BidiClass;

/// One isolating run sequence, stored as a span of the arena.
#[derive(Debug, Clone)]
pub(crate) struct RunSequence {
    span: Range<usize>,
    pub level: u8,
    pub sos: BidiClass,
    pub eos: BidiClass,
}

/// Flat storage for the isolating run sequences of one paragraph.
///
/// Every sequence is a list of text positions with the X9-removed
/// characters already left out, so later phases see adjacent characters
/// exactly as the rules define adjacency.
#[derive(Debug, Default)]
pub(crate) struct SequenceArena {
    positions: Vec<usize>,
    sequences: Vec<RunSequence>,
    kept: Vec<usize>,
    runs: Vec<Range<usize>>,
    appended: Vec<bool>,
}

impl SequenceArena {
    pub fn sequences(&self) -> &[RunSequence] {
        &self.sequences
    }

    /// Text positions of `sequence`, in logical order.
    pub fn positions(&self, sequence: &RunSequence) -> &[usize] {
        &self.positions[sequence.span.clone()]
    }

    /// Rebuild the sequences for the paragraph `start..end` from its
    /// explicit levels.
    ///
    /// `classes` are the original classes; `types` carry overrides and
    /// decide whether a sequence ends on an isolate initiator for X10.
    #[allow(clippy::too_many_arguments)]
    pub fn build(
        &mut self,
        classes: &[BidiClass],
        types: &[BidiClass],
        matching_pdi: &[usize],
        levels: &[u8],
        start: usize,
        end: usize,
        paragraph_level: u8,
    ) {
        let Self {
            positions,
            sequences,
            kept,
            runs,
            appended,
        } = self;

        // X9
        kept.clear();
        kept.extend((start..end).filter(|&i| !classes[i].is_removed_by_x9()));

        // BD7: maximal runs of equal level over the kept characters.
        runs.clear();
        let mut run_start = 0;
        for k in 1..=kept.len() {
            if k == kept.len() || levels[kept[k]] != levels[kept[k - 1]] {
                runs.push(run_start..k);
                run_start = k;
            }
        }

        // BD13: chain runs across matched isolate initiator / PDI pairs.
        appended.clear();
        appended.resize(runs.len(), false);
        positions.clear();
        sequences.clear();

        for first_run in 0..runs.len() {
            if appended[first_run] {
                continue;
            }
            let span_start = positions.len();
            let mut current = first_run;
            loop {
                let run = runs[current].clone();
                positions.extend_from_slice(&kept[run.clone()]);

                let last = kept[run.end - 1];
                if !classes[last].is_isolate_initiator() || matching_pdi[last] == NO_MATCH {
                    break;
                }
                let pdi = matching_pdi[last];
                match runs.binary_search_by_key(&pdi, |run| kept[run.start]) {
                    Ok(next) if next > current => {
                        appended[next] = true;
                        current = next;
                    }
                    _ => break,
                }
            }

            let span = span_start..positions.len();
            let first = positions[span.start];
            let last = positions[span.end - 1];
            let level = levels[first];

            // X10
            let preceding = (start..first)
                .rev()
                .find(|&i| !classes[i].is_removed_by_x9())
                .map_or(paragraph_level, |i| levels[i]);
            let following = if types[last].is_isolate_initiator() {
                paragraph_level
            } else {
                (last + 1..end)
                    .find(|&i| !classes[i].is_removed_by_x9())
                    .map_or(paragraph_level, |i| levels[i])
            };

            sequences.push(RunSequence {
                span,
                level,
                sos: BidiClass::for_level(level.max(preceding)),
                eos: BidiClass::for_level(level.max(following)),
            });
        }
    }
}
