//! Single-pass grapheme boundary scan

use super::types::GraphemeBreakClass as G;
use crate::error::PreconditionError;
use crate::provider::{IndicConjunctBreak, UnicodeDataProvider};

/// Progress through `ExtPict Extend* ZWJ` for GB11.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum EmojiState {
    None,
    Pictographic,
    PictographicZwj,
}

/// Progress through `Consonant [Extend Linker]* Linker [Extend Linker]*` for GB9c.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConjunctState {
    None,
    Consonant,
    Linked,
}

/// Computes extended grapheme cluster boundaries.
#[derive(Debug, Clone, Copy)]
pub struct GraphemeBreaker<'a> {
    data: &'a UnicodeDataProvider,
}

impl<'a> GraphemeBreaker<'a> {
    pub fn new(data: &'a UnicodeDataProvider) -> Self {
        Self { data }
    }

    /// `n + 1` boundary flags for `n` codepoints; `true` marks a break.
    pub fn break_opportunities(&self, codepoints: &[u32]) -> Vec<bool> {
        let mut out = vec![false; codepoints.len() + 1];
        self.fill(codepoints, &mut out);
        out
    }

    /// Like [`GraphemeBreaker::break_opportunities`], writing into a
    /// caller-owned buffer of exactly `codepoints.len() + 1` flags.
    pub fn break_opportunities_into(
        &self,
        codepoints: &[u32],
        out: &mut [bool],
    ) -> Result<(), PreconditionError> {
        PreconditionError::check_len(codepoints.len() + 1, out.len())?;
        self.fill(codepoints, out);
        Ok(())
    }

    fn fill(&self, codepoints: &[u32], out: &mut [bool]) {
        let Some((&first, rest)) = codepoints.split_first() else {
            // GB1/GB2 do not apply to empty text.
            out[0] = false;
            return;
        };

        out[0] = true;
        let mut prev = self.data.grapheme_break_class(first);
        let mut emoji = EmojiState::None.advance(self.data, first, prev);
        let mut conjunct = ConjunctState::None.advance(self.data.indic_conjunct_break(first));
        let mut ri_run = usize::from(prev == G::RegionalIndicator);

        for (offset, &cp) in rest.iter().enumerate() {
            let curr = self.data.grapheme_break_class(cp);
            let incb = self.data.indic_conjunct_break(cp);
            let pictographic = self.data.is_extended_pictographic(cp);

            out[offset + 1] = match (prev, curr) {
                // GB3
                (G::CR, G::LF) => false,
                // GB4, GB5
                (p, c) if p.is_control() || c.is_control() => true,
                // GB6-GB8
                (G::L, G::L | G::V | G::LV | G::LVT) => false,
                (G::LV | G::V, G::V | G::T) => false,
                (G::LVT | G::T, G::T) => false,
                // GB9, GB9a
                (_, G::Extend | G::ZWJ | G::SpacingMark) => false,
                // GB9b
                (G::Prepend, _) => false,
                // GB9c
                _ if conjunct == ConjunctState::Linked
                    && incb == IndicConjunctBreak::Consonant =>
                {
                    false
                }
                // GB11
                _ if emoji == EmojiState::PictographicZwj && pictographic => false,
                // GB12, GB13
                (G::RegionalIndicator, G::RegionalIndicator) => ri_run % 2 == 0,
                // GB999
                _ => true,
            };

            emoji = emoji.advance(self.data, cp, curr);
            conjunct = conjunct.advance(incb);
            ri_run = if curr == G::RegionalIndicator {
                ri_run + 1
            } else {
                0
            };
            prev = curr;
        }

        out[codepoints.len()] = true;
    }
}

impl EmojiState {
    fn advance(self, data: &UnicodeDataProvider, cp: u32, class: G) -> Self {
        if data.is_extended_pictographic(cp) {
            EmojiState::Pictographic
        } else {
            match (self, class) {
                (EmojiState::Pictographic, G::Extend) => EmojiState::Pictographic,
                (EmojiState::Pictographic, G::ZWJ) => EmojiState::PictographicZwj,
                _ => EmojiState::None,
            }
        }
    }
}

impl ConjunctState {
    fn advance(self, incb: IndicConjunctBreak) -> Self {
        match (self, incb) {
            (_, IndicConjunctBreak::Consonant) => ConjunctState::Consonant,
            (ConjunctState::None, _) => ConjunctState::None,
            (_, IndicConjunctBreak::Linker) => ConjunctState::Linked,
            (state, IndicConjunctBreak::Extend) => state,
            (_, IndicConjunctBreak::None) => ConjunctState::None,
        }
    }
}
