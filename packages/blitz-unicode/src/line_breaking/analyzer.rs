//! Line break opportunity detection over codepoint sequences

use super::rule_application::{decide, BreakState, Classifier, Lookahead, Step};
use super::types::{LineBreakClass, LineBreakType};
use crate::config::LineBreakConfig;
use crate::error::PreconditionError;
use crate::provider::UnicodeDataProvider;

/// UAX #14 line break analyzer.
#[derive(Clone, Copy)]
pub struct LineBreakAlgorithm<'a> {
    classifier: Classifier<'a>,
}

impl<'a> LineBreakAlgorithm<'a> {
    pub fn new(data: &'a UnicodeDataProvider) -> Self {
        Self::with_config(data, LineBreakConfig::default())
    }

    pub fn with_config(data: &'a UnicodeDataProvider, config: LineBreakConfig) -> Self {
        Self {
            classifier: Classifier::new(data, config),
        }
    }

    /// Line break class of `cp` after LB1 resolution.
    pub fn resolved_class(&self, cp: u32) -> LineBreakClass {
        self.classifier.resolve(cp)
    }

    /// Classify all `n + 1` boundaries of `n` codepoints. Position 0 never
    /// breaks; position `n` is always mandatory for non-empty input.
    pub fn break_opportunities(&self, codepoints: &[u32]) -> Vec<LineBreakType> {
        let mut out = vec![LineBreakType::None; codepoints.len() + 1];
        self.fill(codepoints, &mut out);
        out
    }

    /// Like [`LineBreakAlgorithm::break_opportunities`], writing into a
    /// caller-owned buffer of exactly `codepoints.len() + 1` entries.
    pub fn break_opportunities_into(
        &self,
        codepoints: &[u32],
        out: &mut [LineBreakType],
    ) -> Result<(), PreconditionError> {
        PreconditionError::check_len(codepoints.len() + 1, out.len())?;
        self.fill(codepoints, out);
        Ok(())
    }

    fn fill(&self, codepoints: &[u32], out: &mut [LineBreakType]) {
        // LB2
        out[0] = LineBreakType::None;
        let Some(&first) = codepoints.first() else {
            return;
        };

        let classifier = &self.classifier;
        let mut state = BreakState::start(classifier, first, classifier.resolve(first));

        let mut next_base = 0;
        for (pos, &cp) in codepoints.iter().enumerate().skip(1) {
            let raw = classifier.resolve(cp);
            Lookahead::advance_base(classifier, codepoints, pos, &mut next_base);
            let look = Lookahead::new(
                classifier,
                codepoints,
                pos,
                BreakState::effective(raw),
                next_base,
            );
            let step = decide(&state, classifier, cp, raw, &look);
            out[pos] = match step {
                Step::Join | Step::Absorb => LineBreakType::None,
                Step::Allow => LineBreakType::Allowed,
                Step::Mandatory => LineBreakType::Mandatory,
            };
            state.advance(classifier, step, cp, raw);
        }

        // LB3
        out[codepoints.len()] = LineBreakType::Mandatory;
    }
}
