//! UAX #14 rule application and break determination
//!
//! Rules LB4 to LB31 are evaluated in order for each boundary. The state
//! carried between boundaries is one unit of lookback (two for the few rules
//! that look further), plus the small counters the sequence rules need.

use super::types::LineBreakClass::{self, *};
use crate::config::{ConditionalJapaneseStarter, LineBreakConfig};
use crate::provider::{GeneralCategory, UnicodeDataProvider};

const DOTTED_CIRCLE: u32 = 0x25CC;
const HYPHEN: u32 = 0x2010;

/// Outcome of the rule cascade for one boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// No break here.
    Join,
    /// No break, and the codepoint joins the previous unit (LB9).
    Absorb,
    Allow,
    Mandatory,
}

/// Position inside a numeric expression (LB25).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NumberState {
    None,
    /// After `NU (SY | IS)*`.
    InNumber,
    /// After `NU (SY | IS)* (CL | CP)`.
    AfterClose,
}

/// Property access used by the rules.
#[derive(Clone, Copy)]
pub(crate) struct Classifier<'a> {
    data: &'a UnicodeDataProvider,
    config: LineBreakConfig,
}

impl<'a> Classifier<'a> {
    pub(crate) fn new(data: &'a UnicodeDataProvider, config: LineBreakConfig) -> Self {
        Self { data, config }
    }

    /// Line break class after LB1 resolution.
    pub(crate) fn resolve(&self, cp: u32) -> LineBreakClass {
        match self.data.line_break_class(cp) {
            AI | SG | XX => AL,
            SA if matches!(
                self.data.general_category(cp),
                GeneralCategory::NonspacingMark | GeneralCategory::SpacingMark
            ) =>
            {
                CM
            }
            SA => AL,
            CJ => match self.config.cj {
                ConditionalJapaneseStarter::Strict => NS,
                ConditionalJapaneseStarter::Normal => ID,
            },
            class => class,
        }
    }

    fn east_asian(&self, cp: u32) -> bool {
        self.data.east_asian_width(cp).is_east_asian()
    }

    fn category(&self, cp: u32) -> GeneralCategory {
        self.data.general_category(cp)
    }
}

/// A combining-sequence unit visible to the pair rules.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Unit {
    pub class: LineBreakClass,
    pub cp: u32,
}

/// Lazily resolved units following the current codepoint.
pub(crate) struct Lookahead<'s, 'a> {
    classifier: &'s Classifier<'a>,
    codepoints: &'s [u32],
    pos: usize,
    host: LineBreakClass,
    /// First index after `pos` that is not CM or ZWJ, or the text length.
    next_base: usize,
}

impl<'s, 'a> Lookahead<'s, 'a> {
    pub(crate) fn new(
        classifier: &'s Classifier<'a>,
        codepoints: &'s [u32],
        pos: usize,
        host: LineBreakClass,
        next_base: usize,
    ) -> Self {
        Self {
            classifier,
            codepoints,
            pos,
            host,
            next_base,
        }
    }

    /// Advance `cursor` to the first index after `pos` that is not CM or
    /// ZWJ. The cursor only moves forward, so one pass over the text costs
    /// O(n) in total.
    pub(crate) fn advance_base(
        classifier: &Classifier<'_>,
        codepoints: &[u32],
        pos: usize,
        cursor: &mut usize,
    ) {
        *cursor = (*cursor).max(pos + 1);
        while *cursor < codepoints.len()
            && matches!(classifier.resolve(codepoints[*cursor]), CM | ZWJ)
        {
            *cursor += 1;
        }
    }

    /// The `nth` unit after the current one (1 = the next), skipping
    /// combining marks that LB9 attaches to the unit before them.
    fn unit(&self, nth: usize) -> Option<Unit> {
        let mut host = self.host;
        let mut seen = 0;
        let mut i = self.pos + 1;
        while let Some(&cp) = self.codepoints.get(i) {
            let class = self.classifier.resolve(cp);
            if matches!(class, CM | ZWJ) && !matches!(host, BK | CR | LF | NL | SP | ZW) {
                // Everything before `next_base` is a mark.
                i = if i < self.next_base { self.next_base } else { i + 1 };
                continue;
            }
            host = if matches!(class, CM | ZWJ) { AL } else { class };
            seen += 1;
            if seen == nth {
                return Some(Unit { class: host, cp });
            }
            i += 1;
        }
        None
    }

    fn next(&self) -> Option<Unit> {
        self.unit(1)
    }
}

/// Lookback carried across boundaries.
#[derive(Debug, Clone)]
pub(crate) struct BreakState {
    /// Effective class of the previous unit, after LB9/LB10.
    prev: LineBreakClass,
    prev_cp: u32,
    /// LB1-resolved class of the previous codepoint itself.
    prev_raw: LineBreakClass,
    /// Unit before `prev`; `None` at start of text.
    prev_prev: Option<LineBreakClass>,
    prev_prev_cp: u32,
    /// Last unit that was not SP, for the `X SP* ×` rules.
    before_spaces: Option<LineBreakClass>,
    /// Inside `[Pi & QU] SP*` with a qualifying predecessor (LB15a).
    quote_open: bool,
    number: NumberState,
    ri_run: usize,
}

impl BreakState {
    /// State after the first codepoint of the text.
    pub(crate) fn start(classifier: &Classifier<'_>, cp: u32, raw: LineBreakClass) -> Self {
        // LB10: nothing precedes a leading mark.
        let class = if matches!(raw, CM | ZWJ) { AL } else { raw };
        Self {
            prev: class,
            prev_cp: cp,
            prev_raw: raw,
            prev_prev: None,
            prev_prev_cp: 0,
            before_spaces: (class != SP).then_some(class),
            quote_open: class == QU
                && classifier.category(cp) == GeneralCategory::InitialPunctuation,
            number: NumberState::None.advance(class),
            ri_run: usize::from(class == RI),
        }
    }

    /// Effective class of a codepoint that starts a new unit.
    pub(crate) fn effective(raw: LineBreakClass) -> LineBreakClass {
        if matches!(raw, CM | ZWJ) {
            AL
        } else {
            raw
        }
    }

    /// Record the codepoint just classified by [`decide`].
    pub(crate) fn advance(
        &mut self,
        classifier: &Classifier<'_>,
        step: Step,
        cp: u32,
        raw: LineBreakClass,
    ) {
        if step == Step::Absorb {
            self.prev_raw = raw;
            return;
        }
        let class = Self::effective(raw);

        self.quote_open = if class == QU
            && classifier.category(cp) == GeneralCategory::InitialPunctuation
        {
            matches!(self.prev, BK | CR | LF | NL | OP | QU | GL | SP | ZW)
        } else {
            self.quote_open && class == SP
        };
        self.number = self.number.advance(class);
        self.ri_run = if class == RI { self.ri_run + 1 } else { 0 };
        if class != SP {
            self.before_spaces = Some(class);
        }
        self.prev_prev = Some(self.prev);
        self.prev_prev_cp = self.prev_cp;
        self.prev = class;
        self.prev_cp = cp;
        self.prev_raw = raw;
    }
}

impl NumberState {
    fn advance(self, class: LineBreakClass) -> Self {
        match (class, self) {
            (NU, _) => NumberState::InNumber,
            (SY | IS, NumberState::InNumber) => NumberState::InNumber,
            (CL | CP, NumberState::InNumber) => NumberState::AfterClose,
            _ => NumberState::None,
        }
    }
}

fn is_aksara(class: LineBreakClass, cp: u32) -> bool {
    matches!(class, AK | AS) || cp == DOTTED_CIRCLE
}

/// Evaluate LB4 to LB31 for the boundary before `cp`.
pub(crate) fn decide(
    state: &BreakState,
    classifier: &Classifier<'_>,
    cp: u32,
    raw: LineBreakClass,
    look: &Lookahead<'_, '_>,
) -> Step {
    // LB4, LB5
    match state.prev_raw {
        BK => return Step::Mandatory,
        CR if raw == LF => return Step::Join,
        CR | LF | NL => return Step::Mandatory,
        _ => {}
    }
    // LB6
    if matches!(raw, BK | CR | LF | NL) {
        return Step::Join;
    }
    // LB7
    if matches!(raw, SP | ZW) {
        return Step::Join;
    }
    // LB8
    if state.before_spaces == Some(ZW) {
        return Step::Allow;
    }
    // LB8a
    if state.prev_raw == ZWJ {
        return Step::Join;
    }
    // LB9
    if matches!(raw, CM | ZWJ) && !matches!(state.prev, BK | CR | LF | NL | SP | ZW) {
        return Step::Absorb;
    }

    // LB10
    let curr = BreakState::effective(raw);
    let prev = state.prev;
    let east_asian = |cp| classifier.east_asian(cp);
    let category = |cp| classifier.category(cp);

    // LB11
    if curr == WJ || prev == WJ {
        return Step::Join;
    }
    // LB12
    if prev == GL {
        return Step::Join;
    }
    // LB12a
    if curr == GL && !matches!(prev, SP | BA | HY) {
        return Step::Join;
    }
    // LB13
    if matches!(curr, CL | CP | EX | SY) {
        return Step::Join;
    }
    // LB14
    if state.before_spaces == Some(OP) {
        return Step::Join;
    }
    // LB15a
    if state.quote_open {
        return Step::Join;
    }
    // LB15b
    if curr == QU
        && category(cp) == GeneralCategory::FinalPunctuation
        && look.next().map_or(true, |unit| {
            matches!(
                unit.class,
                SP | GL | WJ | CL | QU | CP | EX | IS | SY | BK | CR | LF | NL | ZW
            )
        })
    {
        return Step::Join;
    }
    // LB15c
    if prev == SP && curr == IS && look.next().is_some_and(|unit| unit.class == NU) {
        return Step::Allow;
    }
    // LB15d
    if curr == IS {
        return Step::Join;
    }
    // LB16
    if curr == NS && matches!(state.before_spaces, Some(CL | CP)) {
        return Step::Join;
    }
    // LB17
    if curr == B2 && state.before_spaces == Some(B2) {
        return Step::Join;
    }
    // LB18
    if prev == SP {
        return Step::Allow;
    }
    // LB19
    if curr == QU && category(cp) != GeneralCategory::InitialPunctuation {
        return Step::Join;
    }
    if prev == QU && category(state.prev_cp) != GeneralCategory::FinalPunctuation {
        return Step::Join;
    }
    // LB19a
    if curr == QU
        && (!east_asian(state.prev_cp) || look.next().map_or(true, |unit| !east_asian(unit.cp)))
    {
        return Step::Join;
    }
    if prev == QU
        && (!east_asian(cp) || state.prev_prev.is_none() || !east_asian(state.prev_prev_cp))
    {
        return Step::Join;
    }
    // LB20
    if curr == CB || prev == CB {
        return Step::Allow;
    }
    // LB20a
    if (prev == HY || state.prev_cp == HYPHEN)
        && matches!(curr, AL | HL)
        && state
            .prev_prev
            .map_or(true, |class| matches!(class, BK | CR | LF | NL | SP | ZW | CB | GL))
    {
        return Step::Join;
    }
    // LB21
    if matches!(curr, BA | HY | NS) || prev == BB {
        return Step::Join;
    }
    // LB21a
    if state.prev_prev == Some(HL)
        && (prev == HY || (prev == BA && !east_asian(state.prev_cp)))
        && curr != HL
    {
        return Step::Join;
    }
    // LB21b
    if prev == SY && curr == HL {
        return Step::Join;
    }
    // LB22
    if curr == IN {
        return Step::Join;
    }
    // LB23, LB23a, LB24
    if matches!(
        (prev, curr),
        (AL | HL, NU)
            | (NU, AL | HL)
            | (PR, ID | EB | EM)
            | (ID | EB | EM, PO)
            | (PR | PO, AL | HL)
            | (AL | HL, PR | PO)
    ) {
        return Step::Join;
    }
    // LB25
    if numeric_join(state, prev, curr, look) {
        return Step::Join;
    }
    // LB26, LB27, LB28
    if matches!(
        (prev, curr),
        (JL, JL | JV | H2 | H3)
            | (JV | H2, JV | JT)
            | (JT | H3, JT)
            | (JL | JV | JT | H2 | H3, PO)
            | (PR, JL | JV | JT | H2 | H3)
            | (AL | HL, AL | HL)
    ) {
        return Step::Join;
    }
    // LB28a
    if aksara_join(state, prev, curr, cp, look) {
        return Step::Join;
    }
    // LB29
    if prev == IS && matches!(curr, AL | HL) {
        return Step::Join;
    }
    // LB30
    if matches!(prev, AL | HL | NU) && curr == OP && !east_asian(cp) {
        return Step::Join;
    }
    if prev == CP && !east_asian(state.prev_cp) && matches!(curr, AL | HL | NU) {
        return Step::Join;
    }
    // LB30a
    if prev == RI && curr == RI && state.ri_run % 2 == 1 {
        return Step::Join;
    }
    // LB30b
    if curr == EM
        && (prev == EB
            || (classifier.data.is_extended_pictographic(state.prev_cp)
                && category(state.prev_cp) == GeneralCategory::Unassigned))
    {
        return Step::Join;
    }
    // LB31
    Step::Allow
}

fn numeric_join(
    state: &BreakState,
    prev: LineBreakClass,
    curr: LineBreakClass,
    look: &Lookahead<'_, '_>,
) -> bool {
    match (prev, curr) {
        // NU (SY | IS)* (CL | CP)? × (PO | PR)
        (_, PO | PR) => matches!(
            state.number,
            NumberState::InNumber | NumberState::AfterClose
        ),
        // (PR | PO) × OP IS? NU
        (PO | PR, OP) => match look.next() {
            Some(Unit { class: NU, .. }) => true,
            Some(Unit { class: IS, .. }) => look.unit(2).is_some_and(|unit| unit.class == NU),
            _ => false,
        },
        // (PR | PO | HY | IS) × NU
        (PO | PR | HY | IS, NU) => true,
        // NU (SY | IS)* × NU
        (_, NU) => state.number == NumberState::InNumber,
        _ => false,
    }
}

fn aksara_join(
    state: &BreakState,
    prev: LineBreakClass,
    curr: LineBreakClass,
    cp: u32,
    look: &Lookahead<'_, '_>,
) -> bool {
    let prev_aksara = is_aksara(prev, state.prev_cp);
    let curr_aksara = is_aksara(curr, cp);
    (prev == AP && curr_aksara)
        || (prev_aksara && matches!(curr, VF | VI))
        || (prev == VI
            && state
                .prev_prev
                .is_some_and(|class| is_aksara(class, state.prev_prev_cp))
            && (curr == AK || cp == DOTTED_CIRCLE))
        || (prev_aksara
            && curr_aksara
            && look.next().is_some_and(|unit| unit.class == VF))
}
