//! Property defaults for codepoints absent from a table (UAX #44 `@missing`)

use super::types::{EastAsianWidth, GeneralCategory, IndicConjunctBreak};
use crate::bidi::BidiClass;
use crate::grapheme::GraphemeBreakClass;
use crate::line_breaking::LineBreakClass;
use crate::script::Script;

pub const BIDI_CLASS: BidiClass = BidiClass::L;
pub const SCRIPT: Script = Script::Unknown;
pub const LINE_BREAK: LineBreakClass = LineBreakClass::XX;
pub const GENERAL_CATEGORY: GeneralCategory = GeneralCategory::Unassigned;
pub const EAST_ASIAN_WIDTH: EastAsianWidth = EastAsianWidth::Neutral;
pub const GRAPHEME_BREAK: GraphemeBreakClass = GraphemeBreakClass::Other;
pub const INDIC_CONJUNCT_BREAK: IndicConjunctBreak = IndicConjunctBreak::None;

/// Blocks whose unassigned codepoints default to a strong RTL class.
const BIDI_BLOCK_DEFAULTS: &[(u32, u32, BidiClass)] = &[
    (0x0590, 0x05FF, BidiClass::R),
    (0x0600, 0x07BF, BidiClass::AL),
    (0x07C0, 0x085F, BidiClass::R),
    (0x0860, 0x08FF, BidiClass::AL),
    (0x20A0, 0x20CF, BidiClass::ET),
    (0xFB1D, 0xFB4F, BidiClass::R),
    (0xFB50, 0xFDCF, BidiClass::AL),
    (0xFDF0, 0xFDFF, BidiClass::AL),
    (0xFE70, 0xFEFF, BidiClass::AL),
    (0x10800, 0x10CFF, BidiClass::R),
    (0x10D00, 0x10D3F, BidiClass::AL),
    (0x10D40, 0x10EBF, BidiClass::R),
    (0x10EC0, 0x10EFF, BidiClass::AL),
    (0x10F00, 0x10F2F, BidiClass::R),
    (0x10F30, 0x10F6F, BidiClass::AL),
    (0x10F70, 0x10FFF, BidiClass::R),
    (0x1E800, 0x1EC6F, BidiClass::R),
    (0x1EC70, 0x1ECBF, BidiClass::AL),
    (0x1ECC0, 0x1ECFF, BidiClass::R),
    (0x1ED00, 0x1ED4F, BidiClass::AL),
    (0x1ED50, 0x1EDFF, BidiClass::R),
    (0x1EE00, 0x1EEFF, BidiClass::AL),
    (0x1EF00, 0x1EFFF, BidiClass::R),
];

/// Bidi_Class of a codepoint with no explicit entry.
pub fn bidi_class_default(cp: u32) -> BidiClass {
    if is_noncharacter(cp)
        || (0x2060..=0x206F).contains(&cp)
        || (0xFFF0..=0xFFF8).contains(&cp)
        || (0xE0000..=0xE0FFF).contains(&cp)
    {
        return BidiClass::BN;
    }
    BIDI_BLOCK_DEFAULTS
        .iter()
        .find(|&&(start, end, _)| (start..=end).contains(&cp))
        .map_or(BIDI_CLASS, |&(_, _, class)| class)
}

fn is_noncharacter(cp: u32) -> bool {
    (0xFDD0..=0xFDEF).contains(&cp) || (cp <= crate::MAX_CODEPOINT && cp & 0xFFFE == 0xFFFE)
}
