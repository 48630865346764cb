//! Unicode property data provider
//!
//! The provider owns one sorted range table per property, decoded from the
//! packed blob (`format`) or built directly from UCD text files (`builder`).
//! It is immutable after construction and answers every query for any `u32`,
//! returning the property default for codepoints outside all ranges.

pub mod builder;
pub mod defaults;
pub mod format;
pub mod range_table;
pub mod script_extensions;
pub mod types;

use std::path::Path;

pub use builder::UnicodeDataBuilder;
pub use range_table::{CodepointRange, RangeTable};
pub use script_extensions::{ScriptExtensionEntry, ScriptExtensionTable};
pub use types::{
    BracketEntry, BracketPair, BracketType, CodepointFlags, EastAsianWidth, GeneralCategory,
    IndicConjunctBreak, MirrorEntry, PropertyValue,
};

use crate::bidi::BidiClass;
use crate::error::{UnicodeDataError, UnicodeDataResult};
use crate::grapheme::GraphemeBreakClass;
use crate::line_breaking::LineBreakClass;
use crate::script::Script;

/// Immutable Unicode property tables, safe to share across threads.
#[derive(Debug, Clone, PartialEq)]
pub struct UnicodeDataProvider {
    pub(crate) bidi_class: RangeTable<BidiClass>,
    pub(crate) mirrors: Vec<MirrorEntry>,
    pub(crate) brackets: Vec<BracketEntry>,
    pub(crate) script: RangeTable<Script>,
    pub(crate) line_break: RangeTable<LineBreakClass>,
    pub(crate) extended_pictographic: RangeTable<bool>,
    pub(crate) general_category: RangeTable<GeneralCategory>,
    pub(crate) east_asian_width: RangeTable<EastAsianWidth>,
    pub(crate) grapheme_break: RangeTable<GraphemeBreakClass>,
    pub(crate) indic_conjunct_break: RangeTable<IndicConjunctBreak>,
    pub(crate) script_extensions: ScriptExtensionTable,
    pub(crate) default_ignorable: RangeTable<bool>,
    pub(crate) emoji_presentation: RangeTable<bool>,
    pub(crate) emoji_modifier_base: RangeTable<bool>,
}

impl UnicodeDataProvider {
    /// Decode a packed property blob, validating its header and every section.
    pub fn load(bytes: &[u8]) -> UnicodeDataResult<Self> {
        let provider = format::decode(bytes)?;
        log::debug!(
            "Loaded Unicode property blob v{}: {} bidi, {} script, {} line break, {} grapheme ranges",
            format::FORMAT_VERSION,
            provider.bidi_class.len(),
            provider.script.len(),
            provider.line_break.len(),
            provider.grapheme_break.len(),
        );
        Ok(provider)
    }

    /// Read and decode a packed property blob from disk.
    pub fn load_file(path: impl AsRef<Path>) -> UnicodeDataResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| UnicodeDataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::load(&bytes)
    }

    /// Serialize into the packed blob format read by [`UnicodeDataProvider::load`].
    pub fn encode(&self) -> Vec<u8> {
        format::encode(self)
    }

    pub fn format_version(&self) -> u16 {
        format::FORMAT_VERSION
    }

    #[inline]
    pub fn bidi_class(&self, cp: u32) -> BidiClass {
        self.bidi_class
            .lookup(cp)
            .unwrap_or_else(|| defaults::bidi_class_default(cp))
    }

    #[inline]
    pub fn script(&self, cp: u32) -> Script {
        self.script.get(cp)
    }

    /// Script_Extensions of `cp`; empty when the Script value is authoritative.
    #[inline]
    pub fn script_extensions(&self, cp: u32) -> &[Script] {
        self.script_extensions.get(cp)
    }

    #[inline]
    pub fn line_break_class(&self, cp: u32) -> LineBreakClass {
        self.line_break.get(cp)
    }

    #[inline]
    pub fn grapheme_break_class(&self, cp: u32) -> GraphemeBreakClass {
        self.grapheme_break.get(cp)
    }

    #[inline]
    pub fn general_category(&self, cp: u32) -> GeneralCategory {
        self.general_category.get(cp)
    }

    #[inline]
    pub fn east_asian_width(&self, cp: u32) -> EastAsianWidth {
        self.east_asian_width.get(cp)
    }

    #[inline]
    pub fn indic_conjunct_break(&self, cp: u32) -> IndicConjunctBreak {
        self.indic_conjunct_break.get(cp)
    }

    #[inline]
    pub fn is_default_ignorable(&self, cp: u32) -> bool {
        self.default_ignorable.get(cp)
    }

    #[inline]
    pub fn is_extended_pictographic(&self, cp: u32) -> bool {
        self.extended_pictographic.get(cp)
    }

    #[inline]
    pub fn is_emoji_presentation(&self, cp: u32) -> bool {
        self.emoji_presentation.get(cp)
    }

    #[inline]
    pub fn is_emoji_modifier_base(&self, cp: u32) -> bool {
        self.emoji_modifier_base.get(cp)
    }

    /// All binary properties of `cp` at once.
    pub fn flags(&self, cp: u32) -> CodepointFlags {
        let mut flags = CodepointFlags::empty();
        flags.set(CodepointFlags::DEFAULT_IGNORABLE, self.is_default_ignorable(cp));
        flags.set(
            CodepointFlags::EXTENDED_PICTOGRAPHIC,
            self.is_extended_pictographic(cp),
        );
        flags.set(
            CodepointFlags::EMOJI_PRESENTATION,
            self.is_emoji_presentation(cp),
        );
        flags.set(
            CodepointFlags::EMOJI_MODIFIER_BASE,
            self.is_emoji_modifier_base(cp),
        );
        flags
    }

    /// Bidi_Mirroring_Glyph of `cp`, if it has one.
    pub fn mirror(&self, cp: u32) -> Option<u32> {
        self.mirrors
            .binary_search_by_key(&cp, |entry| entry.codepoint)
            .ok()
            .map(|idx| self.mirrors[idx].mirror)
    }

    /// Bidi_Paired_Bracket and Bidi_Paired_Bracket_Type of `cp`.
    pub fn bracket_pair(&self, cp: u32) -> Option<BracketPair> {
        self.brackets
            .binary_search_by_key(&cp, |entry| entry.codepoint)
            .ok()
            .map(|idx| {
                let entry = &self.brackets[idx];
                BracketPair {
                    paired: entry.paired,
                    kind: entry.kind,
                }
            })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_data::provider;

    use super::*;

    #[test]
    fn answers_core_properties() {
        let data = provider();
        assert_eq!(data.bidi_class(0x0041), BidiClass::L);
        assert_eq!(data.bidi_class(0x05D0), BidiClass::R);
        assert_eq!(data.bidi_class(0x0627), BidiClass::AL);
        assert_eq!(data.bidi_class(0x0030), BidiClass::EN);
        assert_eq!(data.bidi_class(0x0660), BidiClass::AN);
        assert_eq!(data.bidi_class(0x0300), BidiClass::NSM);
        assert_eq!(data.bidi_class(0x2067), BidiClass::RLI);

        assert_eq!(data.script(0x0041), Script::Latin);
        assert_eq!(data.script(0x05D0), Script::Hebrew);
        assert_eq!(data.script(0x0300), Script::Inherited);
        assert_eq!(data.script(0x0020), Script::Common);

        assert_eq!(data.line_break_class(0x0020), LineBreakClass::SP);
        assert_eq!(data.line_break_class(0x0030), LineBreakClass::NU);
        assert_eq!(data.line_break_class(0x002C), LineBreakClass::IS);

        assert_eq!(data.grapheme_break_class(0x0301), GraphemeBreakClass::Extend);
        assert_eq!(data.grapheme_break_class(0x000D), GraphemeBreakClass::CR);

        assert_eq!(data.general_category(0x0041), GeneralCategory::UppercaseLetter);
        assert_eq!(data.east_asian_width(0x4E00), EastAsianWidth::Wide);
        assert_eq!(data.indic_conjunct_break(0x094D), IndicConjunctBreak::Linker);
    }

    #[test]
    fn unlisted_codepoints_take_defaults() {
        let data = provider();
        // Unassigned Hebrew block codepoint.
        assert_eq!(data.bidi_class(0x05FF), BidiClass::R);
        assert_eq!(data.bidi_class(0x110000), BidiClass::L);
        assert_eq!(data.script(0x10FFFF), Script::Unknown);
        assert_eq!(data.line_break_class(0xE0080), LineBreakClass::XX);
        assert_eq!(data.general_category(0x0378), GeneralCategory::Unassigned);
        assert_eq!(data.east_asian_width(0x110000), EastAsianWidth::Neutral);
        assert!(data.script_extensions(0x0041).is_empty());
        assert_eq!(data.mirror(0x0041), None);
        assert_eq!(data.bracket_pair(0x0041), None);
    }

    #[test]
    fn mirror_and_brackets() {
        let data = provider();
        assert_eq!(data.mirror(0x0028), Some(0x0029));
        assert_eq!(data.mirror(0x00AB), Some(0x00BB));
        assert_eq!(
            data.bracket_pair(0x0028),
            Some(BracketPair {
                paired: 0x0029,
                kind: BracketType::Open
            })
        );
        assert_eq!(
            data.bracket_pair(0x232A),
            Some(BracketPair {
                paired: 0x2329,
                kind: BracketType::Close
            })
        );
    }

    #[test]
    fn flags_and_extensions() {
        let data = provider();
        assert!(data.is_extended_pictographic(0x1F600));
        assert!(data.is_emoji_presentation(0x1F600));
        assert!(data.is_emoji_modifier_base(0x1F466));
        assert!(data.is_default_ignorable(0x200B));
        assert!(!data.is_default_ignorable(0x0041));
        assert_eq!(
            data.flags(0x1F466),
            CodepointFlags::EXTENDED_PICTOGRAPHIC
                | CodepointFlags::EMOJI_PRESENTATION
                | CodepointFlags::EMOJI_MODIFIER_BASE
        );
        assert_eq!(data.script_extensions(0x0342), &[Script::Greek]);
        assert!(data.script_extensions(0x0951).len() > 1);
    }
}
