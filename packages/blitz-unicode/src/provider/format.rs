//! Packed property blob codec
//!
//! Layout (all integers little-endian):
//!
//! ```text
//! header   magic "UTXD" | version u16 | section count u16
//! section  tag u8 | entry count u32 | entries
//! ```
//!
//! Sections appear in a fixed order, one per [`Section`]. Entry layouts:
//! - value ranges: `start u32, end u32, value u8`
//! - flag ranges: `start u32, end u32`
//! - mirrors: `codepoint u32, mirror u32`
//! - brackets: `codepoint u32, paired u32, kind u8`
//! - script extensions: `start u32, end u32, count u8, script u8 * count`

use super::defaults;
use super::range_table::{is_sorted_disjoint, CodepointRange, RangeTable};
use super::script_extensions::ScriptExtensionTable;
use super::types::{BracketEntry, BracketType, MirrorEntry, PropertyValue};
use super::UnicodeDataProvider;
use crate::error::{UnicodeDataError, UnicodeDataResult};
use crate::script::Script;
use crate::MAX_CODEPOINT;

pub const MAGIC: [u8; 4] = *b"UTXD";
pub const FORMAT_VERSION: u16 = 9;

const HEADER_LEN: usize = 8;

/// Blob sections, in storage order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Section {
    BidiClass = 0,
    Mirror = 1,
    Bracket = 2,
    Script = 3,
    LineBreak = 4,
    ExtendedPictographic = 5,
    GeneralCategory = 6,
    EastAsianWidth = 7,
    GraphemeBreak = 8,
    IndicConjunctBreak = 9,
    ScriptExtensions = 10,
    DefaultIgnorable = 11,
    EmojiPresentation = 12,
    EmojiModifierBase = 13,
}

impl Section {
    pub const COUNT: u16 = 14;

    fn min_entry_len(self) -> usize {
        match self {
            Section::Mirror => 8,
            Section::Bracket => 9,
            Section::ScriptExtensions => 10,
            Section::ExtendedPictographic
            | Section::DefaultIgnorable
            | Section::EmojiPresentation
            | Section::EmojiModifierBase => 8,
            _ => 9,
        }
    }
}

struct Reader<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, pos: 0 }
    }

    fn take(&mut self, len: usize) -> UnicodeDataResult<&'a [u8]> {
        let end = self.pos.checked_add(len).filter(|&end| end <= self.bytes.len());
        match end {
            Some(end) => {
                let slice = &self.bytes[self.pos..end];
                self.pos = end;
                Ok(slice)
            }
            None => Err(UnicodeDataError::corrupt(
                self.pos,
                format!("unexpected end of data reading {len} bytes"),
            )),
        }
    }

    fn u8(&mut self) -> UnicodeDataResult<u8> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> UnicodeDataResult<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn u32(&mut self) -> UnicodeDataResult<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn codepoint(&mut self) -> UnicodeDataResult<u32> {
        let offset = self.pos;
        let cp = self.u32()?;
        if cp > MAX_CODEPOINT {
            return Err(UnicodeDataError::corrupt(
                offset,
                format!("codepoint {cp:#X} out of range"),
            ));
        }
        Ok(cp)
    }

    fn remaining(&self) -> usize {
        self.bytes.len() - self.pos
    }

    fn section(&mut self, section: Section) -> UnicodeDataResult<usize> {
        let offset = self.pos;
        let tag = self.u8()?;
        if tag != section as u8 {
            return Err(UnicodeDataError::corrupt(
                offset,
                format!("expected {section:?} section (tag {}), found tag {tag}", section as u8),
            ));
        }
        let count = self.u32()? as usize;
        if count.saturating_mul(section.min_entry_len()) > self.remaining() {
            return Err(UnicodeDataError::corrupt(
                offset,
                format!("{section:?} section declares {count} entries, more than the data holds"),
            ));
        }
        Ok(count)
    }

    fn range(&mut self, prev_end: Option<u32>) -> UnicodeDataResult<(usize, u32, u32)> {
        let offset = self.pos;
        let start = self.codepoint()?;
        let end = self.codepoint()?;
        if start > end {
            return Err(UnicodeDataError::corrupt(
                offset,
                format!("range {start:04X}..{end:04X} is inverted"),
            ));
        }
        if prev_end.is_some_and(|prev| start <= prev) {
            return Err(UnicodeDataError::corrupt(
                offset,
                format!("range {start:04X}..{end:04X} is unsorted or overlaps its predecessor"),
            ));
        }
        Ok((offset, start, end))
    }

    fn value_ranges<P: PropertyValue>(
        &mut self,
        section: Section,
        default: P,
    ) -> UnicodeDataResult<RangeTable<P>> {
        let count = self.section(section)?;
        let mut ranges = Vec::with_capacity(count);
        let mut prev_end = None;
        for _ in 0..count {
            let (offset, start, end) = self.range(prev_end)?;
            let byte = self.u8()?;
            let value = P::from_byte(byte).ok_or_else(|| {
                UnicodeDataError::corrupt(offset, format!("unknown {section:?} value {byte}"))
            })?;
            ranges.push(CodepointRange { start, end, value });
            prev_end = Some(end);
        }
        Ok(RangeTable::from_sorted(ranges, default))
    }

    fn flag_ranges(&mut self, section: Section) -> UnicodeDataResult<RangeTable<bool>> {
        let count = self.section(section)?;
        let mut ranges = Vec::with_capacity(count);
        let mut prev_end = None;
        for _ in 0..count {
            let (_, start, end) = self.range(prev_end)?;
            ranges.push(CodepointRange {
                start,
                end,
                value: true,
            });
            prev_end = Some(end);
        }
        Ok(RangeTable::from_sorted(ranges, false))
    }

    fn ascending(&self, offset: usize, prev: Option<u32>, cp: u32) -> UnicodeDataResult<()> {
        if prev.is_some_and(|prev| cp <= prev) {
            return Err(UnicodeDataError::corrupt(
                offset,
                format!("entry {cp:04X} is unsorted or duplicated"),
            ));
        }
        Ok(())
    }

    fn mirrors(&mut self) -> UnicodeDataResult<Vec<MirrorEntry>> {
        let count = self.section(Section::Mirror)?;
        let mut entries = Vec::with_capacity(count);
        let mut prev = None;
        for _ in 0..count {
            let offset = self.pos;
            let codepoint = self.codepoint()?;
            let mirror = self.codepoint()?;
            self.ascending(offset, prev, codepoint)?;
            entries.push(MirrorEntry { codepoint, mirror });
            prev = Some(codepoint);
        }
        Ok(entries)
    }

    fn brackets(&mut self) -> UnicodeDataResult<Vec<BracketEntry>> {
        let count = self.section(Section::Bracket)?;
        let mut entries = Vec::with_capacity(count);
        let mut prev = None;
        for _ in 0..count {
            let offset = self.pos;
            let codepoint = self.codepoint()?;
            let paired = self.codepoint()?;
            let byte = self.u8()?;
            let kind = BracketType::from_byte(byte).ok_or_else(|| {
                UnicodeDataError::corrupt(offset, format!("unknown bracket type {byte}"))
            })?;
            self.ascending(offset, prev, codepoint)?;
            entries.push(BracketEntry {
                codepoint,
                paired,
                kind,
            });
            prev = Some(codepoint);
        }
        Ok(entries)
    }

    fn script_extensions(&mut self) -> UnicodeDataResult<ScriptExtensionTable> {
        let count = self.section(Section::ScriptExtensions)?;
        let mut table = ScriptExtensionTable::default();
        let mut scripts = Vec::new();
        let mut prev_end = None;
        for _ in 0..count {
            let (offset, start, end) = self.range(prev_end)?;
            let len = self.u8()?;
            if len == 0 {
                return Err(UnicodeDataError::corrupt(offset, "empty script extension set"));
            }
            scripts.clear();
            for &byte in self.take(len as usize)? {
                let script = Script::from_byte(byte).ok_or_else(|| {
                    UnicodeDataError::corrupt(offset, format!("unknown script {byte}"))
                })?;
                scripts.push(script);
            }
            table.push(start, end, &scripts);
            prev_end = Some(end);
        }
        Ok(table)
    }
}

/// Decode a complete blob. Any structural problem fails the whole load.
pub fn decode(bytes: &[u8]) -> UnicodeDataResult<UnicodeDataProvider> {
    if bytes.len() < HEADER_LEN {
        return Err(UnicodeDataError::corrupt(
            bytes.len(),
            format!("blob is {} bytes, shorter than the header", bytes.len()),
        ));
    }
    let mut reader = Reader::new(bytes);
    let magic = reader.take(4)?;
    if magic != MAGIC {
        return Err(UnicodeDataError::BadMagic {
            found: [magic[0], magic[1], magic[2], magic[3]],
        });
    }
    let version = reader.u16()?;
    if version != FORMAT_VERSION {
        return Err(UnicodeDataError::UnsupportedVersion {
            found: version,
            supported: FORMAT_VERSION,
        });
    }
    let sections = reader.u16()?;
    if sections != Section::COUNT {
        return Err(UnicodeDataError::corrupt(
            6,
            format!("expected {} sections, header declares {sections}", Section::COUNT),
        ));
    }

    let provider = UnicodeDataProvider {
        bidi_class: reader.value_ranges(Section::BidiClass, defaults::BIDI_CLASS)?,
        mirrors: reader.mirrors()?,
        brackets: reader.brackets()?,
        script: reader.value_ranges(Section::Script, defaults::SCRIPT)?,
        line_break: reader.value_ranges(Section::LineBreak, defaults::LINE_BREAK)?,
        extended_pictographic: reader.flag_ranges(Section::ExtendedPictographic)?,
        general_category: reader
            .value_ranges(Section::GeneralCategory, defaults::GENERAL_CATEGORY)?,
        east_asian_width: reader
            .value_ranges(Section::EastAsianWidth, defaults::EAST_ASIAN_WIDTH)?,
        grapheme_break: reader.value_ranges(Section::GraphemeBreak, defaults::GRAPHEME_BREAK)?,
        indic_conjunct_break: reader
            .value_ranges(Section::IndicConjunctBreak, defaults::INDIC_CONJUNCT_BREAK)?,
        script_extensions: reader.script_extensions()?,
        default_ignorable: reader.flag_ranges(Section::DefaultIgnorable)?,
        emoji_presentation: reader.flag_ranges(Section::EmojiPresentation)?,
        emoji_modifier_base: reader.flag_ranges(Section::EmojiModifierBase)?,
    };

    if reader.remaining() != 0 {
        return Err(UnicodeDataError::corrupt(
            reader.pos,
            format!("{} trailing bytes after the last section", reader.remaining()),
        ));
    }
    Ok(provider)
}

struct Writer {
    out: Vec<u8>,
}

impl Writer {
    fn u8(&mut self, value: u8) {
        self.out.push(value);
    }

    fn u16(&mut self, value: u16) {
        self.out.extend_from_slice(&value.to_le_bytes());
    }

    fn u32(&mut self, value: u32) {
        self.out.extend_from_slice(&value.to_le_bytes());
    }

    fn section(&mut self, section: Section, count: usize) {
        self.u8(section as u8);
        self.u32(count as u32);
    }

    fn value_ranges<P: PropertyValue>(&mut self, section: Section, table: &RangeTable<P>) {
        debug_assert!(is_sorted_disjoint(table.ranges()));
        self.section(section, table.len());
        for range in table.ranges() {
            self.u32(range.start);
            self.u32(range.end);
            self.u8(range.value.to_byte());
        }
    }

    fn flag_ranges(&mut self, section: Section, table: &RangeTable<bool>) {
        let set = table.ranges().iter().filter(|range| range.value);
        self.section(section, set.clone().count());
        for range in set {
            self.u32(range.start);
            self.u32(range.end);
        }
    }
}

/// Encode a provider into the blob layout read by [`decode`].
pub fn encode(provider: &UnicodeDataProvider) -> Vec<u8> {
    let mut writer = Writer { out: Vec::new() };
    writer.out.extend_from_slice(&MAGIC);
    writer.u16(FORMAT_VERSION);
    writer.u16(Section::COUNT);

    writer.value_ranges(Section::BidiClass, &provider.bidi_class);

    writer.section(Section::Mirror, provider.mirrors.len());
    for entry in &provider.mirrors {
        writer.u32(entry.codepoint);
        writer.u32(entry.mirror);
    }

    writer.section(Section::Bracket, provider.brackets.len());
    for entry in &provider.brackets {
        writer.u32(entry.codepoint);
        writer.u32(entry.paired);
        writer.u8(entry.kind.to_byte());
    }

    writer.value_ranges(Section::Script, &provider.script);
    writer.value_ranges(Section::LineBreak, &provider.line_break);
    writer.flag_ranges(Section::ExtendedPictographic, &provider.extended_pictographic);
    writer.value_ranges(Section::GeneralCategory, &provider.general_category);
    writer.value_ranges(Section::EastAsianWidth, &provider.east_asian_width);
    writer.value_ranges(Section::GraphemeBreak, &provider.grapheme_break);
    writer.value_ranges(Section::IndicConjunctBreak, &provider.indic_conjunct_break);

    let extensions = &provider.script_extensions;
    writer.section(Section::ScriptExtensions, extensions.len());
    for entry in extensions.entries() {
        let scripts = extensions.scripts_of(entry);
        writer.u32(entry.start);
        writer.u32(entry.end);
        writer.u8(scripts.len() as u8);
        for script in scripts {
            writer.u8(script.to_byte());
        }
    }

    writer.flag_ranges(Section::DefaultIgnorable, &provider.default_ignorable);
    writer.flag_ranges(Section::EmojiPresentation, &provider.emoji_presentation);
    writer.flag_ranges(Section::EmojiModifierBase, &provider.emoji_modifier_base);

    writer.out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data::provider;

    fn header(version: u16) -> Vec<u8> {
        let mut bytes = MAGIC.to_vec();
        bytes.extend_from_slice(&version.to_le_bytes());
        bytes.extend_from_slice(&Section::COUNT.to_le_bytes());
        bytes
    }

    fn empty_blob() -> Vec<u8> {
        let mut bytes = header(FORMAT_VERSION);
        for tag in 0..Section::COUNT as u8 {
            bytes.push(tag);
            bytes.extend_from_slice(&0u32.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn empty_tables_decode_to_defaults() {
        let data = decode(&empty_blob()).unwrap();
        assert_eq!(data.script(0x41), Script::Unknown);
        assert_eq!(data.bidi_class(0x05D0), crate::bidi::BidiClass::R);
        assert!(data.script_extensions(0x41).is_empty());
    }

    #[test]
    fn round_trips_through_bytes() {
        let data = provider();
        let bytes = encode(data);
        let decoded = decode(&bytes).unwrap();
        assert_eq!(&decoded, data);
        assert_eq!(encode(&decoded), bytes);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = empty_blob();
        bytes[0] = b'X';
        assert!(matches!(decode(&bytes), Err(UnicodeDataError::BadMagic { .. })));
    }

    #[test]
    fn rejects_other_versions() {
        for version in [8, 10] {
            let mut bytes = empty_blob();
            bytes[4..6].copy_from_slice(&u16::to_le_bytes(version));
            match decode(&bytes) {
                Err(UnicodeDataError::UnsupportedVersion { found, supported }) => {
                    assert_eq!(found, version);
                    assert_eq!(supported, FORMAT_VERSION);
                }
                other => panic!("expected version error, got {other:?}"),
            }
        }
    }

    #[test]
    fn rejects_truncation_and_trailing_bytes() {
        let bytes = encode(provider());
        for cut in [3, HEADER_LEN, bytes.len() / 2, bytes.len() - 1] {
            assert!(
                matches!(decode(&bytes[..cut]), Err(UnicodeDataError::CorruptFormat { .. })),
                "truncated at {cut}"
            );
        }
        let mut padded = bytes;
        padded.push(0);
        assert!(matches!(decode(&padded), Err(UnicodeDataError::CorruptFormat { .. })));
    }

    #[test]
    fn rejects_overlapping_ranges() {
        let mut bytes = header(FORMAT_VERSION);
        bytes.push(Section::BidiClass as u8);
        bytes.extend_from_slice(&2u32.to_le_bytes());
        for (start, end) in [(0x10u32, 0x20u32), (0x20, 0x30)] {
            bytes.extend_from_slice(&start.to_le_bytes());
            bytes.extend_from_slice(&end.to_le_bytes());
            bytes.push(0);
        }
        let err = decode(&bytes).unwrap_err();
        assert!(matches!(err, UnicodeDataError::CorruptFormat { .. }), "{err}");
    }

    #[test]
    fn rejects_unknown_enum_values_and_tags() {
        let mut bytes = header(FORMAT_VERSION);
        bytes.push(Section::BidiClass as u8);
        bytes.extend_from_slice(&1u32.to_le_bytes());
        bytes.extend_from_slice(&0x41u32.to_le_bytes());
        bytes.extend_from_slice(&0x41u32.to_le_bytes());
        bytes.push(200);
        assert!(matches!(decode(&bytes), Err(UnicodeDataError::CorruptFormat { .. })));

        let mut bytes = empty_blob();
        bytes[HEADER_LEN] = Section::Mirror as u8;
        assert!(matches!(decode(&bytes), Err(UnicodeDataError::CorruptFormat { .. })));
    }
}
