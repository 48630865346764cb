//! Builds provider tables from Unicode Character Database text files
//!
//! Each loader accepts the contents of one UCD file. `# @missing:` lines are
//! honoured in file order, so block-specific defaults overwrite the global
//! default exactly as the UCD intends. Values the builder does not know are
//! skipped with a warning so newer UCD releases still load.

use std::path::Path;

use arrayvec::ArrayVec;

use super::defaults;
use super::range_table::RangeTable;
use super::script_extensions::ScriptExtensionTable;
use super::types::{
    BracketEntry, BracketType, EastAsianWidth, GeneralCategory, IndicConjunctBreak, MirrorEntry,
};
use super::UnicodeDataProvider;
use crate::bidi::BidiClass;
use crate::error::{UnicodeDataError, UnicodeDataResult};
use crate::grapheme::GraphemeBreakClass;
use crate::line_breaking::LineBreakClass;
use crate::script::Script;
use crate::MAX_CODEPOINT;

const CODEPOINT_COUNT: usize = MAX_CODEPOINT as usize + 1;
const MISSING_PREFIX: &str = "# @missing:";

pub const DERIVED_BIDI_CLASS: &str = "DerivedBidiClass.txt";
pub const BIDI_MIRRORING: &str = "BidiMirroring.txt";
pub const BIDI_BRACKETS: &str = "BidiBrackets.txt";
pub const SCRIPTS: &str = "Scripts.txt";
pub const SCRIPT_EXTENSIONS: &str = "ScriptExtensions.txt";
pub const LINE_BREAK: &str = "LineBreak.txt";
pub const EMOJI_DATA: &str = "emoji-data.txt";
pub const DERIVED_GENERAL_CATEGORY: &str = "DerivedGeneralCategory.txt";
pub const EAST_ASIAN_WIDTH: &str = "EastAsianWidth.txt";
pub const GRAPHEME_BREAK_PROPERTY: &str = "GraphemeBreakProperty.txt";
pub const DERIVED_CORE_PROPERTIES: &str = "DerivedCoreProperties.txt";

/// One data line of a UCD file.
#[derive(Debug)]
struct UcdLine<'a> {
    line: usize,
    start: u32,
    end: u32,
    fields: ArrayVec<&'a str, 4>,
    missing: bool,
}

fn parse_codepoint(file: &str, line: usize, text: &str) -> UnicodeDataResult<u32> {
    let cp = u32::from_str_radix(text.trim(), 16)
        .map_err(|_| UnicodeDataError::parse(file, line, format!("invalid codepoint '{text}'")))?;
    if cp > MAX_CODEPOINT {
        return Err(UnicodeDataError::parse(
            file,
            line,
            format!("codepoint {cp:#X} out of range"),
        ));
    }
    Ok(cp)
}

fn parse_line<'a>(file: &str, line: usize, raw: &'a str) -> UnicodeDataResult<Option<UcdLine<'a>>> {
    let (body, missing) = match raw.strip_prefix(MISSING_PREFIX) {
        Some(rest) => (rest, true),
        None => (raw, false),
    };
    let body = body.split('#').next().unwrap_or("").trim();
    if body.is_empty() {
        return Ok(None);
    }

    let mut parts = body.split(';').map(str::trim);
    let range = parts.next().unwrap_or("");
    let (start, end) = match range.split_once("..") {
        Some((start, end)) => (
            parse_codepoint(file, line, start)?,
            parse_codepoint(file, line, end)?,
        ),
        None => {
            let cp = parse_codepoint(file, line, range)?;
            (cp, cp)
        }
    };
    if start > end {
        return Err(UnicodeDataError::parse(
            file,
            line,
            format!("inverted range '{range}'"),
        ));
    }

    let mut fields = ArrayVec::new();
    for field in parts {
        fields
            .try_push(field)
            .map_err(|_| UnicodeDataError::parse(file, line, "too many fields"))?;
    }
    if fields.is_empty() {
        return Err(UnicodeDataError::parse(file, line, "missing property value"));
    }
    Ok(Some(UcdLine {
        line,
        start,
        end,
        fields,
        missing,
    }))
}

fn for_each_line<'a>(
    file: &str,
    text: &'a str,
    mut visit: impl FnMut(UcdLine<'a>) -> UnicodeDataResult<()>,
) -> UnicodeDataResult<()> {
    for (idx, raw) in text.lines().enumerate() {
        if let Some(line) = parse_line(file, idx + 1, raw)? {
            visit(line)?;
        }
    }
    Ok(())
}

fn fill<P: Copy>(values: &mut [P], start: u32, end: u32, value: P) {
    values[start as usize..=end as usize].fill(value);
}

/// Loads an enumerated property, one value per line in the first field.
fn load_enumerated<P: Copy>(
    file: &str,
    text: &str,
    values: &mut [P],
    parse: impl Fn(&str) -> Option<P>,
) -> UnicodeDataResult<()> {
    for_each_line(file, text, |line| {
        let name = line.fields[0];
        match parse(name) {
            Some(value) => fill(values, line.start, line.end, value),
            None => log::warn!("{file}:{}: skipping unknown value '{name}'", line.line),
        }
        Ok(())
    })
}

/// Accumulates UCD data into dense per-codepoint arrays, then compresses
/// them into a [`UnicodeDataProvider`].
pub struct UnicodeDataBuilder {
    bidi_class: Vec<BidiClass>,
    script: Vec<Script>,
    line_break: Vec<LineBreakClass>,
    general_category: Vec<GeneralCategory>,
    east_asian_width: Vec<EastAsianWidth>,
    grapheme_break: Vec<GraphemeBreakClass>,
    indic_conjunct_break: Vec<IndicConjunctBreak>,
    extended_pictographic: Vec<bool>,
    default_ignorable: Vec<bool>,
    emoji_presentation: Vec<bool>,
    emoji_modifier_base: Vec<bool>,
    script_extensions: Vec<(u32, u32, Vec<Script>)>,
    mirrors: Vec<MirrorEntry>,
    brackets: Vec<BracketEntry>,
}

impl Default for UnicodeDataBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl UnicodeDataBuilder {
    pub fn new() -> Self {
        Self {
            bidi_class: (0..=MAX_CODEPOINT).map(defaults::bidi_class_default).collect(),
            script: vec![defaults::SCRIPT; CODEPOINT_COUNT],
            line_break: vec![defaults::LINE_BREAK; CODEPOINT_COUNT],
            general_category: vec![defaults::GENERAL_CATEGORY; CODEPOINT_COUNT],
            east_asian_width: vec![defaults::EAST_ASIAN_WIDTH; CODEPOINT_COUNT],
            grapheme_break: vec![defaults::GRAPHEME_BREAK; CODEPOINT_COUNT],
            indic_conjunct_break: vec![defaults::INDIC_CONJUNCT_BREAK; CODEPOINT_COUNT],
            extended_pictographic: vec![false; CODEPOINT_COUNT],
            default_ignorable: vec![false; CODEPOINT_COUNT],
            emoji_presentation: vec![false; CODEPOINT_COUNT],
            emoji_modifier_base: vec![false; CODEPOINT_COUNT],
            script_extensions: Vec::new(),
            mirrors: Vec::new(),
            brackets: Vec::new(),
        }
    }

    /// Load every supported file from a UCD directory by its canonical name.
    pub fn from_ucd_dir(dir: impl AsRef<Path>) -> UnicodeDataResult<Self> {
        let dir = dir.as_ref();
        let read = |name: &str| {
            let path = dir.join(name);
            std::fs::read_to_string(&path).map_err(|source| UnicodeDataError::Io { path, source })
        };

        let mut builder = Self::new();
        builder.load_derived_bidi_class(&read(DERIVED_BIDI_CLASS)?)?;
        builder.load_bidi_mirroring(&read(BIDI_MIRRORING)?)?;
        builder.load_bidi_brackets(&read(BIDI_BRACKETS)?)?;
        builder.load_scripts(&read(SCRIPTS)?)?;
        builder.load_script_extensions(&read(SCRIPT_EXTENSIONS)?)?;
        builder.load_line_break(&read(LINE_BREAK)?)?;
        builder.load_emoji_data(&read(EMOJI_DATA)?)?;
        builder.load_general_category(&read(DERIVED_GENERAL_CATEGORY)?)?;
        builder.load_east_asian_width(&read(EAST_ASIAN_WIDTH)?)?;
        builder.load_grapheme_break_property(&read(GRAPHEME_BREAK_PROPERTY)?)?;
        builder.load_derived_core_properties(&read(DERIVED_CORE_PROPERTIES)?)?;
        Ok(builder)
    }

    pub fn load_derived_bidi_class(&mut self, text: &str) -> UnicodeDataResult<()> {
        load_enumerated(DERIVED_BIDI_CLASS, text, &mut self.bidi_class, BidiClass::from_name)
    }

    pub fn load_scripts(&mut self, text: &str) -> UnicodeDataResult<()> {
        load_enumerated(SCRIPTS, text, &mut self.script, Script::from_name)
    }

    pub fn load_line_break(&mut self, text: &str) -> UnicodeDataResult<()> {
        load_enumerated(LINE_BREAK, text, &mut self.line_break, LineBreakClass::from_name)
    }

    pub fn load_general_category(&mut self, text: &str) -> UnicodeDataResult<()> {
        load_enumerated(
            DERIVED_GENERAL_CATEGORY,
            text,
            &mut self.general_category,
            GeneralCategory::from_name,
        )
    }

    pub fn load_east_asian_width(&mut self, text: &str) -> UnicodeDataResult<()> {
        load_enumerated(
            EAST_ASIAN_WIDTH,
            text,
            &mut self.east_asian_width,
            EastAsianWidth::from_name,
        )
    }

    pub fn load_grapheme_break_property(&mut self, text: &str) -> UnicodeDataResult<()> {
        load_enumerated(
            GRAPHEME_BREAK_PROPERTY,
            text,
            &mut self.grapheme_break,
            GraphemeBreakClass::from_name,
        )
    }

    /// Reads the emoji binary properties used by segmentation.
    pub fn load_emoji_data(&mut self, text: &str) -> UnicodeDataResult<()> {
        for_each_line(EMOJI_DATA, text, |line| {
            let target = match line.fields[0] {
                "Extended_Pictographic" => &mut self.extended_pictographic,
                "Emoji_Presentation" => &mut self.emoji_presentation,
                "Emoji_Modifier_Base" => &mut self.emoji_modifier_base,
                _ => return Ok(()),
            };
            if !line.missing {
                fill(target, line.start, line.end, true);
            }
            Ok(())
        })
    }

    /// Reads InCB and Default_Ignorable_Code_Point; other properties are ignored.
    pub fn load_derived_core_properties(&mut self, text: &str) -> UnicodeDataResult<()> {
        for_each_line(DERIVED_CORE_PROPERTIES, text, |line| {
            match line.fields[0] {
                "InCB" => {
                    let name = line.fields.get(1).copied().ok_or_else(|| {
                        UnicodeDataError::parse(DERIVED_CORE_PROPERTIES, line.line, "InCB without a value")
                    })?;
                    match IndicConjunctBreak::from_name(name) {
                        Some(value) => {
                            fill(&mut self.indic_conjunct_break, line.start, line.end, value)
                        }
                        None => log::warn!(
                            "{DERIVED_CORE_PROPERTIES}:{}: skipping unknown InCB value '{name}'",
                            line.line
                        ),
                    }
                }
                "Default_Ignorable_Code_Point" if !line.missing => {
                    fill(&mut self.default_ignorable, line.start, line.end, true)
                }
                _ => {}
            }
            Ok(())
        })
    }

    pub fn load_script_extensions(&mut self, text: &str) -> UnicodeDataResult<()> {
        for_each_line(SCRIPT_EXTENSIONS, text, |line| {
            // `@missing` names the Script property itself, which is the fallback anyway.
            if line.missing {
                return Ok(());
            }
            let mut scripts = Vec::new();
            for name in line.fields[0].split_whitespace() {
                match Script::from_name(name) {
                    Some(script) if !scripts.contains(&script) => scripts.push(script),
                    Some(_) => {}
                    None => log::warn!(
                        "{SCRIPT_EXTENSIONS}:{}: skipping unknown script '{name}'",
                        line.line
                    ),
                }
            }
            if scripts.len() > u8::MAX as usize {
                return Err(UnicodeDataError::parse(
                    SCRIPT_EXTENSIONS,
                    line.line,
                    "too many scripts in one extension set",
                ));
            }
            if !scripts.is_empty() {
                self.script_extensions.push((line.start, line.end, scripts));
            }
            Ok(())
        })
    }

    pub fn load_bidi_mirroring(&mut self, text: &str) -> UnicodeDataResult<()> {
        for_each_line(BIDI_MIRRORING, text, |line| {
            if line.missing {
                return Ok(());
            }
            if line.start != line.end {
                return Err(UnicodeDataError::parse(BIDI_MIRRORING, line.line, "expected a single codepoint"));
            }
            let mirror = parse_codepoint(BIDI_MIRRORING, line.line, line.fields[0])?;
            self.mirrors.push(MirrorEntry {
                codepoint: line.start,
                mirror,
            });
            Ok(())
        })
    }

    pub fn load_bidi_brackets(&mut self, text: &str) -> UnicodeDataResult<()> {
        for_each_line(BIDI_BRACKETS, text, |line| {
            if line.missing {
                return Ok(());
            }
            if line.start != line.end || line.fields.len() < 2 {
                return Err(UnicodeDataError::parse(
                    BIDI_BRACKETS,
                    line.line,
                    "expected 'codepoint; paired; type'",
                ));
            }
            let paired = parse_codepoint(BIDI_BRACKETS, line.line, line.fields[0])?;
            let kind = match BracketType::from_name(line.fields[1]) {
                Some(kind) => kind,
                // Bidi_Paired_Bracket_Type=None entries carry no pairing.
                None if line.fields[1] == "n" => return Ok(()),
                None => {
                    return Err(UnicodeDataError::parse(
                        BIDI_BRACKETS,
                        line.line,
                        format!("unknown bracket type '{}'", line.fields[1]),
                    ))
                }
            };
            self.brackets.push(BracketEntry {
                codepoint: line.start,
                paired,
                kind,
            });
            Ok(())
        })
    }

    /// Compress the accumulated data into lookup tables.
    pub fn build(mut self) -> UnicodeDataResult<UnicodeDataProvider> {
        self.mirrors.sort_by_key(|entry| entry.codepoint);
        self.mirrors.dedup_by_key(|entry| entry.codepoint);
        self.brackets.sort_by_key(|entry| entry.codepoint);
        self.brackets.dedup_by_key(|entry| entry.codepoint);

        self.script_extensions.sort_by_key(|&(start, _, _)| start);
        let mut script_extensions = ScriptExtensionTable::default();
        let mut prev_end: Option<u32> = None;
        for (start, end, scripts) in &self.script_extensions {
            if prev_end.is_some_and(|prev| *start <= prev) {
                return Err(UnicodeDataError::parse(
                    SCRIPT_EXTENSIONS,
                    0,
                    format!("overlapping ranges at {start:04X}"),
                ));
            }
            script_extensions.push(*start, *end, scripts);
            prev_end = Some(*end);
        }

        let provider = UnicodeDataProvider {
            bidi_class: RangeTable::from_dense_by(
                &self.bidi_class,
                defaults::BIDI_CLASS,
                defaults::bidi_class_default,
            ),
            mirrors: self.mirrors,
            brackets: self.brackets,
            script: RangeTable::from_dense(&self.script, defaults::SCRIPT),
            line_break: RangeTable::from_dense(&self.line_break, defaults::LINE_BREAK),
            extended_pictographic: RangeTable::from_dense(&self.extended_pictographic, false),
            general_category: RangeTable::from_dense(
                &self.general_category,
                defaults::GENERAL_CATEGORY,
            ),
            east_asian_width: RangeTable::from_dense(
                &self.east_asian_width,
                defaults::EAST_ASIAN_WIDTH,
            ),
            grapheme_break: RangeTable::from_dense(&self.grapheme_break, defaults::GRAPHEME_BREAK),
            indic_conjunct_break: RangeTable::from_dense(
                &self.indic_conjunct_break,
                defaults::INDIC_CONJUNCT_BREAK,
            ),
            script_extensions,
            default_ignorable: RangeTable::from_dense(&self.default_ignorable, false),
            emoji_presentation: RangeTable::from_dense(&self.emoji_presentation, false),
            emoji_modifier_base: RangeTable::from_dense(&self.emoji_modifier_base, false),
        };

        log::debug!(
            "Built Unicode tables: {} bidi, {} script, {} line break, {} grapheme, {} extension ranges",
            provider.bidi_class.len(),
            provider.script.len(),
            provider.line_break.len(),
            provider.grapheme_break.len(),
            provider.script_extensions.len(),
        );
        Ok(provider)
    }

    /// Build and serialize in one step.
    pub fn encode(self) -> UnicodeDataResult<Vec<u8>> {
        Ok(self.build()?.encode())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ranges_fields_and_comments() {
        let line = parse_line("t", 1, "0041..005A    ; L # Lu  [26] LATIN CAPITAL LETTER A..Z")
            .unwrap()
            .unwrap();
        assert_eq!((line.start, line.end), (0x41, 0x5A));
        assert_eq!(line.fields.as_slice(), &["L"]);
        assert!(!line.missing);

        let line = parse_line("t", 2, "094D          ; InCB; Linker # Mn       DEVANAGARI SIGN VIRAMA")
            .unwrap()
            .unwrap();
        assert_eq!(line.fields.as_slice(), &["InCB", "Linker"]);

        assert!(parse_line("t", 3, "# plain comment").unwrap().is_none());
        assert!(parse_line("t", 4, "   ").unwrap().is_none());
    }

    #[test]
    fn missing_lines_are_flagged() {
        let line = parse_line("t", 1, "# @missing: 0590..05FF; R")
            .unwrap()
            .unwrap();
        assert!(line.missing);
        assert_eq!((line.start, line.end), (0x590, 0x5FF));
    }

    #[test]
    fn reports_malformed_lines() {
        let err = parse_line("Scripts.txt", 7, "00ZZ ; Latin").unwrap_err();
        match err {
            UnicodeDataError::UcdParse { file, line, .. } => {
                assert_eq!(file, "Scripts.txt");
                assert_eq!(line, 7);
            }
            other => panic!("unexpected error {other:?}"),
        }
        assert!(parse_line("t", 1, "0041").is_err());
        assert!(parse_line("t", 1, "0042..0041; L").is_err());
        assert!(parse_line("t", 1, "110000; L").is_err());
    }

    #[test]
    fn missing_defaults_apply_before_data() {
        let mut builder = UnicodeDataBuilder::new();
        builder
            .load_line_break(
                "# @missing: 0000..10FFFF; XX\n\
                 # @missing: 4E00..9FFF; ID\n\
                 0030..0039;NU # Nd\n",
            )
            .unwrap();
        let data = builder.build().unwrap();
        assert_eq!(data.line_break_class(0x0035), LineBreakClass::NU);
        assert_eq!(data.line_break_class(0x5000), LineBreakClass::ID);
        assert_eq!(data.line_break_class(0x0041), LineBreakClass::XX);
    }

    #[test]
    fn unknown_values_are_skipped() {
        let mut builder = UnicodeDataBuilder::new();
        builder
            .load_scripts("0041..005A ; Latin\n0100 ; Not_A_Script\n")
            .unwrap();
        let data = builder.build().unwrap();
        assert_eq!(data.script(0x0041), Script::Latin);
        assert_eq!(data.script(0x0100), Script::Unknown);
    }

    #[test]
    fn bidi_gaps_keep_block_defaults() {
        let mut builder = UnicodeDataBuilder::new();
        builder
            .load_derived_bidi_class("05D0..05EA ; R\n05C0 ; L\n")
            .unwrap();
        let data = builder.build().unwrap();
        assert_eq!(data.bidi_class(0x05D5), BidiClass::R);
        assert_eq!(data.bidi_class(0x05C0), BidiClass::L);
        assert_eq!(data.bidi_class(0x05FE), BidiClass::R);
    }
}
