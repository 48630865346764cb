//! Property value types answered by the provider

use bitflags::bitflags;

/// A property value that packs into a single byte of the blob.
pub trait PropertyValue: Copy + PartialEq + std::fmt::Debug {
    fn to_byte(self) -> u8;
    fn from_byte(byte: u8) -> Option<Self>;
}

impl PropertyValue for bool {
    fn to_byte(self) -> u8 {
        self as u8
    }

    fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            0 => Some(false),
            1 => Some(true),
            _ => None,
        }
    }
}

fn loose_chars(s: &str) -> impl Iterator<Item = char> + '_ {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .map(|c| c.to_ascii_lowercase())
}

/// UAX44-LM3: compare property value aliases ignoring case, whitespace,
/// underscores and hyphens.
pub(crate) fn loose_eq(alias: &str, name: &str) -> bool {
    loose_chars(alias).eq(loose_chars(name))
}

property_enum! {
    /// Unicode General_Category values.
    pub enum GeneralCategory {
        UppercaseLetter => ["Lu", "Uppercase_Letter"],
        LowercaseLetter => ["Ll", "Lowercase_Letter"],
        TitlecaseLetter => ["Lt", "Titlecase_Letter"],
        ModifierLetter => ["Lm", "Modifier_Letter"],
        OtherLetter => ["Lo", "Other_Letter"],
        NonspacingMark => ["Mn", "Nonspacing_Mark"],
        SpacingMark => ["Mc", "Spacing_Mark"],
        EnclosingMark => ["Me", "Enclosing_Mark"],
        DecimalNumber => ["Nd", "Decimal_Number"],
        LetterNumber => ["Nl", "Letter_Number"],
        OtherNumber => ["No", "Other_Number"],
        ConnectorPunctuation => ["Pc", "Connector_Punctuation"],
        DashPunctuation => ["Pd", "Dash_Punctuation"],
        OpenPunctuation => ["Ps", "Open_Punctuation"],
        ClosePunctuation => ["Pe", "Close_Punctuation"],
        InitialPunctuation => ["Pi", "Initial_Punctuation"],
        FinalPunctuation => ["Pf", "Final_Punctuation"],
        OtherPunctuation => ["Po", "Other_Punctuation"],
        MathSymbol => ["Sm", "Math_Symbol"],
        CurrencySymbol => ["Sc", "Currency_Symbol"],
        ModifierSymbol => ["Sk", "Modifier_Symbol"],
        OtherSymbol => ["So", "Other_Symbol"],
        SpaceSeparator => ["Zs", "Space_Separator"],
        LineSeparator => ["Zl", "Line_Separator"],
        ParagraphSeparator => ["Zp", "Paragraph_Separator"],
        Control => ["Cc", "Control"],
        Format => ["Cf", "Format"],
        Surrogate => ["Cs", "Surrogate"],
        PrivateUse => ["Co", "Private_Use"],
        Unassigned => ["Cn", "Unassigned"],
    }
}

impl GeneralCategory {
    pub fn is_mark(self) -> bool {
        matches!(
            self,
            GeneralCategory::NonspacingMark
                | GeneralCategory::SpacingMark
                | GeneralCategory::EnclosingMark
        )
    }
}

property_enum! {
    /// East_Asian_Width values (UAX #11).
    pub enum EastAsianWidth {
        Ambiguous => ["A", "Ambiguous"],
        Fullwidth => ["F", "Fullwidth"],
        Halfwidth => ["H", "Halfwidth"],
        Neutral => ["N", "Neutral"],
        Narrow => ["Na", "Narrow"],
        Wide => ["W", "Wide"],
    }
}

impl EastAsianWidth {
    /// Membership in the `$EastAsian` set used by the line breaking rules.
    pub fn is_east_asian(self) -> bool {
        matches!(
            self,
            EastAsianWidth::Fullwidth | EastAsianWidth::Wide | EastAsianWidth::Halfwidth
        )
    }
}

property_enum! {
    /// Indic_Conjunct_Break values (InCB, used by GB9c).
    pub enum IndicConjunctBreak {
        None => ["None"],
        Linker => ["Linker"],
        Consonant => ["Consonant"],
        Extend => ["Extend"],
    }
}

property_enum! {
    /// Bidi_Paired_Bracket_Type of a bracket codepoint.
    pub enum BracketType {
        Open => ["o", "Open"],
        Close => ["c", "Close"],
    }
}

/// The pairing recorded for a bracket codepoint (BidiBrackets.txt).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketPair {
    pub paired: u32,
    pub kind: BracketType,
}

/// Bidi_Mirroring_Glyph entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MirrorEntry {
    pub codepoint: u32,
    pub mirror: u32,
}

/// Bidi_Paired_Bracket entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BracketEntry {
    pub codepoint: u32,
    pub paired: u32,
    pub kind: BracketType,
}

bitflags! {
    /// Binary properties of a codepoint, gathered in one lookup pass.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CodepointFlags: u8 {
        const DEFAULT_IGNORABLE = 1 << 0;
        const EXTENDED_PICTOGRAPHIC = 1 << 1;
        const EMOJI_PRESENTATION = 1 << 2;
        const EMOJI_MODIFIER_BASE = 1 << 3;
    }
}
