//! UAX #14 Line Breaking Types and Enums

property_enum! {
    /// UAX #14 Line Breaking Classes (comprehensive)
    pub enum LineBreakClass {
        // Basic classes
        /// Mandatory Break
        BK => ["BK", "Mandatory_Break"],
        /// Carriage Return
        CR => ["CR", "Carriage_Return"],
        /// Line Feed
        LF => ["LF", "Line_Feed"],
        /// Combining Mark
        CM => ["CM", "Combining_Mark"],
        /// Next Line
        NL => ["NL", "Next_Line"],
        /// Surrogate
        SG => ["SG", "Surrogate"],
        /// Word Joiner
        WJ => ["WJ", "Word_Joiner"],
        /// Zero Width Space
        ZW => ["ZW", "ZWSpace"],
        /// Non-breaking Glue
        GL => ["GL", "Glue"],
        /// Space
        SP => ["SP", "Space"],
        /// Zero Width Joiner
        ZWJ => ["ZWJ"],

        // Letters and symbols
        /// Alphabetic
        AL => ["AL", "Alphabetic"],
        /// Break Opportunity Before and After
        B2 => ["B2", "Break_Both"],
        /// Break After
        BA => ["BA", "Break_After"],
        /// Break Before
        BB => ["BB", "Break_Before"],
        /// Hyphen
        HY => ["HY", "Hyphen"],
        /// Contingent Break Opportunity
        CB => ["CB", "Contingent_Break"],
        /// Close Punctuation
        CL => ["CL", "Close_Punctuation"],
        /// Close Parenthesis
        CP => ["CP", "Close_Parenthesis"],
        /// Exclamation/Interrogation
        EX => ["EX", "Exclamation"],
        /// Inseparable
        IN => ["IN", "Inseparable", "Inseperable"],
        /// Nonstarter
        NS => ["NS", "Nonstarter"],
        /// Open Punctuation
        OP => ["OP", "Open_Punctuation"],
        /// Quotation
        QU => ["QU", "Quotation"],
        /// Infix Numeric Separator
        IS => ["IS", "Infix_Numeric"],
        /// Numeric
        NU => ["NU", "Numeric"],
        /// Postfix Numeric
        PO => ["PO", "Postfix_Numeric"],
        /// Prefix Numeric
        PR => ["PR", "Prefix_Numeric"],
        /// Symbols Allowing Break After
        SY => ["SY", "Break_Symbols"],

        // Complex scripts
        /// Ambiguous
        AI => ["AI", "Ambiguous"],
        /// Conditional Japanese Starter
        CJ => ["CJ", "Conditional_Japanese_Starter"],
        /// Hangul LV Syllable
        H2 => ["H2"],
        /// Hangul LVT Syllable
        H3 => ["H3"],
        /// Hebrew Letter
        HL => ["HL", "Hebrew_Letter"],
        /// Ideographic
        ID => ["ID", "Ideographic"],
        /// Hangul L Jamo
        JL => ["JL"],
        /// Hangul V Jamo
        JV => ["JV"],
        /// Hangul T Jamo
        JT => ["JT"],
        /// Regional Indicator
        RI => ["RI", "Regional_Indicator"],
        /// South East Asian
        SA => ["SA", "Complex_Context"],
        /// Unknown
        XX => ["XX", "Unknown"],

        // Extended classes for modern Unicode
        /// Emoji Base
        EB => ["EB", "E_Base"],
        /// Emoji Modifier
        EM => ["EM", "E_Modifier"],
        /// Aksara
        AK => ["AK", "Aksara"],
        /// Aksara Prebase
        AP => ["AP", "Aksara_Prebase"],
        /// Aksara Start
        AS => ["AS", "Aksara_Start"],
        /// Virama Final
        VF => ["VF", "Virama_Final"],
        /// Virama
        VI => ["VI", "Virama"],
    }
}

/// Break classification of one boundary between codepoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum LineBreakType {
    /// Breaking is prohibited
    #[default]
    None = 0,
    /// Breaking is allowed
    Allowed = 1,
    /// Breaking is required (mandatory)
    Mandatory = 2,
}

impl LineBreakType {
    pub fn is_break(self) -> bool {
        self != LineBreakType::None
    }
}
