//! Grapheme_Cluster_Break property values

property_enum! {
    /// Grapheme_Cluster_Break values. `Other` is the default (XX).
    pub enum GraphemeBreakClass {
        Other => ["XX", "Other"],
        CR => ["CR"],
        LF => ["LF"],
        Control => ["CN", "Control"],
        Extend => ["EX", "Extend"],
        ZWJ => ["ZWJ"],
        RegionalIndicator => ["RI", "Regional_Indicator"],
        Prepend => ["PP", "Prepend"],
        SpacingMark => ["SM", "SpacingMark"],
        L => ["L"],
        V => ["V"],
        T => ["T"],
        LV => ["LV"],
        LVT => ["LVT"],
    }
}

impl GraphemeBreakClass {
    /// Classes that always break on both sides (GB4, GB5).
    pub fn is_control(self) -> bool {
        matches!(
            self,
            GraphemeBreakClass::CR | GraphemeBreakClass::LF | GraphemeBreakClass::Control
        )
    }
}
