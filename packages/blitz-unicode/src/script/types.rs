//! Unicode Script property values (UAX #24)

property_enum! {
    /// Script property values as of Unicode 16.0.
    ///
    /// Aliases are the ISO 15924 code followed by the UCD long name.
    pub enum Script {
        Unknown => ["Zzzz", "Unknown"],
        Common => ["Zyyy", "Common"],
        Inherited => ["Zinh", "Inherited", "Qaai"],
        Adlam => ["Adlm", "Adlam"],
        Ahom => ["Ahom", "Ahom"],
        AnatolianHieroglyphs => ["Hluw", "Anatolian_Hieroglyphs"],
        Arabic => ["Arab", "Arabic"],
        Armenian => ["Armn", "Armenian"],
        Avestan => ["Avst", "Avestan"],
        Balinese => ["Bali", "Balinese"],
        Bamum => ["Bamu", "Bamum"],
        BassaVah => ["Bass", "Bassa_Vah"],
        Batak => ["Batk", "Batak"],
        Bengali => ["Beng", "Bengali"],
        Bhaiksuki => ["Bhks", "Bhaiksuki"],
        Bopomofo => ["Bopo", "Bopomofo"],
        Brahmi => ["Brah", "Brahmi"],
        Braille => ["Brai", "Braille"],
        Buginese => ["Bugi", "Buginese"],
        Buhid => ["Buhd", "Buhid"],
        CanadianAboriginal => ["Cans", "Canadian_Aboriginal"],
        Carian => ["Cari", "Carian"],
        CaucasianAlbanian => ["Aghb", "Caucasian_Albanian"],
        Chakma => ["Cakm", "Chakma"],
        Cham => ["Cham", "Cham"],
        Cherokee => ["Cher", "Cherokee"],
        Chorasmian => ["Chrs", "Chorasmian"],
        Coptic => ["Copt", "Coptic", "Qaac"],
        Cuneiform => ["Xsux", "Cuneiform"],
        Cypriot => ["Cprt", "Cypriot"],
        CyproMinoan => ["Cpmn", "Cypro_Minoan"],
        Cyrillic => ["Cyrl", "Cyrillic"],
        Deseret => ["Dsrt", "Deseret"],
        Devanagari => ["Deva", "Devanagari"],
        DivesAkuru => ["Diak", "Dives_Akuru"],
        Dogra => ["Dogr", "Dogra"],
        Duployan => ["Dupl", "Duployan"],
        EgyptianHieroglyphs => ["Egyp", "Egyptian_Hieroglyphs"],
        Elbasan => ["Elba", "Elbasan"],
        Elymaic => ["Elym", "Elymaic"],
        Ethiopic => ["Ethi", "Ethiopic"],
        Garay => ["Gara", "Garay"],
        Georgian => ["Geor", "Georgian"],
        Glagolitic => ["Glag", "Glagolitic"],
        Gothic => ["Goth", "Gothic"],
        Grantha => ["Gran", "Grantha"],
        Greek => ["Grek", "Greek"],
        Gujarati => ["Gujr", "Gujarati"],
        GunjalaGondi => ["Gong", "Gunjala_Gondi"],
        Gurmukhi => ["Guru", "Gurmukhi"],
        GurungKhema => ["Gukh", "Gurung_Khema"],
        Han => ["Hani", "Han"],
        Hangul => ["Hang", "Hangul"],
        HanifiRohingya => ["Rohg", "Hanifi_Rohingya"],
        Hanunoo => ["Hano", "Hanunoo"],
        Hatran => ["Hatr", "Hatran"],
        Hebrew => ["Hebr", "Hebrew"],
        Hiragana => ["Hira", "Hiragana"],
        ImperialAramaic => ["Armi", "Imperial_Aramaic"],
        InscriptionalPahlavi => ["Phli", "Inscriptional_Pahlavi"],
        InscriptionalParthian => ["Prti", "Inscriptional_Parthian"],
        Javanese => ["Java", "Javanese"],
        Kaithi => ["Kthi", "Kaithi"],
        Kannada => ["Knda", "Kannada"],
        Katakana => ["Kana", "Katakana"],
        KatakanaOrHiragana => ["Hrkt", "Katakana_Or_Hiragana"],
        Kawi => ["Kawi", "Kawi"],
        KayahLi => ["Kali", "Kayah_Li"],
        Kharoshthi => ["Khar", "Kharoshthi"],
        KhitanSmallScript => ["Kits", "Khitan_Small_Script"],
        Khmer => ["Khmr", "Khmer"],
        Khojki => ["Khoj", "Khojki"],
        Khudawadi => ["Sind", "Khudawadi"],
        KiratRai => ["Krai", "Kirat_Rai"],
        Lao => ["Laoo", "Lao"],
        Latin => ["Latn", "Latin"],
        Lepcha => ["Lepc", "Lepcha"],
        Limbu => ["Limb", "Limbu"],
        LinearA => ["Lina", "Linear_A"],
        LinearB => ["Linb", "Linear_B"],
        Lisu => ["Lisu", "Lisu"],
        Lycian => ["Lyci", "Lycian"],
        Lydian => ["Lydi", "Lydian"],
        Mahajani => ["Mahj", "Mahajani"],
        Makasar => ["Maka", "Makasar"],
        Malayalam => ["Mlym", "Malayalam"],
        Mandaic => ["Mand", "Mandaic"],
        Manichaean => ["Mani", "Manichaean"],
        Marchen => ["Marc", "Marchen"],
        MasaramGondi => ["Gonm", "Masaram_Gondi"],
        Medefaidrin => ["Medf", "Medefaidrin"],
        MeeteiMayek => ["Mtei", "Meetei_Mayek"],
        MendeKikakui => ["Mend", "Mende_Kikakui"],
        MeroiticCursive => ["Merc", "Meroitic_Cursive"],
        MeroiticHieroglyphs => ["Mero", "Meroitic_Hieroglyphs"],
        Miao => ["Plrd", "Miao"],
        Modi => ["Modi", "Modi"],
        Mongolian => ["Mong", "Mongolian"],
        Mro => ["Mroo", "Mro"],
        Multani => ["Mult", "Multani"],
        Myanmar => ["Mymr", "Myanmar"],
        Nabataean => ["Nbat", "Nabataean"],
        NagMundari => ["Nagm", "Nag_Mundari"],
        Nandinagari => ["Nand", "Nandinagari"],
        NewTaiLue => ["Talu", "New_Tai_Lue"],
        Newa => ["Newa", "Newa"],
        Nko => ["Nkoo", "Nko"],
        Nushu => ["Nshu", "Nushu"],
        NyiakengPuachueHmong => ["Hmnp", "Nyiakeng_Puachue_Hmong"],
        Ogham => ["Ogam", "Ogham"],
        OlChiki => ["Olck", "Ol_Chiki"],
        OlOnal => ["Onao", "Ol_Onal"],
        OldHungarian => ["Hung", "Old_Hungarian"],
        OldItalic => ["Ital", "Old_Italic"],
        OldNorthArabian => ["Narb", "Old_North_Arabian"],
        OldPermic => ["Perm", "Old_Permic"],
        OldPersian => ["Xpeo", "Old_Persian"],
        OldSogdian => ["Sogo", "Old_Sogdian"],
        OldSouthArabian => ["Sarb", "Old_South_Arabian"],
        OldTurkic => ["Orkh", "Old_Turkic"],
        OldUyghur => ["Ougr", "Old_Uyghur"],
        Oriya => ["Orya", "Oriya"],
        Osage => ["Osge", "Osage"],
        Osmanya => ["Osma", "Osmanya"],
        PahawhHmong => ["Hmng", "Pahawh_Hmong"],
        Palmyrene => ["Palm", "Palmyrene"],
        PauCinHau => ["Pauc", "Pau_Cin_Hau"],
        PhagsPa => ["Phag", "Phags_Pa"],
        Phoenician => ["Phnx", "Phoenician"],
        PsalterPahlavi => ["Phlp", "Psalter_Pahlavi"],
        Rejang => ["Rjng", "Rejang"],
        Runic => ["Runr", "Runic"],
        Samaritan => ["Samr", "Samaritan"],
        Saurashtra => ["Saur", "Saurashtra"],
        Sharada => ["Shrd", "Sharada"],
        Shavian => ["Shaw", "Shavian"],
        Siddham => ["Sidd", "Siddham"],
        SignWriting => ["Sgnw", "SignWriting"],
        Sinhala => ["Sinh", "Sinhala"],
        Sogdian => ["Sogd", "Sogdian"],
        SoraSompeng => ["Sora", "Sora_Sompeng"],
        Soyombo => ["Soyo", "Soyombo"],
        Sundanese => ["Sund", "Sundanese"],
        Sunuwar => ["Sunu", "Sunuwar"],
        SylotiNagri => ["Sylo", "Syloti_Nagri"],
        Syriac => ["Syrc", "Syriac"],
        Tagalog => ["Tglg", "Tagalog"],
        Tagbanwa => ["Tagb", "Tagbanwa"],
        TaiLe => ["Tale", "Tai_Le"],
        TaiTham => ["Lana", "Tai_Tham"],
        TaiViet => ["Tavt", "Tai_Viet"],
        Takri => ["Takr", "Takri"],
        Tamil => ["Taml", "Tamil"],
        Tangsa => ["Tnsa", "Tangsa"],
        Tangut => ["Tang", "Tangut"],
        Telugu => ["Telu", "Telugu"],
        Thaana => ["Thaa", "Thaana"],
        Thai => ["Thai", "Thai"],
        Tibetan => ["Tibt", "Tibetan"],
        Tifinagh => ["Tfng", "Tifinagh"],
        Tirhuta => ["Tirh", "Tirhuta"],
        Todhri => ["Todr", "Todhri"],
        Toto => ["Toto", "Toto"],
        TuluTigalari => ["Tutg", "Tulu_Tigalari"],
        Ugaritic => ["Ugar", "Ugaritic"],
        Vai => ["Vaii", "Vai"],
        Vithkuqi => ["Vith", "Vithkuqi"],
        Wancho => ["Wcho", "Wancho"],
        WarangCiti => ["Wara", "Warang_Citi"],
        Yezidi => ["Yezi", "Yezidi"],
        Yi => ["Yiii", "Yi"],
        ZanabazarSquare => ["Zanb", "Zanabazar_Square"],
    }
}

impl Script {
    /// ISO 15924 code, e.g. `Latn`.
    pub fn iso_code(self) -> &'static str {
        self.short_name()
    }

    /// UCD long name, e.g. `Old_Italic`.
    pub fn long_name(self) -> &'static str {
        self.aliases()[1]
    }

    /// Common and Inherited take their effective script from context.
    pub fn is_shared(self) -> bool {
        matches!(self, Script::Common | Script::Inherited)
    }
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.long_name())
    }
}
