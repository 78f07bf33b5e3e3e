use crate::i18n::Language;

/// Localized labels for one language, keyed by localization key.
#[derive(Debug, Clone, Copy)]
pub struct LocalizationTable {
    /// ISO 639-1 code of the language this table belongs to
    pub language: &'static str,

    /// `(key, label)` pairs
    pub entries: &'static [(&'static str, &'static str)],
}

impl LocalizationTable {
    /// Table for a language.
    ///
    /// # Returns
    /// * `Some(&LocalizationTable)` if labels exist for the language
    /// * `None` if no table was written for it
    pub fn for_language(language: Language) -> Option<&'static LocalizationTable> {
        TABLES.iter().find(|table| table.language == language.code())
    }

    /// Every table, in registry order.
    pub fn all() -> &'static [LocalizationTable] {
        TABLES
    }

    /// Label for a key, if this table has one.
    pub fn get(&self, key: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(entry_key, _)| *entry_key == key)
            .map(|(_, label)| *label)
    }

    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|(key, _)| *key)
    }
}

static TABLES: &[LocalizationTable] = &[FRENCH_TABLE, ENGLISH_TABLE, SPANISH_TABLE];

// ==================== French Labels ====================

/// French labels (canonical)
pub const FRENCH_TABLE: LocalizationTable = LocalizationTable {
    language: "fr",
    entries: &[
        ("transport_type.zaap", "Zaap"),
        ("transport_type.foreuse", "Foreuse"),
        ("transport_type.diligence", "Diligence"),
        ("transport_type.brigandin", "Brigandin"),
        ("transport_type.transporteur_frigostien", "Transporteur frigostien"),
        ("transport_type.skis", "Skis"),
        ("transport_type.scaeroplane", "Scaéroplane"),
        ("transport_type.char_a_voile", "Char à voile"),
    ],
};

// ==================== English Labels ====================

pub const ENGLISH_TABLE: LocalizationTable = LocalizationTable {
    language: "en",
    entries: &[
        ("transport_type.zaap", "Zaap"),
        ("transport_type.foreuse", "Drill"),
        ("transport_type.diligence", "Stagecoach"),
        ("transport_type.brigandin", "Brigantine"),
        ("transport_type.transporteur_frigostien", "Frigost Transporter"),
        ("transport_type.skis", "Skis"),
        ("transport_type.scaeroplane", "Scaeroplane"),
        ("transport_type.char_a_voile", "Land Yacht"),
    ],
};

// ==================== Spanish Labels ====================

pub const SPANISH_TABLE: LocalizationTable = LocalizationTable {
    language: "es",
    entries: &[
        ("transport_type.zaap", "Zaap"),
        ("transport_type.foreuse", "Perforadora"),
        ("transport_type.diligence", "Diligencia"),
        ("transport_type.brigandin", "Bergantín"),
        ("transport_type.transporteur_frigostien", "Transportador frigostiano"),
        ("transport_type.skis", "Esquís"),
        ("transport_type.scaeroplane", "Escaeroplano"),
        ("transport_type.char_a_voile", "Carro de vela"),
    ],
};
