//! Static reference tables for Ghanaian language detection.
//!
//! Declaration order matters: when two languages share a phone prefix
//! or tie on a text score, the first entry wins.

/// Fallback when no signal resolves.
pub const DEFAULT_LANGUAGE: &str = "English";

/// Keyword, pattern, and phone-prefix evidence for one language.
pub(crate) struct LanguageEntry {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
    pub patterns: &'static [&'static str],
    pub phone_prefixes: &'static [&'static str],
}

pub(crate) const LEXICON: &[LanguageEntry] = &[
    LanguageEntry {
        name: "Twi",
        keywords: &[
            "wo", "me", "yɛ", "ɔ", "ne", "na", "sɛ", "akye", "maakye", "meda", "ase",
        ],
        patterns: &[r"\bwo\b", r"\bme\b", r"\byɛ\b", r"\bɔ\b", r"\bne\b"],
        phone_prefixes: &["024", "054", "055"],
    },
    LanguageEntry {
        name: "Ga",
        keywords: &["ni", "mi", "ko", "le", "he", "ojekoo", "oyiwaladonɔ"],
        patterns: &[r"\bni\b", r"\bmi\b", r"\bko\b", r"\ble\b"],
        phone_prefixes: &["020", "050"],
    },
    LanguageEntry {
        name: "Ewe",
        keywords: &["nye", "wò", "le", "na", "ɖe", "ŋdi", "akpe"],
        patterns: &[r"\bnye\b", r"\bwò\b", r"\ble\b", r"\bɖe\b"],
        phone_prefixes: &["027", "057"],
    },
    LanguageEntry {
        name: "Dagbani",
        keywords: &["n", "a", "o", "ni", "ka", "ti", "desiba"],
        patterns: &[r"\bni\b", r"\bka\b", r"\bti\b"],
        phone_prefixes: &["026", "056"],
    },
    LanguageEntry {
        name: "Hausa",
        keywords: &["na", "ka", "ya", "ta", "mu", "ku", "su", "sannu"],
        patterns: &[r"\bna\b", r"\bka\b", r"\bya\b"],
        phone_prefixes: &["026", "056"],
    },
    LanguageEntry {
        name: "Fante",
        keywords: &["me", "wo", "ɔ", "ye", "dɔ", "edziban"],
        patterns: &[r"\bme\b", r"\bwo\b", r"\bye\b"],
        phone_prefixes: &["024", "054"],
    },
];

/// Administrative region to dominant-language map.
pub(crate) const REGION_LANGUAGES: &[(&str, &str)] = &[
    ("Ashanti", "Twi"),
    ("Brong Ahafo", "Twi"),
    ("Bono", "Twi"),
    ("Bono East", "Twi"),
    ("Ahafo", "Twi"),
    ("Eastern", "Twi"),
    ("Greater Accra", "Ga"),
    ("Volta", "Ewe"),
    ("Oti", "Ewe"),
    ("Northern", "Dagbani"),
    ("Upper East", "Dagbani"),
    ("Upper West", "Dagbani"),
    ("Savannah", "Gonja"),
    ("North East", "Dagbani"),
    ("Central", "Fante"),
    ("Western", "Fante"),
];

pub(crate) fn region_language(region: &str) -> Option<&'static str> {
    REGION_LANGUAGES
        .iter()
        .find(|(name, _)| *name == region)
        .map(|(_, language)| *language)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_lookup_is_exact_match() {
        assert_eq!(region_language("Volta"), Some("Ewe"));
        assert_eq!(region_language("Savannah"), Some("Gonja"));
        assert_eq!(region_language("volta"), None);
    }

    #[test]
    fn every_entry_has_evidence() {
        for entry in LEXICON {
            assert!(!entry.keywords.is_empty(), "{} has no keywords", entry.name);
            assert!(!entry.patterns.is_empty(), "{} has no patterns", entry.name);
            assert!(
                !entry.phone_prefixes.is_empty(),
                "{} has no phone prefixes",
                entry.name
            );
        }
    }
}
