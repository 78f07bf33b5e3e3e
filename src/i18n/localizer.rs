use crate::i18n::{Language, LocalizationError, LocalizationTable, LookupMetrics};
use tracing::{debug, warn};

/// A closed set of values that each carry a localization key.
pub trait MultilingualEnum {
    /// Stable key into the localization tables.
    fn key(&self) -> &'static str;

    /// Label for this value in the given language.
    fn label(&self, language: Language) -> Result<&'static str, LocalizationError> {
        translate(self.key(), language)
    }
}

/// Look a key up in the table of `language`.
///
/// Falls back to the canonical language when the requested table lacks the
/// key, and fails only when no table has it.
pub fn translate(key: &str, language: Language) -> Result<&'static str, LocalizationError> {
    translate_in(LocalizationTable::all(), key, language)
}

fn translate_in(
    tables: &'static [LocalizationTable],
    key: &str,
    language: Language,
) -> Result<&'static str, LocalizationError> {
    let metrics = LookupMetrics::global();
    let lookup = |code: &str| {
        tables
            .iter()
            .find(|table| table.language == code)
            .and_then(|table| table.get(key))
    };

    if let Some(label) = lookup(language.code()) {
        metrics.record_hit();
        return Ok(label);
    }

    let canonical = Language::canonical();
    if language != canonical {
        if let Some(label) = lookup(canonical.code()) {
            warn!(
                key = key,
                language = language.code(),
                "Translation missing, falling back to {}",
                canonical.code()
            );
            metrics.record_fallback();
            return Ok(label);
        }
    }

    debug!(key = key, language = language.code(), "Unknown localization key");
    metrics.record_miss();
    Err(LocalizationError::MissingKey {
        key: key.to_string(),
        language: language.code(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::TransportType;
    use serial_test::serial;

    #[test]
    #[serial(lookup_metrics)]
    fn test_translate_french() {
        assert_eq!(
            translate("transport_type.transporteur_frigostien", Language::FRENCH),
            Ok("Transporteur frigostien")
        );
    }

    #[test]
    #[serial(lookup_metrics)]
    fn test_translate_english() {
        assert_eq!(
            translate("transport_type.char_a_voile", Language::ENGLISH),
            Ok("Land Yacht")
        );
    }

    #[test]
    #[serial(lookup_metrics)]
    fn test_translate_unknown_key() {
        let result = translate("transport_type.unknown", Language::SPANISH);
        assert_eq!(
            result,
            Err(LocalizationError::MissingKey {
                key: "transport_type.unknown".to_string(),
                language: "es",
            })
        );
    }

    #[test]
    #[serial(lookup_metrics)]
    fn test_translate_records_metrics() {
        let metrics = LookupMetrics::global();
        metrics.reset();

        let _ = translate("transport_type.zaap", Language::ENGLISH);
        let _ = translate("nope", Language::ENGLISH);

        assert_eq!(metrics.hits(), 1);
        assert_eq!(metrics.misses(), 1);
        assert_eq!(metrics.fallbacks(), 0);
    }

    static PARTIAL_TABLES: &[LocalizationTable] = &[
        LocalizationTable {
            language: "fr",
            entries: &[
                ("transport_type.zaap", "Zaap"),
                ("transport_type.foreuse", "Foreuse"),
            ],
        },
        LocalizationTable {
            language: "en",
            entries: &[("transport_type.zaap", "Zaap")],
        },
    ];

    #[test]
    #[serial(lookup_metrics)]
    fn test_translate_falls_back_to_canonical() {
        let metrics = LookupMetrics::global();
        metrics.reset();

        let label = translate_in(PARTIAL_TABLES, "transport_type.foreuse", Language::ENGLISH);
        assert_eq!(label, Ok("Foreuse"));
        assert_eq!(metrics.fallbacks(), 1);
    }

    #[test]
    #[serial(lookup_metrics)]
    fn test_translate_missing_table_falls_back() {
        let label = translate_in(PARTIAL_TABLES, "transport_type.zaap", Language::SPANISH);
        assert_eq!(label, Ok("Zaap"));
    }

    #[test]
    #[serial(lookup_metrics)]
    fn test_translate_canonical_miss_does_not_retry() {
        let metrics = LookupMetrics::global();
        metrics.reset();

        let result = translate_in(PARTIAL_TABLES, "transport_type.skis", Language::FRENCH);
        assert!(result.is_err());
        assert_eq!(metrics.misses(), 1);
        assert_eq!(metrics.fallbacks(), 0);
    }

    #[test]
    #[serial(lookup_metrics)]
    fn test_every_transport_has_a_label_in_every_language() {
        for language in Language::enabled() {
            for transport in TransportType::iter() {
                let label = transport.label(language).expect("label should exist");
                assert!(!label.is_empty());
            }
        }
    }

    #[test]
    #[serial(lookup_metrics)]
    fn test_label_spanish() {
        assert_eq!(TransportType::Skis.label(Language::SPANISH), Ok("Esquís"));
    }
}
