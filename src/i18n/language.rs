//! Language type: a language code validated against the registry.

use crate::i18n::{LanguageConfig, LanguageRegistry, LocalizationError};
use std::fmt;

/// A validated language.
///
/// Only codes that are registered and enabled can be turned into a `Language`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "fr", "en")
    code: &'static str,
}

impl Language {
    pub const FRENCH: Language = Language { code: "fr" };
    pub const ENGLISH: Language = Language { code: "en" };
    pub const SPANISH: Language = Language { code: "es" };

    /// Create a Language from a language code string.
    ///
    /// # Arguments
    /// * `code` - The ISO 639-1 language code (e.g., "fr", "es")
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err(UnknownLanguage)` if the code is not registered
    /// * `Err(LanguageDisabled)` if the language exists but is disabled
    pub fn from_code(code: &str) -> Result<Language, LocalizationError> {
        Self::from_code_in(LanguageRegistry::get(), code)
    }

    fn from_code_in(
        registry: &LanguageRegistry,
        code: &str,
    ) -> Result<Language, LocalizationError> {
        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => Err(LocalizationError::LanguageDisabled(code.to_string())),
            None => Err(LocalizationError::UnknownLanguage(code.to_string())),
        }
    }

    /// Get the canonical language.
    ///
    /// Labels missing from a language table fall back to this language.
    ///
    /// # Returns
    /// The canonical Language (French).
    pub fn canonical() -> Language {
        Language {
            code: LanguageRegistry::get().canonical().code,
        }
    }

    /// Get every enabled language.
    ///
    /// # Returns
    /// The enabled languages, in registry order.
    pub fn enabled() -> Vec<Language> {
        LanguageRegistry::get()
            .list_enabled()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    /// Get the ISO 639-1 language code.
    ///
    /// # Returns
    /// The language code as a static string (e.g., "fr", "es").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Full registry entry for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which cannot happen
    /// for a `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language (e.g., "French").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Get the native name of the language (e.g., "Español").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Check if this is the canonical language.
    ///
    /// # Returns
    /// `true` if labels fall back to this language, `false` otherwise.
    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}
