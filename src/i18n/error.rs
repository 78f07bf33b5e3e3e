use thiserror::Error;

/// Errors raised by language resolution and label lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocalizationError {
    #[error("Unknown language code: '{0}'")]
    UnknownLanguage(String),

    #[error("Language '{0}' is not enabled")]
    LanguageDisabled(String),

    /// The key exists neither in the requested nor in the canonical table.
    #[error("No translation for key '{key}' (language '{language}')")]
    MissingKey { key: String, language: &'static str },
}
