//! Consistency checks between transport keys and the label tables.
//!
//! Every key must be well-formed, unique, and translated in every enabled
//! language. Table entries no transport type uses are reported as warnings.

use crate::i18n::{Language, LocalizationTable};
use crate::transport::TransportType;
use regex::Regex;
use std::collections::HashSet;
use std::sync::OnceLock;

const KEY_PREFIX: &str = "transport_type.";

/// Validation report containing errors and warnings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Problems that break label lookup
    pub errors: Vec<String>,

    /// Suspicious but harmless findings
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// No errors and no warnings.
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for localization keys.
#[derive(Debug)]
pub struct KeyValidator;

static KEY_REGEX: OnceLock<Regex> = OnceLock::new();

impl KeyValidator {
    /// Validate every transport type against every enabled language table.
    pub fn validate_all() -> ValidationReport {
        let keys: Vec<&str> = TransportType::iter().map(TransportType::key).collect();
        let languages: Vec<&str> = Language::enabled()
            .iter()
            .map(|language| language.code())
            .collect();

        Self::validate(&keys, &languages, LocalizationTable::all())
    }

    /// Validate a set of keys against the tables of the given languages.
    ///
    /// # Arguments
    /// * `keys` - Localization keys that must be translated
    /// * `languages` - Codes of the languages that must provide a table
    /// * `tables` - Available label tables; tables for other languages are ignored
    pub fn validate(
        keys: &[&str],
        languages: &[&str],
        tables: &[LocalizationTable],
    ) -> ValidationReport {
        let mut report = ValidationReport::new();

        // Key format
        for key in keys {
            if !Self::is_well_formed(key) {
                report.errors.push(format!("Malformed key: '{}'", key));
            }
        }

        // Uniqueness
        let mut seen = HashSet::new();
        for key in keys {
            if !seen.insert(*key) {
                report.errors.push(format!("Duplicate key: '{}'", key));
            }
        }

        for code in languages {
            let Some(table) = tables.iter().find(|table| table.language == *code) else {
                report
                    .errors
                    .push(format!("No label table for enabled language '{}'", code));
                continue;
            };

            // Coverage
            for key in &seen {
                match table.get(key) {
                    None => report.errors.push(format!(
                        "Key '{}' missing from '{}' table",
                        key, table.language
                    )),
                    Some("") => report.errors.push(format!(
                        "Empty label for key '{}' in '{}' table",
                        key, table.language
                    )),
                    Some(_) => {}
                }
            }

            // Orphans
            for key in table.keys() {
                if key.starts_with(KEY_PREFIX) && !seen.contains(key) {
                    report.warnings.push(format!(
                        "Unused key '{}' in '{}' table",
                        key, table.language
                    ));
                }
            }
        }

        // HashSet iteration order is unstable
        report.errors.sort();
        report.warnings.sort();
        report
    }

    /// `transport_type.<lowercase_identifier>`
    pub fn is_well_formed(key: &str) -> bool {
        let regex =
            KEY_REGEX.get_or_init(|| Regex::new(r"^transport_type\.[a-z][a-z0-9_]*$").unwrap());
        regex.is_match(key)
    }
}
