//! Internationalization (i18n) module for transport labels.
//!
//! Transport types only carry a localization key; this module owns the
//! languages, the per-language label tables, and the lookup that turns a
//! key into display text.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Validated Language type
//! - `strings`: Static label tables, one per language
//! - `localizer`: Key lookup with canonical-language fallback
//! - `validator`: Consistency checks between transport keys and label tables
//! - `metrics`: Lookup counters
//!
//! # Example
//!
//! ```rust
//! use kaelly_transports::i18n::{translate, Language, MultilingualEnum};
//! use kaelly_transports::transport::TransportType;
//!
//! let english = Language::from_code("en").unwrap();
//! assert_eq!(translate("transport_type.skis", english).unwrap(), "Skis");
//! assert_eq!(TransportType::Zaap.label(Language::canonical()).unwrap(), "Zaap");
//! ```

mod error;
mod language;
mod localizer;
mod metrics;
mod registry;
mod strings;
mod validator;

pub use error::LocalizationError;
pub use language::Language;
pub use localizer::{translate, MultilingualEnum};
pub use metrics::{LookupMetrics, MetricsReport};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use strings::LocalizationTable;
pub use validator::{KeyValidator, ValidationReport};
