//! Transport types: the closed set of ways a portal position can be reached.
//!
//! Each variant carries a stable localization key (`transport_type.<name>`)
//! that the [`crate::i18n`] tables resolve into a human-readable label.

use crate::i18n::MultilingualEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when resolving a transport type from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("Unknown transport type: '{0}'")]
    UnknownTransportType(String),
}

/// In-game transportation modes.
///
/// Serialized as the constant name (`"ZAAP"`, `"CHAR_A_VOILE"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportType {
    Zaap,
    Foreuse,
    Diligence,
    Brigandin,
    Frigostien,
    Skis,
    Scaeroplane,
    CharAVoile,
}

/// Every variant, in declaration order.
const ALL: [TransportType; 8] = [
    TransportType::Zaap,
    TransportType::Foreuse,
    TransportType::Diligence,
    TransportType::Brigandin,
    TransportType::Frigostien,
    TransportType::Skis,
    TransportType::Scaeroplane,
    TransportType::CharAVoile,
];

impl TransportType {
    /// All transport types in declaration order.
    pub fn all() -> &'static [TransportType] {
        &ALL
    }

    /// Iterate over all transport types in declaration order.
    ///
    /// Each call returns a fresh iterator.
    pub fn iter() -> impl Iterator<Item = TransportType> {
        ALL.iter().copied()
    }

    /// Localization key, e.g. `"transport_type.zaap"`.
    pub fn key(self) -> &'static str {
        match self {
            TransportType::Zaap => "transport_type.zaap",
            TransportType::Foreuse => "transport_type.foreuse",
            TransportType::Diligence => "transport_type.diligence",
            TransportType::Brigandin => "transport_type.brigandin",
            TransportType::Frigostien => "transport_type.transporteur_frigostien",
            TransportType::Skis => "transport_type.skis",
            TransportType::Scaeroplane => "transport_type.scaeroplane",
            TransportType::CharAVoile => "transport_type.char_a_voile",
        }
    }

    /// Constant name, e.g. `"CHAR_A_VOILE"`.
    pub fn name(self) -> &'static str {
        match self {
            TransportType::Zaap => "ZAAP",
            TransportType::Foreuse => "FOREUSE",
            TransportType::Diligence => "DILIGENCE",
            TransportType::Brigandin => "BRIGANDIN",
            TransportType::Frigostien => "FRIGOSTIEN",
            TransportType::Skis => "SKIS",
            TransportType::Scaeroplane => "SCAEROPLANE",
            TransportType::CharAVoile => "CHAR_A_VOILE",
        }
    }

    /// Resolve a transport type from its localization key.
    ///
    /// Matching is exact and case-sensitive.
    ///
    /// # Example
    /// ```
    /// use kaelly_transports::transport::TransportType;
    ///
    /// let skis = TransportType::from_key("transport_type.skis").unwrap();
    /// assert_eq!(skis, TransportType::Skis);
    /// ```
    pub fn from_key(key: &str) -> Result<TransportType, TransportError> {
        Self::iter()
            .find(|transport| transport.key() == key)
            .ok_or_else(|| TransportError::UnknownTransportType(key.to_string()))
    }

    /// Resolve a transport type from its constant name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Result<TransportType, TransportError> {
        Self::iter()
            .find(|transport| transport.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| TransportError::UnknownTransportType(name.to_string()))
    }
}

impl MultilingualEnum for TransportType {
    fn key(&self) -> &'static str {
        TransportType::key(*self)
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for TransportType {
    type Err = TransportError;

    /// Accepts either a localization key or a constant name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_key(s).or_else(|_| Self::from_name(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // ==================== Key Tests ====================

    #[test]
    fn test_key_zaap() {
        assert_eq!(TransportType::Zaap.key(), "transport_type.zaap");
    }

    #[test]
    fn test_key_frigostien_uses_transporteur_prefix() {
        assert_eq!(
            TransportType::Frigostien.key(),
            "transport_type.transporteur_frigostien"
        );
    }

    #[test]
    fn test_keys_are_unique() {
        let keys: HashSet<_> = TransportType::iter().map(TransportType::key).collect();
        assert_eq!(keys.len(), TransportType::all().len());
    }

    #[test]
    fn test_keys_have_prefix() {
        for transport in TransportType::iter() {
            let key = transport.key();
            assert!(key.starts_with("transport_type."), "bad key: {}", key);
            assert!(key.len() > "transport_type.".len());
        }
    }

    // ==================== Enumeration Tests ====================

    #[test]
    fn test_all_has_eight_variants() {
        assert_eq!(TransportType::all().len(), 8);
    }

    #[test]
    fn test_all_declaration_order() {
        let names: Vec<_> = TransportType::iter().map(TransportType::name).collect();
        assert_eq!(
            names,
            vec![
                "ZAAP",
                "FOREUSE",
                "DILIGENCE",
                "BRIGANDIN",
                "FRIGOSTIEN",
                "SKIS",
                "SCAEROPLANE",
                "CHAR_A_VOILE"
            ]
        );
    }

    #[test]
    fn test_iter_is_restartable() {
        let first: Vec<_> = TransportType::iter().collect();
        let second: Vec<_> = TransportType::iter().collect();
        assert_eq!(first, second);
        assert_eq!(first.as_slice(), TransportType::all());
    }

    // ==================== Resolution Tests ====================

    #[test]
    fn test_from_key_skis() {
        assert_eq!(
            TransportType::from_key("transport_type.skis"),
            Ok(TransportType::Skis)
        );
    }

    #[test]
    fn test_from_key_unknown() {
        let result = TransportType::from_key("transport_type.unknown");
        assert_eq!(
            result,
            Err(TransportError::UnknownTransportType(
                "transport_type.unknown".to_string()
            ))
        );
    }

    #[test]
    fn test_from_key_is_case_sensitive() {
        assert!(TransportType::from_key("transport_type.ZAAP").is_err());
    }

    #[test]
    fn test_from_key_round_trip() {
        for transport in TransportType::iter() {
            assert_eq!(TransportType::from_key(transport.key()), Ok(transport));
        }
    }

    #[test]
    fn test_from_name_ignores_case() {
        assert_eq!(
            TransportType::from_name("char_a_voile"),
            Ok(TransportType::CharAVoile)
        );
        assert_eq!(
            TransportType::from_name("Scaeroplane"),
            Ok(TransportType::Scaeroplane)
        );
    }

    #[test]
    fn test_from_name_empty() {
        assert!(TransportType::from_name("").is_err());
    }

    #[test]
    fn test_from_str_accepts_key_and_name() {
        assert_eq!("transport_type.brigandin".parse(), Ok(TransportType::Brigandin));
        assert_eq!("BRIGANDIN".parse(), Ok(TransportType::Brigandin));
        assert!("brigantin".parse::<TransportType>().is_err());
    }

    #[test]
    fn test_error_message() {
        let err = TransportType::from_key("nope").unwrap_err();
        assert_eq!(err.to_string(), "Unknown transport type: 'nope'");
    }

    // ==================== Trait Tests ====================

    #[test]
    fn test_display_renders_key() {
        assert_eq!(TransportType::Diligence.to_string(), "transport_type.diligence");
    }

    #[test]
    fn test_multilingual_key_matches_inherent_key() {
        for transport in TransportType::iter() {
            assert_eq!(MultilingualEnum::key(&transport), transport.key());
        }
    }

    #[test]
    fn test_serialize_as_constant_name() {
        let json = serde_json::to_string(&TransportType::CharAVoile).expect("Should serialize");
        assert_eq!(json, "\"CHAR_A_VOILE\"");
    }

    #[test]
    fn test_serde_names_match_name() {
        for transport in TransportType::iter() {
            let json = serde_json::to_string(&transport).expect("Should serialize");
            assert_eq!(json, format!("\"{}\"", transport.name()));
        }
    }

    #[test]
    fn test_deserialize_unknown_fails() {
        let result: Result<TransportType, _> = serde_json::from_str("\"TELEPORTER\"");
        assert!(result.is_err());
    }
}
