//! Transport types for portal positions.
//!
//! - `transport`: the closed set of transport types and their localization keys
//! - `i18n`: languages, label tables and key validation
//! - `catalog`: dofus-portals identifier mapping
//! - `source`: portal data source metadata
//! - `config`: environment configuration

pub mod catalog;
pub mod config;
pub mod i18n;
pub mod source;
pub mod transport;
