use crate::i18n::Language;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone)]
pub struct Config {
    // Logging
    pub log_level: String,
    pub rust_log: Option<String>,

    // Localization
    pub default_language: Language,

    // dofus-portals mapping; the identity catalog is used when unset
    pub transport_mapping_file: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let log_level = std::env::var("LOG_LEVEL")
            .map(|v| v.to_ascii_lowercase())
            .unwrap_or_else(|_| "info".to_string());
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            bail!(
                "LOG_LEVEL must be one of {:?}, got '{}'",
                LOG_LEVELS,
                log_level
            );
        }

        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(&code).context("Invalid DEFAULT_LANGUAGE")?,
            Err(_) => Language::canonical(),
        };

        Ok(Self {
            log_level,
            rust_log: std::env::var("RUST_LOG").ok().filter(|v| !v.is_empty()),
            default_language,
            transport_mapping_file: std::env::var("TRANSPORT_MAPPING_FILE")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        })
    }

    /// Filter directives for the log subscriber.
    ///
    /// `RUST_LOG` wins when set; otherwise the crate and binary targets log
    /// at `LOG_LEVEL`.
    pub fn log_filter(&self) -> String {
        match &self.rust_log {
            Some(directives) => directives.clone(),
            None => format!(
                "kaelly_transports={level},transport_types={level}",
                level = self.log_level
            ),
        }
    }
}
