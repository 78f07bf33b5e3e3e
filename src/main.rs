//! Transport types CLI
//!
//! Usage:
//!   transport-types list [lang]              # All transport types with their labels
//!   transport-types resolve <input> [lang]   # Resolve a key or constant name
//!   transport-types map <dofus_portals_id>   # Internal id for a dofus-portals id
//!   transport-types validate                 # Check keys against label tables
//!
//! Optional environment variables:
//! - LOG_LEVEL (defaults to info, ignored when RUST_LOG is set)
//! - DEFAULT_LANGUAGE (defaults to fr)
//! - TRANSPORT_MAPPING_FILE (identity mapping when unset, see data/transports.json)

use anyhow::{bail, Context, Result};
use kaelly_transports::catalog::TransportCatalog;
use kaelly_transports::config::Config;
use kaelly_transports::i18n::{KeyValidator, Language, MultilingualEnum};
use kaelly_transports::source::Source;
use kaelly_transports::transport::TransportType;
use tracing::{error, info, warn};

const USAGE: &str = "Usage: transport-types <list [lang] | resolve <input> [lang] | map <dofus_portals_id> | validate>";

fn main() -> Result<()> {
    // Load .env file (ignored when absent)
    let _ = dotenvy::dotenv();

    let config = Config::from_env()?;

    // RUST_LOG takes precedence over LOG_LEVEL
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::try_new(config.log_filter())?)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match args.as_slice() {
        ["list"] => list(config.default_language),
        ["list", lang] => list(Language::from_code(lang)?),
        ["resolve", input] => resolve(input, config.default_language),
        ["resolve", input, lang] => resolve(input, Language::from_code(lang)?),
        ["map", dofus_portals_id] => map(&config, dofus_portals_id),
        ["validate"] => validate(),
        _ => bail!(USAGE),
    }
}

fn list(language: Language) -> Result<()> {
    info!("Listing transport types in {}", language.name());

    for transport in TransportType::iter() {
        println!(
            "{:<14} {:<42} {}",
            transport.name(),
            transport.key(),
            transport.label(language)?
        );
    }
    Ok(())
}

fn resolve(input: &str, language: Language) -> Result<()> {
    let transport: TransportType = input.parse()?;
    println!("{} ({})", transport.label(language)?, transport.name());
    Ok(())
}

fn map(config: &Config, dofus_portals_id: &str) -> Result<()> {
    let catalog = match &config.transport_mapping_file {
        Some(path) => TransportCatalog::from_json_file(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => {
            warn!("TRANSPORT_MAPPING_FILE not set, using identity mapping");
            TransportCatalog::identity()
        }
    };

    info!("Mapping transport id from {}", Source::dofus_portals().name);
    println!("{}", catalog.internal_id(dofus_portals_id));
    Ok(())
}

fn validate() -> Result<()> {
    let report = KeyValidator::validate_all();

    for warning in &report.warnings {
        warn!("{}", warning);
    }
    for err in &report.errors {
        error!("{}", err);
    }

    if report.has_errors() {
        bail!("{} localization error(s)", report.errors.len());
    }

    info!(
        "✓ {} transport keys valid across {} languages",
        TransportType::all().len(),
        Language::enabled().len()
    );
    Ok(())
}
