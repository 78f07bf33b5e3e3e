//! Mapping between dofus-portals transport identifiers and transport types.
//!
//! Portal positions scraped from dofus-portals name their transport with the
//! site's own identifier. The catalog maps those onto [`TransportType`] so the
//! rest of the bot only deals with internal ids.

use crate::transport::TransportType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors raised while loading a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read transport mapping file '{path}'")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid transport mapping")]
    Parse(#[from] serde_json::Error),
}

/// One row of the mapping: an internal transport type and its dofus-portals id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransportTypeEntity {
    pub id: TransportType,
    pub dofus_portals_id: String,
}

/// Lookup table keyed by dofus-portals id.
#[derive(Debug, Clone, Default)]
pub struct TransportCatalog {
    by_dofus_portals_id: HashMap<String, TransportTypeEntity>,
}

impl TransportCatalog {
    /// Build a catalog from entities. A repeated dofus-portals id replaces
    /// the earlier entry.
    pub fn new(entities: impl IntoIterator<Item = TransportTypeEntity>) -> Self {
        let mut by_dofus_portals_id = HashMap::new();

        for entity in entities {
            let dofus_portals_id = entity.dofus_portals_id.clone();
            if let Some(previous) = by_dofus_portals_id.insert(dofus_portals_id, entity) {
                warn!(
                    dofus_portals_id = %previous.dofus_portals_id,
                    replaced = previous.id.name(),
                    "Duplicate dofusPortalsId in transport mapping, keeping the last one"
                );
            }
        }

        debug!("Transport catalog built with {} entries", by_dofus_portals_id.len());
        Self {
            by_dofus_portals_id,
        }
    }

    /// Catalog mapping each transport type's lower-case name to itself
    /// (`"zaap"`, `"char_a_voile"`, ...).
    pub fn identity() -> Self {
        Self::new(TransportType::iter().map(|transport| TransportTypeEntity {
            id: transport,
            dofus_portals_id: transport.name().to_ascii_lowercase(),
        }))
    }

    /// Parse a JSON array of `{ "id": "ZAAP", "dofusPortalsId": "zaap" }`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let entities: Vec<TransportTypeEntity> = serde_json::from_str(json)?;
        Ok(Self::new(entities))
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let catalog = Self::from_json_str(&json)?;
        info!(
            "Loaded {} transport mappings from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    pub fn find_by_dofus_portals_id(&self, dofus_portals_id: &str) -> Option<&TransportTypeEntity> {
        self.by_dofus_portals_id.get(dofus_portals_id)
    }

    /// Internal id for a dofus-portals id.
    ///
    /// Unknown ids are passed through unchanged so a portal is never dropped
    /// because of a missing mapping.
    pub fn internal_id(&self, dofus_portals_id: &str) -> String {
        match self.find_by_dofus_portals_id(dofus_portals_id) {
            Some(entity) => entity.id.name().to_string(),
            None => {
                warn!(
                    dofus_portals_id = dofus_portals_id,
                    "TransportType not found with following dofusPortalsId, using it as internal one"
                );
                dofus_portals_id.to_string()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.by_dofus_portals_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_dofus_portals_id.is_empty()
    }

    /// Entities in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &TransportTypeEntity> {
        self.by_dofus_portals_id.values()
    }
}
