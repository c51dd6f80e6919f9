//! Location records.

use crate::{CanonRecord, EntityKind, scalar};
use serde::{Deserialize, Serialize};

/// A canonical location.
///
/// `connected_to` is a directed adjacency list; its targets are not checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Location {
    /// Unique identifier (`L-<UPPERCASE>`)
    id: String,
    /// Display name
    #[serde(default, deserialize_with = "scalar::text")]
    name: String,
    /// Descriptive prose
    #[serde(default, deserialize_with = "scalar::text")]
    description: String,
    /// Region of the world
    #[serde(default, deserialize_with = "scalar::text")]
    region: String,
    /// Narrative significance
    #[serde(default, deserialize_with = "scalar::text")]
    significance: String,
    /// Identifiers of reachable locations
    #[serde(default)]
    connected_to: Vec<String>,
}

impl CanonRecord for Location {
    const KIND: EntityKind = EntityKind::Location;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn from_id(id: String) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }
}
