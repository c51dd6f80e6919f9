//! Theme records.

use crate::{CanonRecord, EntityKind, scalar};
use serde::{Deserialize, Serialize};

/// A canonical theme.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Theme {
    /// Unique identifier (`T-<UPPERCASE>`)
    id: String,
    /// Display name
    #[serde(default, deserialize_with = "scalar::text")]
    name: String,
    /// Descriptive prose
    #[serde(default, deserialize_with = "scalar::text")]
    description: String,
    /// Illustrative moments
    #[serde(default)]
    examples: Vec<String>,
    /// Narrative significance
    #[serde(default, deserialize_with = "scalar::text")]
    significance: String,
}

impl CanonRecord for Theme {
    const KIND: EntityKind = EntityKind::Theme;

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
