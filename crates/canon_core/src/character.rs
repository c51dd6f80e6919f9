//! Character records.

use crate::{CanonRecord, EntityKind, scalar};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Closed set of character categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::VariantNames,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CharacterType {
    /// Synthetic park host
    Host,
    /// Guest, employee or other human
    Human,
    /// Human consciousness in a host body
    Hybrid,
}

/// A canonical character.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Character {
    /// Unique identifier (`C-<UPPERCASE>`)
    id: String,
    /// Display name
    #[serde(default, deserialize_with = "scalar::text")]
    name: String,
    /// Full legal or host designation
    #[serde(default, deserialize_with = "scalar::optional")]
    full_name: Option<String>,
    /// Host, human or hybrid
    #[serde(rename = "type", default)]
    character_type: Option<CharacterType>,
    /// Narrative role
    #[serde(default, deserialize_with = "scalar::text")]
    role: String,
    /// Current status
    #[serde(default = "default_status", deserialize_with = "scalar::text")]
    status: String,
    /// Episode of first appearance
    #[serde(default, deserialize_with = "scalar::text")]
    first_appearance: String,
    /// Personality traits
    #[serde(default)]
    traits: Vec<String>,
    /// Motivations
    #[serde(default)]
    goals: Vec<String>,
    /// Relationship descriptions keyed by character id
    #[serde(default)]
    relationships: BTreeMap<String, String>,
    /// Backstory prose
    #[serde(default, deserialize_with = "scalar::optional")]
    backstory: Option<String>,
    /// Role in the overall story structure
    #[serde(default, deserialize_with = "scalar::optional")]
    narrative_function: Option<String>,
}

fn default_status() -> String {
    "active".to_string()
}

impl CanonRecord for Character {
    const KIND: EntityKind = EntityKind::Character;

    fn record_id(&self) -> &str {
        &self.id
    }

    fn from_id(id: String) -> Self {
        Self {
            id,
            name: String::new(),
            full_name: None,
            character_type: None,
            role: String::new(),
            status: default_status(),
            first_appearance: String::new(),
            traits: Vec::new(),
            goals: Vec::new(),
            relationships: BTreeMap::new(),
            backstory: None,
            narrative_function: None,
        }
    }
}
