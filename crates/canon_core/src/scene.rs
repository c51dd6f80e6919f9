//! Scene records.

use crate::scalar;
use serde::{Deserialize, Serialize};

/// A narrative unit referencing a location and a set of characters.
///
/// Every field is optional at the type level so that reference checks can
/// run over incomplete drafts; completeness is the schema validator's job.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Scene {
    /// Identifier (`S<NN>E<NN>-<NNN>`)
    #[serde(default, deserialize_with = "scalar::optional")]
    id: Option<String>,
    /// Episode reference
    #[serde(default, deserialize_with = "scalar::text")]
    episode: String,
    /// Scene title
    #[serde(default, deserialize_with = "scalar::text")]
    title: String,
    /// Location identifier
    #[serde(default, deserialize_with = "scalar::optional")]
    location: Option<String>,
    /// Character identifiers, in order of appearance
    #[serde(default)]
    characters: Vec<String>,
    /// In-story timestamp
    #[serde(default, deserialize_with = "scalar::optional")]
    timestamp: Option<String>,
    /// Synopsis prose
    #[serde(default, deserialize_with = "scalar::text")]
    synopsis: String,
    /// Theme identifiers
    #[serde(default)]
    themes: Vec<String>,
    /// Revelations
    #[serde(default)]
    reveals: Vec<String>,
    /// Conflicts
    #[serde(default)]
    conflicts: Vec<String>,
    /// Key dialogue lines
    #[serde(default)]
    dialogue: Vec<String>,
    /// Emotional beats
    #[serde(default)]
    emotions: Vec<String>,
    /// Physical actions
    #[serde(default)]
    actions: Vec<String>,
    /// Links to other scenes or events
    #[serde(default)]
    connections: Vec<String>,
}

impl Scene {
    /// Location identifier when present and non-empty.
    pub fn location_ref(&self) -> Option<&str> {
        self.location.as_deref().filter(|location| !location.is_empty())
    }
}
