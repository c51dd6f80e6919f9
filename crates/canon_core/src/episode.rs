//! Episode records.

use crate::scalar;
use serde::{Deserialize, Serialize};

/// A broadcast episode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct Episode {
    /// Identifier (`S<NN>E<NN>`)
    #[serde(default)]
    id: String,
    /// Episode title
    #[serde(default)]
    title: String,
    /// Original air date
    #[serde(default, deserialize_with = "scalar::text")]
    air_date: String,
    /// Director credit
    #[serde(default)]
    director: String,
    /// Writer credits
    #[serde(default)]
    writers: Vec<String>,
    /// Synopsis prose
    #[serde(default)]
    synopsis: String,
    /// Theme identifiers
    #[serde(default)]
    themes: Vec<String>,
    /// Headline events
    #[serde(default)]
    major_events: Vec<String>,
    /// Scene identifiers
    #[serde(default)]
    scenes: Vec<String>,
}
