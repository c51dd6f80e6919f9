//! Timeline event records.

use crate::{CanonRecord, EntityKind, scalar};
use serde::{Deserialize, Serialize};

/// A canonical timeline event.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct TimelineEvent {
    /// Unique identifier (`TE-<UPPERCASE>-<NUMBER>`)
    id: String,
    /// Event title
    #[serde(default, deserialize_with = "scalar::text")]
    title: String,
    /// In-world date, when known
    #[serde(default, deserialize_with = "scalar::optional")]
    date: Option<String>,
    /// Free-form period label used for grouping
    #[serde(default, deserialize_with = "scalar::optional")]
    period: Option<String>,
    /// Descriptive prose
    #[serde(default, deserialize_with = "scalar::text")]
    description: String,
    /// Identifiers of involved characters
    #[serde(default)]
    characters_involved: Vec<String>,
    /// Narrative significance
    #[serde(default, deserialize_with = "scalar::text")]
    significance: String,
    /// Episode in which the event is shown (not checked)
    #[serde(default, deserialize_with = "scalar::optional")]
    episode_reference: Option<String>,
}

impl TimelineEvent {
    /// Period label, `unknown` when absent.
    pub fn period_label(&self) -> &str {
        self.period.as_deref().unwrap_or("unknown")
    }
}

impl CanonRecord for TimelineEvent {
    const KIND: EntityKind = EntityKind::TimelineEvent;

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
