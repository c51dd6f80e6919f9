//! Canon registry loading.
//!
//! The registry holds the three lookup tables every reference check reads.
//! It is built once per run and never mutated afterwards.

use canon_core::scalar::scalar_text;
use canon_core::source::{collection, decode_record, read_document};
use canon_core::{CanonPaths, CanonRecord, Character, Location, TimelineEvent};
use canon_error::LoadError;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;

/// Identifier-keyed lookup tables for characters, locations and timeline events.
#[derive(Debug, Clone, Default, PartialEq, derive_getters::Getters)]
pub struct CanonRegistry {
    /// Characters by id
    characters: BTreeMap<String, Character>,
    /// Locations by id
    locations: BTreeMap<String, Location>,
    /// Timeline events by id
    timeline: BTreeMap<String, TimelineEvent>,
}

/// A registry together with the load errors met while building it.
#[derive(Debug, Clone, Default)]
pub struct RegistryLoad {
    /// The loaded registry
    pub registry: CanonRegistry,
    /// Sources or records that failed to load
    pub errors: Vec<LoadError>,
}

impl CanonRegistry {
    /// Builds a registry directly from records.
    ///
    /// Later records replace earlier ones that share an identifier.
    pub fn from_records(
        characters: impl IntoIterator<Item = Character>,
        locations: impl IntoIterator<Item = Location>,
        timeline: impl IntoIterator<Item = TimelineEvent>,
    ) -> Self {
        Self {
            characters: index_by_id(characters),
            locations: index_by_id(locations),
            timeline: index_by_id(timeline),
        }
    }

    /// Loads the registry from the canon sources of a repository.
    ///
    /// Absent sources produce empty tables. A source that fails to parse is
    /// reported and left empty without affecting the other two.
    #[tracing::instrument(skip_all, fields(root = %paths.root().display()))]
    pub fn load(paths: &CanonPaths) -> RegistryLoad {
        Self::load_sources(
            Some(paths.characters_file().as_path()),
            Some(paths.world_file().as_path()),
            Some(paths.timeline_file().as_path()),
        )
    }

    /// Loads the registry from individually optional sources.
    pub fn load_sources(
        characters: Option<&Path>,
        world: Option<&Path>,
        timeline: Option<&Path>,
    ) -> RegistryLoad {
        let mut errors = Vec::new();

        let characters = load_collection::<Character>(characters, "characters", &mut errors);
        let locations = load_collection::<Location>(world, "locations", &mut errors);
        let timeline = load_collection::<TimelineEvent>(timeline, "events", &mut errors);

        let registry = Self {
            characters: index_by_id(characters),
            locations: index_by_id(locations),
            timeline: index_by_id(timeline),
        };

        tracing::info!(
            characters = registry.characters.len(),
            locations = registry.locations.len(),
            events = registry.timeline.len(),
            errors = errors.len(),
            "Canon loaded"
        );

        RegistryLoad { registry, errors }
    }

    /// Returns true if `id` names a known character.
    pub fn has_character(&self, id: &str) -> bool {
        self.characters.contains_key(id)
    }

    /// Returns true if `id` names a known location.
    pub fn has_location(&self, id: &str) -> bool {
        self.locations.contains_key(id)
    }

    /// Timeline events grouped by period label.
    pub fn events_by_period(&self) -> BTreeMap<&str, Vec<&TimelineEvent>> {
        let mut periods: BTreeMap<&str, Vec<&TimelineEvent>> = BTreeMap::new();
        for event in self.timeline.values() {
            periods.entry(event.period_label()).or_default().push(event);
        }
        periods
    }
}

/// Reads one collection, returning no records when the source is absent.
fn load_collection<T>(path: Option<&Path>, key: &str, errors: &mut Vec<LoadError>) -> Vec<T>
where
    T: CanonRecord + DeserializeOwned,
{
    let Some(path) = path.filter(|p| p.exists()) else {
        tracing::debug!(kind = %T::KIND, "Source absent, registry left empty");
        return Vec::new();
    };

    let document = match read_document(path) {
        Ok(document) => document,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Failed to load canon source");
            errors.push(e);
            return Vec::new();
        }
    };

    let items = match collection(path, &document, key) {
        Ok(items) => items,
        Err(e) => {
            errors.push(e);
            return Vec::new();
        }
    };

    let mut records = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match decode_record::<T>(path, index, item) {
            Ok(record) => records.push(record),
            Err(e) => {
                // A record that fails to decode still claims its identifier.
                if let Some(id) = item.get("id").and_then(scalar_text) {
                    tracing::warn!(kind = %T::KIND, id = %id, error = %e, "Registering id only");
                    records.push(T::from_id(id));
                }
                errors.push(e);
            }
        }
    }
    records
}

/// Indexes records by id; the last record with a given id wins.
fn index_by_id<T: CanonRecord>(records: impl IntoIterator<Item = T>) -> BTreeMap<String, T> {
    let mut index = BTreeMap::new();
    for record in records {
        let id = record.record_id().to_string();
        if index.insert(id.clone(), record).is_some() {
            tracing::warn!(
                kind = %T::KIND,
                id = %id,
                "Duplicate identifier, keeping the later record"
            );
        }
    }
    index
}
