//! Schema validation for the YAML canon.
//!
//! Records are checked as untyped YAML so that one pass can report every
//! missing field, malformed identifier and out-of-range value of a record,
//! rather than stopping at the first field a typed decode trips over.

use crate::validation::{ValidationErrorKind, ValidationResult, ValidationWarningKind};
use canon_core::source::{collection, file_stem, list_files, read_document};
use canon_core::{CanonPaths, CharacterType, EntityKind};
use serde_yaml::{Mapping, Value};
use std::path::Path;
use strum::VariantNames;

use FieldType::{Text, TextList, TextMap};

/// Scene file kept as an authoring template, never validated.
const SCENE_TEMPLATE: &str = "TEMPLATE.yml";

/// Expected shape of a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FieldType {
    /// Any scalar
    Text,
    /// Sequence of scalars
    TextList,
    /// Mapping of scalar to scalar
    TextMap,
    /// One of a closed set of strings
    OneOf(&'static [&'static str]),
}

/// A single field of an entity schema.
#[derive(Debug, Clone, Copy)]
struct FieldRule {
    name: &'static str,
    field_type: FieldType,
    required: bool,
}

const fn required(name: &'static str, field_type: FieldType) -> FieldRule {
    FieldRule {
        name,
        field_type,
        required: true,
    }
}

const fn optional(name: &'static str, field_type: FieldType) -> FieldRule {
    FieldRule {
        name,
        field_type,
        required: false,
    }
}

const CHARACTER_FIELDS: &[FieldRule] = &[
    required("name", Text),
    optional("full_name", Text),
    required("type", FieldType::OneOf(CharacterType::VARIANTS)),
    required("role", Text),
    optional("status", Text),
    required("first_appearance", Text),
    optional("traits", TextList),
    optional("goals", TextList),
    optional("relationships", TextMap),
    optional("backstory", Text),
    optional("narrative_function", Text),
];

const LOCATION_FIELDS: &[FieldRule] = &[
    required("name", Text),
    required("description", Text),
    required("region", Text),
    required("significance", Text),
    optional("connected_to", TextList),
];

const SCENE_FIELDS: &[FieldRule] = &[
    required("episode", Text),
    required("title", Text),
    required("location", Text),
    required("characters", TextList),
    optional("timestamp", Text),
    required("synopsis", Text),
    optional("themes", TextList),
    optional("reveals", TextList),
    optional("conflicts", TextList),
];

const EPISODE_FIELDS: &[FieldRule] = &[
    required("title", Text),
    required("air_date", Text),
    required("director", Text),
    required("writers", TextList),
    required("synopsis", Text),
    required("themes", TextList),
    required("major_events", TextList),
    optional("scenes", TextList),
];

const THEME_FIELDS: &[FieldRule] = &[
    required("name", Text),
    required("description", Text),
    optional("examples", TextList),
    required("significance", Text),
];

const TIMELINE_FIELDS: &[FieldRule] = &[
    required("title", Text),
    optional("date", Text),
    required("period", Text),
    required("description", Text),
    optional("characters_involved", TextList),
    required("significance", Text),
    optional("episode_reference", Text),
];

/// Field rules for an entity kind; `id` is checked separately.
fn fields_for(kind: EntityKind) -> &'static [FieldRule] {
    match kind {
        EntityKind::Character => CHARACTER_FIELDS,
        EntityKind::Location => LOCATION_FIELDS,
        EntityKind::Scene => SCENE_FIELDS,
        EntityKind::Episode => EPISODE_FIELDS,
        EntityKind::Theme => THEME_FIELDS,
        EntityKind::TimelineEvent => TIMELINE_FIELDS,
    }
}

/// Checks one record against its entity schema.
///
/// Returns every violation found, in field order; an empty list means the
/// record is valid.
///
/// # Examples
///
/// ```
/// use canon_check::schema::check_record;
/// use canon_core::EntityKind;
///
/// let record: serde_yaml::Value = serde_yaml::from_str(
///     "id: T-FREEWILL\nname: Free Will\ndescription: Choice\nsignificance: Core\n",
/// ).unwrap();
/// assert!(check_record(EntityKind::Theme, &record).is_empty());
///
/// let record: serde_yaml::Value = serde_yaml::from_str("id: t-lower\nname: Lower\n").unwrap();
/// let violations = check_record(EntityKind::Theme, &record);
/// assert!(violations[0].contains("does not match"));
/// ```
pub fn check_record(kind: EntityKind, record: &Value) -> Vec<String> {
    let Some(map) = record.as_mapping() else {
        return vec!["record must be a mapping".to_string()];
    };

    let mut violations = Vec::new();

    match map.get("id").map(text_value) {
        None | Some(None) => violations.push("missing required field `id`".to_string()),
        Some(Some(id)) if !kind.is_valid_id(&id) => violations.push(format!(
            "`id` '{}' does not match pattern {}",
            id,
            kind.id_pattern().as_str()
        )),
        Some(Some(_)) => {}
    }

    for rule in fields_for(kind) {
        check_field(map, rule, &mut violations);
    }

    violations
}

fn check_field(map: &Mapping, rule: &FieldRule, violations: &mut Vec<String>) {
    let value = match map.get(rule.name) {
        None | Some(Value::Null) => {
            if rule.required {
                violations.push(format!("missing required field `{}`", rule.name));
            }
            return;
        }
        Some(value) => value,
    };

    match rule.field_type {
        Text => {
            if text_value(value).is_none() {
                violations.push(format!("`{}` must be a single value", rule.name));
            }
        }
        TextList => {
            let valid = value
                .as_sequence()
                .is_some_and(|items| items.iter().all(|item| text_value(item).is_some()));
            if !valid {
                violations.push(format!("`{}` must be a list of values", rule.name));
            }
        }
        TextMap => {
            let valid = value.as_mapping().is_some_and(|entries| {
                entries
                    .iter()
                    .all(|(k, v)| text_value(k).is_some() && text_value(v).is_some())
            });
            if !valid {
                violations.push(format!("`{}` must be a mapping of values", rule.name));
            }
        }
        FieldType::OneOf(allowed) => match value.as_str() {
            Some(s) if allowed.contains(&s) => {}
            _ => violations.push(format!(
                "`{}` must be one of {}",
                rule.name,
                allowed.join(", ")
            )),
        },
    }
}

fn text_value(value: &Value) -> Option<String> {
    canon_core::scalar::scalar_text(value)
}

/// Name used for a record in messages: its id, or `unknown`.
fn record_label(record: &Value) -> String {
    record
        .get("id")
        .and_then(text_value)
        .unwrap_or_else(|| "unknown".to_string())
}

/// Validates the YAML canon of one repository.
#[derive(Debug, Clone)]
pub struct SchemaValidator {
    paths: CanonPaths,
    result: ValidationResult,
}

impl SchemaValidator {
    /// Creates a validator for a repository.
    pub fn new(paths: CanonPaths) -> Self {
        Self {
            paths,
            result: ValidationResult::new(),
        }
    }

    /// Errors and warnings gathered so far.
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Validates the character collection. A missing file is an error.
    #[tracing::instrument(skip_all)]
    pub fn validate_characters(&mut self) -> bool {
        let path = self.paths.characters_file().clone();
        self.validate_collection(&path, "characters", EntityKind::Character, true)
    }

    /// Validates the locations of the world document. A missing file is an error.
    #[tracing::instrument(skip_all)]
    pub fn validate_world(&mut self) -> bool {
        let path = self.paths.world_file().clone();
        self.validate_collection(&path, "locations", EntityKind::Location, true)
    }

    /// Validates timeline events. A missing file is a warning.
    #[tracing::instrument(skip_all)]
    pub fn validate_timeline(&mut self) -> bool {
        let path = self.paths.timeline_file().clone();
        self.validate_collection(&path, "events", EntityKind::TimelineEvent, false)
    }

    /// Validates themes. A missing file is a warning.
    #[tracing::instrument(skip_all)]
    pub fn validate_themes(&mut self) -> bool {
        let path = self.paths.themes_file().clone();
        self.validate_collection(&path, "themes", EntityKind::Theme, false)
    }

    /// Validates one episode file per record. A missing directory is a warning.
    #[tracing::instrument(skip_all)]
    pub fn validate_episodes(&mut self) -> bool {
        let dir = self.paths.episodes_dir().clone();
        self.validate_directory(&dir, "episodes", EntityKind::Episode)
    }

    /// Validates one scene file per record. A missing directory is a warning.
    #[tracing::instrument(skip_all)]
    pub fn validate_scenes(&mut self) -> bool {
        let dir = self.paths.scenes_dir().clone();
        self.validate_directory(&dir, "scenes", EntityKind::Scene)
    }

    /// Runs every section, never stopping early.
    pub fn run_all(mut self) -> ValidationResult {
        let sections: [(&str, fn(&mut Self) -> bool); 6] = [
            ("Characters", Self::validate_characters),
            ("World & Locations", Self::validate_world),
            ("Timeline", Self::validate_timeline),
            ("Themes", Self::validate_themes),
            ("Episodes", Self::validate_episodes),
            ("Scenes", Self::validate_scenes),
        ];

        for (name, section) in sections {
            tracing::info!(section = name, "Checking");
            let valid = section(&mut self);
            tracing::debug!(section = name, valid, "Section checked");
        }

        self.result
    }

    fn validate_collection(
        &mut self,
        path: &Path,
        key: &str,
        kind: EntityKind,
        required: bool,
    ) -> bool {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        if !path.exists() {
            if required {
                self.result.add_error(
                    ValidationErrorKind::MissingSource,
                    format!("Missing {}", file_name),
                );
                return false;
            }
            self.result.add_warning(
                ValidationWarningKind::MissingSource,
                format!("No {} found", file_name),
            );
            return true;
        }

        let document = match read_document(path) {
            Ok(document) => document,
            Err(e) => {
                self.result
                    .add_error(ValidationErrorKind::LoadFailure, load_failure(path, &e));
                return false;
            }
        };

        let items = match collection(path, &document, key) {
            Ok(items) => items,
            Err(e) => {
                self.result
                    .add_error(ValidationErrorKind::LoadFailure, load_failure(path, &e));
                return false;
            }
        };

        let mut valid = true;
        for item in items {
            valid &= self.record(kind, &record_label(item), item);
        }
        valid
    }

    fn validate_directory(&mut self, dir: &Path, label: &str, kind: EntityKind) -> bool {
        if !dir.is_dir() {
            self.result.add_warning(
                ValidationWarningKind::MissingSource,
                format!("No {} directory found", label),
            );
            return true;
        }

        let files = match list_files(dir, "yml") {
            Ok(files) => files,
            Err(e) => {
                self.result
                    .add_error(ValidationErrorKind::LoadFailure, load_failure(dir, &e));
                return false;
            }
        };

        let mut valid = true;
        for file in files {
            if file.file_name().is_some_and(|name| name == SCENE_TEMPLATE) {
                tracing::debug!(path = %file.display(), "Skipping template");
                continue;
            }

            match read_document(&file) {
                Ok(document) => valid &= self.record(kind, &file_stem(&file), &document),
                Err(e) => {
                    self.result
                        .add_error(ValidationErrorKind::LoadFailure, load_failure(&file, &e));
                    valid = false;
                }
            }
        }
        valid
    }

    fn record(&mut self, kind: EntityKind, label: &str, record: &Value) -> bool {
        let violations = check_record(kind, record);
        if violations.is_empty() {
            tracing::debug!(kind = %kind, record = label, "Valid");
            return true;
        }

        self.result.add_error(
            ValidationErrorKind::SchemaViolation,
            format!("{} {}: {}", kind, label, violations.join("; ")),
        );
        false
    }
}

fn load_failure(path: &Path, error: &canon_error::LoadError) -> String {
    format!("Failed to load {}: {}", path.display(), error.kind())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(source: &str) -> Value {
        serde_yaml::from_str(source).unwrap()
    }

    #[test]
    fn test_character_type_must_be_in_closed_set() {
        let record = yaml(
            "id: C-ROBOT\nname: Robot\ntype: android\nrole: Extra\nfirst_appearance: S01E01\n",
        );
        let violations = check_record(EntityKind::Character, &record);
        assert_eq!(violations, vec!["`type` must be one of host, human, hybrid"]);
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let record = yaml("id: L-MESA\nname: Mesa\n");
        let violations = check_record(EntityKind::Location, &record);
        assert_eq!(violations.len(), 3);
        assert!(violations.iter().all(|v| v.starts_with("missing required field")));
    }

    #[test]
    fn test_list_fields_reject_scalars() {
        let record = yaml(
            "id: S01E01-001\nepisode: S01E01\ntitle: Wake\nlocation: L-SWEETWATER\ncharacters: C-DOLORES\nsynopsis: Morning\n",
        );
        let violations = check_record(EntityKind::Scene, &record);
        assert_eq!(violations, vec!["`characters` must be a list of values"]);
    }

    #[test]
    fn test_non_mapping_record() {
        let violations = check_record(EntityKind::Theme, &yaml("- a\n"));
        assert_eq!(violations, vec!["record must be a mapping"]);
    }

    #[test]
    fn test_record_label_falls_back_to_unknown() {
        assert_eq!(record_label(&yaml("name: Nobody\n")), "unknown");
        assert_eq!(record_label(&yaml("id: C-X\n")), "C-X");
    }
}
