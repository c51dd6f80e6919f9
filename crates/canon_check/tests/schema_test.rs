//! Tests for YAML schema validation.

use canon_check::schema::SchemaValidator;
use canon_check::{ValidationErrorKind, ValidationWarningKind};
use canon_core::CanonPaths;
use std::fs;
use std::path::Path;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

const CHARACTERS: &str = r#"
characters:
  - id: C-DOLORES
    name: Dolores Abernathy
    type: host
    role: Rancher's daughter
    first_appearance: S01E01
    traits: [curious, resilient]
    relationships:
      C-TEDDY: love interest
"#;

const WORLD: &str = r#"
locations:
  - id: L-SWEETWATER
    name: Sweetwater
    description: Frontier town
    region: Park
    significance: Loop start
    connected_to: [L-MESA]
"#;

#[test]
fn test_complete_repository_is_valid() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "canon/characters.yml", CHARACTERS);
    write(dir.path(), "canon/world.yml", WORLD);
    write(
        dir.path(),
        "canon/timeline.yml",
        "events:\n  - id: TE-BUILD-1\n    title: First hosts\n    date: 1\n    period: Early Host Era\n    description: Built\n    significance: Origin\n",
    );
    write(
        dir.path(),
        "canon/themes.yml",
        "themes:\n  - id: T-FREEWILL\n    name: Free Will\n    description: Choice\n    significance: Core\n",
    );
    write(
        dir.path(),
        "story/episodes/s01e01.yml",
        "id: S01E01\ntitle: The Original\nair_date: 2016-10-02\ndirector: Jonathan Nolan\nwriters: [Lisa Joy]\nsynopsis: Pilot\nthemes: [T-FREEWILL]\nmajor_events: [Awakening]\n",
    );
    write(
        dir.path(),
        "story/scenes/S01E01-001.yml",
        "id: S01E01-001\nepisode: S01E01\ntitle: Wake\nlocation: L-SWEETWATER\ncharacters: [C-DOLORES]\nsynopsis: Morning\n",
    );
    write(dir.path(), "story/scenes/TEMPLATE.yml", "id: S00E00-000\n");

    let result = SchemaValidator::new(CanonPaths::with_default_layout(dir.path())).run_all();
    assert!(result.is_valid(), "Expected valid canon, got errors: {:?}", result.errors);
    assert!(result.warnings.is_empty(), "Unexpected warnings: {:?}", result.warnings);
    assert!(result.passes(true));
}

#[test]
fn test_missing_required_files_are_errors() {
    let dir = tempfile::tempdir().unwrap();

    let result = SchemaValidator::new(CanonPaths::with_default_layout(dir.path())).run_all();
    let messages: Vec<&str> = result.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(messages, vec!["Missing characters.yml", "Missing world.yml"]);
    assert!(
        result
            .errors
            .iter()
            .all(|e| matches!(e.kind, ValidationErrorKind::MissingSource))
    );
}

#[test]
fn test_missing_optional_sources_are_warnings() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "canon/characters.yml", CHARACTERS);
    write(dir.path(), "canon/world.yml", WORLD);

    let result = SchemaValidator::new(CanonPaths::with_default_layout(dir.path())).run_all();
    assert!(result.is_valid());
    assert!(result.passes(false));
    assert!(!result.passes(true));
    assert!(
        result
            .warnings
            .iter()
            .any(|w| w.message == "No episodes directory found")
    );
    assert!(
        result
            .warnings
            .iter()
            .all(|w| matches!(w.kind, ValidationWarningKind::MissingSource))
    );
}

#[test]
fn test_invalid_character_reports_every_violation() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "canon/characters.yml",
        "characters:\n  - id: C-ROBOT\n    name: Robot\n    type: android\n",
    );
    write(dir.path(), "canon/world.yml", WORLD);

    let mut validator = SchemaValidator::new(CanonPaths::with_default_layout(dir.path()));
    assert!(!validator.validate_characters());

    let errors = &validator.result().errors;
    assert_eq!(errors.len(), 1);
    assert!(matches!(errors[0].kind, ValidationErrorKind::SchemaViolation));
    assert!(errors[0].message.starts_with("Character C-ROBOT: "));
    assert!(errors[0].message.contains("`type` must be one of host, human, hybrid"));
    assert!(errors[0].message.contains("missing required field `role`"));
}

#[test]
fn test_bad_scene_id_and_unparsable_episode() {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "story/scenes/wake.yml",
        "id: scene-one\nepisode: S01E01\ntitle: Wake\nlocation: L-SWEETWATER\ncharacters: []\nsynopsis: Morning\n",
    );
    write(dir.path(), "story/episodes/s01e01.yml", "title: [\n");

    let mut validator = SchemaValidator::new(CanonPaths::with_default_layout(dir.path()));
    assert!(!validator.validate_scenes());
    assert!(!validator.validate_episodes());

    let errors = &validator.result().errors;
    assert_eq!(errors.len(), 2);
    assert!(errors[0].message.starts_with("Scene wake: "));
    assert!(errors[0].message.contains("does not match"));
    assert!(matches!(errors[1].kind, ValidationErrorKind::LoadFailure));
    assert!(errors[1].message.starts_with("Failed to load "));
}
