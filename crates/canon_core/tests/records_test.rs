//! Tests for record decoding and source loading.

use canon_core::source::{collection, decode_records, list_files, read_document, read_record};
use canon_core::{CanonLayout, CanonPaths, Character, CharacterType, Scene, TimelineEvent};
use canon_error::LoadErrorKind;
use std::fs;
use std::path::Path;

#[test]
fn test_character_decodes_with_defaults() {
    let yaml = r#"
        id: C-DOLORES
        name: Dolores Abernathy
        type: host
        role: Rancher's daughter
        first_appearance: S01E01
    "#;

    let character: Character = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(character.id(), "C-DOLORES");
    assert_eq!(*character.character_type(), Some(CharacterType::Host));
    assert_eq!(character.status(), "active");
    assert!(character.traits().is_empty());
}

#[test]
fn test_character_rejects_unknown_type() {
    let yaml = "id: C-ROBOT\nname: Robot\ntype: android\n";
    assert!(serde_yaml::from_str::<Character>(yaml).is_err());
}

#[test]
fn test_character_display_fields_accept_any_scalar() {
    let yaml = "id: C-WILLIAM\nname: 1999\nrole: ~\nfull_name: true\n";
    let character: Character = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(character.name(), "1999");
    assert_eq!(character.role(), "");
    assert_eq!(character.full_name().as_deref(), Some("true"));
}

#[test]
fn test_character_name_rejects_list() {
    let yaml = "id: C-WILLIAM\nname: [Billy, William]\n";
    assert!(serde_yaml::from_str::<Character>(yaml).is_err());
}

#[test]
fn test_timeline_event_accepts_numeric_date() {
    let yaml = "id: TE-BUILD-1\ntitle: Park built\ndate: 2020\nperiod: Early Host Era\n";
    let event: TimelineEvent = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(event.date().as_deref(), Some("2020"));
    assert_eq!(event.period_label(), "Early Host Era");
}

#[test]
fn test_timeline_event_missing_period_groups_as_unknown() {
    let event: TimelineEvent = serde_yaml::from_str("id: TE-X-1\n").unwrap();
    assert_eq!(event.period_label(), "unknown");
}

#[test]
fn test_scene_location_ref_skips_empty() {
    let scene: Scene = serde_yaml::from_str("id: S01E01-001\nlocation: ''\n").unwrap();
    assert_eq!(scene.location_ref(), None);

    let scene: Scene = serde_yaml::from_str("location: L-MAINST\n").unwrap();
    assert_eq!(scene.location_ref(), Some("L-MAINST"));
}

#[test]
fn test_collection_missing_key_is_empty() {
    let doc: serde_yaml::Value = serde_yaml::from_str("other: []\n").unwrap();
    let items = collection(Path::new("world.yml"), &doc, "locations").unwrap();
    assert!(items.is_empty());
}

#[test]
fn test_collection_non_list_is_parse_error() {
    let doc: serde_yaml::Value = serde_yaml::from_str("locations: nope\n").unwrap();
    let err = collection(Path::new("world.yml"), &doc, "locations").unwrap_err();
    assert!(matches!(err.kind(), LoadErrorKind::Parse { .. }));
}

#[test]
fn test_decode_records_keeps_good_records() {
    let doc: serde_yaml::Value = serde_yaml::from_str(
        r#"
        characters:
          - id: C-DOLORES
            name: Dolores
          - name: Nameless
          - id: C-BERNARD
            name: Bernard
        "#,
    )
    .unwrap();
    let items = collection(Path::new("characters.yml"), &doc, "characters").unwrap();
    let (records, errors) = decode_records::<Character>(Path::new("characters.yml"), items);

    assert_eq!(records.len(), 2);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        errors[0].kind(),
        LoadErrorKind::Record { index: 1, .. }
    ));
}

#[test]
fn test_read_document_reports_syntax_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("broken.yml");
    fs::write(&path, "characters: [unclosed\n").unwrap();

    let err = read_document(&path).unwrap_err();
    assert!(matches!(err.kind(), LoadErrorKind::Parse { .. }));
    assert!(err.kind().to_string().starts_with("Failed to parse"));
}

#[test]
fn test_read_record_missing_file_is_read_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = read_record::<Scene>(&dir.path().join("missing.yml")).unwrap_err();
    assert!(matches!(err.kind(), LoadErrorKind::Read { .. }));
}

#[test]
fn test_read_record_empty_document_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    for (name, contents) in [("blank.yml", ""), ("null.yml", "~\n")] {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();

        let err = read_record::<Scene>(&path).unwrap_err();
        assert!(matches!(err.kind(), LoadErrorKind::Parse { .. }));
        assert!(err.kind().to_string().ends_with("document is empty"));
    }
}

#[test]
fn test_list_files_is_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    for name in ["b.yml", "a.yml", "notes.md", "c.yaml"] {
        fs::write(dir.path().join(name), "").unwrap();
    }

    let files = list_files(dir.path(), "yml").unwrap();
    let names: Vec<_> = files
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["a.yml", "b.yml"]);
}

#[test]
fn test_layout_file_overrides_subset() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("canon.toml"),
        "scenes_dir = \"drafts/scenes\"\n",
    )
    .unwrap();

    let layout = CanonLayout::discover(dir.path(), None).unwrap();
    assert_eq!(layout.scenes_dir(), Path::new("drafts/scenes"));
    assert_eq!(layout.characters_file(), Path::new("canon/characters.yml"));
}

#[test]
fn test_layout_explicit_missing_file_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = CanonLayout::discover(dir.path(), Some(&dir.path().join("nope.toml")));
    assert!(result.is_err());
}

#[test]
fn test_default_paths_are_rooted() {
    let paths = CanonPaths::with_default_layout("/repo");
    assert_eq!(paths.world_file(), Path::new("/repo/canon/world.yml"));
    assert_eq!(paths.markdown_scenes_dir(), Path::new("/repo/story/scenes/s01e01"));
}
