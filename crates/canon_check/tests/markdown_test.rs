//! Tests for Markdown canon validation.

use canon_check::ValidationErrorKind;
use canon_check::markdown::MarkdownValidator;
use canon_core::{CanonPaths, EntityKind};
use std::fs;
use std::path::Path;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

const CHARACTER: &str = "---
id: C-DOLORES
name: Dolores Abernathy
type: host
role: Rancher's daughter
status: active
---

# Dolores Abernathy

## Overview
Rancher's daughter

## Traits
- curious

## Goals
- remember

## Relationships
- **C-TEDDY**: love interest

## Backstory
Oldest host
";

fn populated_repo() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "canon/characters/c_dolores.md", CHARACTER);
    write(dir.path(), "canon/characters/index.md", "# Characters\n");
    write(
        dir.path(),
        "canon/locations/l_sweetwater.md",
        "---\nid: L-SWEETWATER\nname: Sweetwater\n---\n\n# Sweetwater\n\n## Overview\nTown\n",
    );
    write(
        dir.path(),
        "canon/themes/t_freewill.md",
        "---\nid: T-FREEWILL\nname: Free Will\n---\n\n## Description\nx\n\n## Examples\n- y\n\n## Significance\nz\n",
    );
    write(
        dir.path(),
        "canon/timeline/te_build_1.md",
        "---\nid: TE-BUILD-1\ntitle: First hosts\n---\n\n## Overview\nx\n\n## Significance\ny\n",
    );
    write(
        dir.path(),
        "story/scenes/s01e01/s01e01_001.md",
        "---\nid: S01E01-001\nepisode: S01E01\ntitle: Wake\n---\n\n## Synopsis\nMorning\n\n## Characters\n- C-DOLORES\n",
    );
    dir
}

#[test]
fn test_valid_markdown_repository() {
    let dir = populated_repo();
    let result = MarkdownValidator::new(CanonPaths::with_default_layout(dir.path())).run_all();
    assert!(result.is_valid(), "Expected valid markdown, got errors: {:?}", result.errors);
    assert!(result.warnings.is_empty());
}

#[test]
fn test_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let result = MarkdownValidator::new(CanonPaths::with_default_layout(dir.path())).run_all();

    let errors: Vec<&str> = result.errors.iter().map(|e| e.message.as_str()).collect();
    assert_eq!(
        errors,
        vec![
            "Missing characters directory",
            "Missing locations directory",
            "Missing themes directory",
            "Missing timeline directory",
        ]
    );
    assert_eq!(result.warnings.len(), 1);
    assert_eq!(result.warnings[0].message, "No scenes directory found");
}

#[test]
fn test_missing_frontmatter_fields() {
    let dir = populated_repo();
    write(
        dir.path(),
        "canon/characters/c_teddy.md",
        "---\nid: C-TEDDY\nname: Teddy\n---\n\n## Overview\n",
    );

    let mut validator = MarkdownValidator::new(CanonPaths::with_default_layout(dir.path()));
    assert!(!validator.validate_kind(EntityKind::Character));

    let errors = &validator.result().errors;
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind, ValidationErrorKind::MissingFrontmatter);
    assert_eq!(
        errors[0].message,
        r#"Character c_teddy.md: Missing required frontmatter fields: ["type", "role", "status"]"#
    );
}

#[test]
fn test_missing_sections() {
    let dir = populated_repo();
    write(
        dir.path(),
        "canon/locations/l_mesa.md",
        "---\nid: L-MESA\nname: Mesa Hub\n---\n\n# Mesa Hub\n\nNo sections here.\n",
    );

    let mut validator = MarkdownValidator::new(CanonPaths::with_default_layout(dir.path()));
    assert!(!validator.validate_kind(EntityKind::Location));
    assert_eq!(
        validator.result().errors[0].message,
        r###"Location l_mesa.md: Missing required sections: ["## Overview"]"###
    );
}

#[test]
fn test_unparsable_frontmatter() {
    let dir = populated_repo();
    write(
        dir.path(),
        "canon/themes/t_broken.md",
        "---\nid: [T-BROKEN\n---\n\n## Description\n",
    );

    let mut validator = MarkdownValidator::new(CanonPaths::with_default_layout(dir.path()));
    assert!(!validator.validate_kind(EntityKind::Theme));

    let error = &validator.result().errors[0];
    assert_eq!(error.kind, ValidationErrorKind::LoadFailure);
    assert!(error.message.starts_with("Theme t_broken.md: Failed to parse: "));
}
