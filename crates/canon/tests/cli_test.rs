//! Tests for command parsing and handler output.

use canon::cli::{
    Cli, Commands, OutputFormat, handle_continuity_command, handle_convert_command,
    handle_validate_command, handle_validate_markdown_command,
};
use canon_core::CanonPaths;
use clap::Parser;
use std::fs;
use std::path::Path;

fn write(root: &Path, relative: &str, contents: &str) {
    let path = root.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn fixture() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "canon/characters.yml",
        "characters:\n  - id: C-DOLORES\n    name: Dolores Abernathy\n    type: host\n    role: Rancher's daughter\n    first_appearance: S01E01\n",
    );
    write(
        dir.path(),
        "canon/world.yml",
        "locations:\n  - id: L-SWEETWATER\n    name: Sweetwater\n    description: Town\n    region: Park\n    significance: Loop start\n",
    );
    write(
        dir.path(),
        "story/scenes/S01E01-001.yml",
        "id: S01E01-001\nepisode: S01E01\ntitle: Wake\nlocation: L-SWEETWATER\ncharacters: [C-DOLORES, C-GHOST]\nsynopsis: Morning\n",
    );
    dir
}

fn run<F>(handler: F) -> (bool, String)
where
    F: FnOnce(&mut Vec<u8>) -> anyhow::Result<bool>,
{
    let mut out = Vec::new();
    let passed = handler(&mut out).unwrap();
    (passed, String::from_utf8(out).unwrap())
}

#[test]
fn test_parse_global_flags_after_subcommand() {
    let cli = Cli::try_parse_from([
        "canon",
        "validate",
        "--strict",
        "--format",
        "json",
        "--repo-root",
        "/tmp/story",
        "-vv",
    ])
    .unwrap();

    assert_eq!(cli.repo_root, Path::new("/tmp/story"));
    assert_eq!(cli.verbose, 2);
    assert!(matches!(
        cli.command,
        Commands::Validate {
            format: OutputFormat::Json,
            strict: true
        }
    ));
}

#[test]
fn test_parse_validate_markdown_defaults() {
    let cli = Cli::try_parse_from(["canon", "validate-markdown"]).unwrap();
    assert!(matches!(
        cli.command,
        Commands::ValidateMarkdown {
            format: OutputFormat::Human,
            strict: false
        }
    ));
    assert!(cli.config.is_none());
}

#[test]
fn test_explicit_missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");
    let cli = Cli::try_parse_from([
        "canon",
        "continuity",
        "--repo-root",
        dir.path().to_str().unwrap(),
        "--config",
        missing.to_str().unwrap(),
    ])
    .unwrap();
    assert!(cli.paths().is_err());
}

#[test]
fn test_layout_file_moves_scene_directory() {
    let dir = fixture();
    fs::rename(dir.path().join("story/scenes"), dir.path().join("drafts")).unwrap();
    write(dir.path(), "canon.toml", "scenes_dir = \"drafts\"\n");

    let root = dir.path().to_str().unwrap();
    let cli = Cli::try_parse_from(["canon", "continuity", "--repo-root", root]).unwrap();
    let paths = cli.paths().unwrap();

    let (passed, output) =
        run(|out| handle_continuity_command(&paths, OutputFormat::Human, out));
    assert!(!passed);
    assert!(output.contains("Scene S01E01-001: Unknown character C-GHOST"));
}

#[test]
fn test_continuity_human_output() {
    let dir = fixture();
    let paths = CanonPaths::with_default_layout(dir.path());

    let (passed, output) =
        run(|out| handle_continuity_command(&paths, OutputFormat::Human, out));
    assert!(!passed);
    assert_eq!(
        output,
        "Continuity Check Results\n\nCharacter References:\n  ERROR: Scene S01E01-001: Unknown character C-GHOST\n\nTotal issues found: 1\n"
    );
}

#[test]
fn test_continuity_clean_repository() {
    let dir = tempfile::tempdir().unwrap();
    let paths = CanonPaths::with_default_layout(dir.path());

    let (passed, output) =
        run(|out| handle_continuity_command(&paths, OutputFormat::Human, out));
    assert!(passed);
    assert!(output.ends_with("SUCCESS: No continuity issues found!\n"));
}

#[test]
fn test_continuity_json_output() {
    let dir = fixture();
    let paths = CanonPaths::with_default_layout(dir.path());

    let (passed, output) = run(|out| handle_continuity_command(&paths, OutputFormat::Json, out));
    let json: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert!(!passed);
    assert_eq!(json["passed"], false);
    assert_eq!(json["total_issues"], 1);
    assert_eq!(
        json["results"]["character_references"][0]["message"],
        "Scene S01E01-001: Unknown character C-GHOST"
    );
    assert_eq!(json["results"]["timeline_consistency"], serde_json::json!([]));
}

#[test]
fn test_validate_strict_fails_on_warnings() {
    let dir = fixture();
    let paths = CanonPaths::with_default_layout(dir.path());

    let (lenient, output) =
        run(|out| handle_validate_command(&paths, OutputFormat::Human, false, out));
    assert!(lenient, "Expected lenient validation to pass:\n{}", output);
    assert!(output.contains("WARNINGS:\n  WARNING: No timeline.yml found"));
    assert!(output.ends_with("SUCCESS: All checks passed!\n"));

    let (strict, output) =
        run(|out| handle_validate_command(&paths, OutputFormat::Human, true, out));
    assert!(!strict);
    assert!(output.ends_with("ERROR: Validation failed\n"));
}

#[test]
fn test_convert_then_validate_markdown() {
    let dir = fixture();
    let paths = CanonPaths::with_default_layout(dir.path());

    let (converted, output) = run(|out| handle_convert_command(&paths, OutputFormat::Json, out));
    assert!(converted);
    let summary: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(summary["characters"], 1);
    assert_eq!(summary["scenes"], 1);

    // Themes and timeline sources are absent, so their directories are missing.
    let (valid, output) =
        run(|out| handle_validate_markdown_command(&paths, OutputFormat::Json, false, out));
    let report: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert!(!valid);
    assert_eq!(report["errors"].as_array().unwrap().len(), 2);
    assert_eq!(report["errors"][0]["message"], "Missing themes directory");
}

#[test]
fn test_convert_failure_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "canon/characters.yml", "characters: [\n");
    let paths = CanonPaths::with_default_layout(dir.path());

    let mut out = Vec::new();
    let result = handle_convert_command(&paths, OutputFormat::Human, &mut out);
    assert!(result.is_err());
}
