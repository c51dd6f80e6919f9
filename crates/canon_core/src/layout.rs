//! Repository layout configuration.
//!
//! Paths are relative to the repository root. Any subset may be overridden
//! from a `canon.toml` file; missing keys keep their defaults.

use canon_error::{CanonResult, ConfigError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional layout file at the repository root.
pub const CONFIG_FILE_NAME: &str = "canon.toml";

/// Relative locations of every canon source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
#[serde(default)]
pub struct CanonLayout {
    /// Character collection
    characters_file: PathBuf,
    /// World document holding the location collection
    world_file: PathBuf,
    /// Timeline document holding the event collection
    timeline_file: PathBuf,
    /// Theme collection
    themes_file: PathBuf,
    /// One YAML file per scene
    scenes_dir: PathBuf,
    /// One YAML file per episode
    episodes_dir: PathBuf,
    /// Markdown character files
    characters_dir: PathBuf,
    /// Markdown location files
    locations_dir: PathBuf,
    /// Markdown theme files
    themes_dir: PathBuf,
    /// Markdown timeline files
    timeline_dir: PathBuf,
    /// Markdown scene files
    markdown_scenes_dir: PathBuf,
}

impl Default for CanonLayout {
    fn default() -> Self {
        Self {
            characters_file: PathBuf::from("canon/characters.yml"),
            world_file: PathBuf::from("canon/world.yml"),
            timeline_file: PathBuf::from("canon/timeline.yml"),
            themes_file: PathBuf::from("canon/themes.yml"),
            scenes_dir: PathBuf::from("story/scenes"),
            episodes_dir: PathBuf::from("story/episodes"),
            characters_dir: PathBuf::from("canon/characters"),
            locations_dir: PathBuf::from("canon/locations"),
            themes_dir: PathBuf::from("canon/themes"),
            timeline_dir: PathBuf::from("canon/timeline"),
            markdown_scenes_dir: PathBuf::from("story/scenes/s01e01"),
        }
    }
}

impl CanonLayout {
    /// Load a layout from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be read or TOML is invalid.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> CanonResult<Self> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!(
                "Failed to read config file {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;

        let layout = toml::from_str(&content).map_err(|e| {
            ConfigError::new(format!(
                "Failed to parse config {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        Ok(layout)
    }

    /// Resolve the layout for a repository.
    ///
    /// An explicit config path must exist. Otherwise `canon.toml` at the root
    /// is used when present, and the default layout when not.
    pub fn discover(root: &Path, explicit: Option<&Path>) -> CanonResult<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let candidate = root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            tracing::debug!(path = %candidate.display(), "Using repository layout file");
            Self::from_file(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Anchor every path at `root`.
    pub fn resolve(&self, root: &Path) -> CanonPaths {
        CanonPaths {
            root: root.to_path_buf(),
            characters_file: root.join(&self.characters_file),
            world_file: root.join(&self.world_file),
            timeline_file: root.join(&self.timeline_file),
            themes_file: root.join(&self.themes_file),
            scenes_dir: root.join(&self.scenes_dir),
            episodes_dir: root.join(&self.episodes_dir),
            characters_dir: root.join(&self.characters_dir),
            locations_dir: root.join(&self.locations_dir),
            themes_dir: root.join(&self.themes_dir),
            timeline_dir: root.join(&self.timeline_dir),
            markdown_scenes_dir: root.join(&self.markdown_scenes_dir),
        }
    }
}

/// Absolute locations of every canon source within one repository.
#[derive(Debug, Clone, PartialEq, Eq, derive_getters::Getters)]
pub struct CanonPaths {
    /// Repository root
    root: PathBuf,
    /// Character collection
    characters_file: PathBuf,
    /// World document
    world_file: PathBuf,
    /// Timeline document
    timeline_file: PathBuf,
    /// Theme collection
    themes_file: PathBuf,
    /// Scene YAML directory
    scenes_dir: PathBuf,
    /// Episode YAML directory
    episodes_dir: PathBuf,
    /// Markdown character directory
    characters_dir: PathBuf,
    /// Markdown location directory
    locations_dir: PathBuf,
    /// Markdown theme directory
    themes_dir: PathBuf,
    /// Markdown timeline directory
    timeline_dir: PathBuf,
    /// Markdown scene directory
    markdown_scenes_dir: PathBuf,
}

impl CanonPaths {
    /// Paths for `root` under the default layout.
    pub fn with_default_layout(root: impl AsRef<Path>) -> Self {
        CanonLayout::default().resolve(root.as_ref())
    }
}
