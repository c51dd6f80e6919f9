//! Scene record sources.

use canon_core::Scene;
use canon_core::source::{file_stem, list_files, read_record};
use canon_error::LoadError;
use std::path::{Path, PathBuf};

/// One scene as seen by the checks: its name and the loaded record.
#[derive(Debug)]
pub struct SceneEntry {
    /// File the record came from
    pub path: PathBuf,
    /// Scene name used in messages (the file stem)
    pub name: String,
    /// The record, or why it could not be loaded
    pub record: Result<Scene, LoadError>,
}

/// An ordered collection of scene files.
///
/// Records are read on demand and dropped once the caller is done with each
/// one, so every pass over the source re-reads the files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SceneSource {
    files: Vec<PathBuf>,
}

impl SceneSource {
    /// Every `*.yml` file directly inside `dir`, in path order.
    ///
    /// A missing directory is an empty source.
    pub fn from_dir(dir: &Path) -> Result<Self, LoadError> {
        if !dir.is_dir() {
            tracing::debug!(dir = %dir.display(), "No scenes directory");
            return Ok(Self::default());
        }
        Ok(Self {
            files: list_files(dir, "yml")?,
        })
    }

    /// A source over an explicit list of files, visited in the given order.
    pub fn from_files(files: impl IntoIterator<Item = PathBuf>) -> Self {
        Self {
            files: files.into_iter().collect(),
        }
    }

    /// Files in visiting order.
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    /// Number of scene files.
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Returns true if there are no scene files.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    /// Loads each scene in order.
    pub fn entries(&self) -> impl Iterator<Item = SceneEntry> + '_ {
        self.files.iter().map(|path| SceneEntry {
            path: path.clone(),
            name: file_stem(path),
            record: read_record::<Scene>(path),
        })
    }
}
