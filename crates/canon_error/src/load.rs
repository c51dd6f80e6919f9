//! Canon loading error types.

/// Specific error conditions while loading canon sources and records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum LoadErrorKind {
    /// Source file could not be read
    #[display("Failed to read {path}: {message}")]
    Read {
        /// Path of the source
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Source document is not valid YAML or does not match the record type
    #[display("Failed to parse {path}: {message}")]
    Parse {
        /// Path of the source
        path: String,
        /// Underlying parser message
        message: String,
    },
    /// A single record inside an otherwise valid collection is malformed
    #[display("Failed to load {path} record {index}: {message}")]
    Record {
        /// Path of the source
        path: String,
        /// Zero-based position of the record in its collection
        index: usize,
        /// Underlying parser message
        message: String,
    },
}

/// Canon loading error with location tracking.
///
/// # Examples
///
/// ```
/// use canon_error::{LoadError, LoadErrorKind};
///
/// let err = LoadError::new(LoadErrorKind::Parse {
///     path: "story/scenes/S01E01-001.yml".to_string(),
///     message: "did not find expected key".to_string(),
/// });
/// assert!(format!("{}", err).contains("Failed to parse"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Load Error: {} at line {} in {}", kind, line, file)]
pub struct LoadError {
    /// The specific error condition
    pub kind: LoadErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl LoadError {
    /// Create a new LoadError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: LoadErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LoadErrorKind {
        &self.kind
    }
}
