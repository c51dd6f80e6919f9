//! Conversion error types.

/// Kinds of conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ConvertErrorKind {
    /// Input document could not be loaded
    #[display("{}", _0)]
    Load(String),
    /// Output file or directory could not be written
    #[display("Failed to write {path}: {message}")]
    Write {
        /// Output path
        path: String,
        /// Underlying I/O message
        message: String,
    },
    /// Record has no identifier to name its output file
    #[display("Record in {path} has no id")]
    MissingId {
        /// Source path
        path: String,
    },
    /// Frontmatter could not be serialized
    #[display("Failed to serialize frontmatter for {}: {}", id, message)]
    Frontmatter {
        /// Record identifier
        id: String,
        /// Underlying serializer message
        message: String,
    },
}

/// Conversion error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Convert Error: {} at line {} in {}", kind, line, file)]
pub struct ConvertError {
    /// The kind of error that occurred
    pub kind: ConvertErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ConvertError {
    /// Create a new conversion error with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ConvertErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl From<crate::LoadError> for ConvertError {
    #[track_caller]
    fn from(err: crate::LoadError) -> Self {
        Self::new(ConvertErrorKind::Load(err.kind.to_string()))
    }
}
