//! Validation results shared by the schema and Markdown validators.

use serde::Serialize;

/// Result of validating a set of canon files.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ValidationResult {
    /// Validation errors (must be fixed)
    pub errors: Vec<ValidationError>,
    /// Validation warnings (should be reviewed)
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a new validation result with no errors or warnings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if validation passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if the result passes, counting warnings as failures in strict mode.
    pub fn passes(&self, strict: bool) -> bool {
        self.is_valid() && !(strict && !self.warnings.is_empty())
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, kind: ValidationErrorKind, message: impl Into<String>) {
        self.errors.push(ValidationError {
            kind,
            message: message.into(),
        });
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, kind: ValidationWarningKind, message: impl Into<String>) {
        self.warnings.push(ValidationWarning {
            kind,
            message: message.into(),
        });
    }

    /// Formats errors as a human-readable string.
    pub fn format_errors(&self) -> String {
        self.errors
            .iter()
            .map(|error| format!("  ERROR: {}", error.message))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Formats warnings as a human-readable string.
    pub fn format_warnings(&self) -> String {
        self.warnings
            .iter()
            .map(|warning| format!("  WARNING: {}", warning.message))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Type of validation error
    pub kind: ValidationErrorKind,
    /// Human-readable error message
    pub message: String,
}

/// A validation warning that should be reviewed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationWarning {
    /// Type of validation warning
    pub kind: ValidationWarningKind,
    /// Human-readable warning message
    pub message: String,
}

/// Types of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationErrorKind {
    /// Required source file or directory is missing
    MissingSource,
    /// Source could not be read or parsed
    LoadFailure,
    /// Record does not match its schema
    SchemaViolation,
    /// Markdown frontmatter lacks required fields
    MissingFrontmatter,
    /// Markdown body lacks required sections
    MissingSection,
}

/// Types of validation warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ValidationWarningKind {
    /// Optional source directory or file is missing
    MissingSource,
}
