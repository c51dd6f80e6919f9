//! Continuity checking, validation and Markdown conversion for YAML story canon.
//!
//! This crate re-exports the toolkit crates and hosts the command-line
//! interface of the `canon` binary.
//!
//! # Example
//!
//! ```
//! use canon::{CanonPaths, run_continuity};
//!
//! let dir = tempfile::tempdir().unwrap();
//! let report = run_continuity(&CanonPaths::with_default_layout(dir.path()));
//! assert!(report.passed());
//! ```

#![warn(missing_docs)]

pub mod cli;

pub use canon_check::markdown::MarkdownValidator;
pub use canon_check::schema::SchemaValidator;
pub use canon_check::{
    CanonRegistry, CheckName, CheckResults, ContinuityChecker, ContinuityReport, Issue, IssueKind,
    ValidationResult, run_continuity,
};
pub use canon_convert::{ConversionSummary, Converter};
pub use canon_core::{CanonLayout, CanonPaths};
pub use canon_error::{CanonError, CanonErrorKind, CanonResult};
