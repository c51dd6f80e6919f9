//! Checks over a narrative canon.
//!
//! - [`continuity`]: cross-reference scenes against the canon registry
//! - [`schema`]: validate YAML canon records against their schemas
//! - [`markdown`]: validate Markdown canon files

pub mod continuity;
mod issue;
pub mod markdown;
pub mod registry;
mod scenes;
pub mod schema;
mod validation;

pub use continuity::{CheckResults, ContinuityChecker, ContinuityReport, run_continuity};
pub use issue::{CheckName, Issue, IssueKind};
pub use registry::{CanonRegistry, RegistryLoad};
pub use scenes::{SceneEntry, SceneSource};
pub use validation::{
    ValidationError, ValidationErrorKind, ValidationResult, ValidationWarning,
    ValidationWarningKind,
};
