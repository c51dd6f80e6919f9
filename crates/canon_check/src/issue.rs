//! Continuity issues and check names.

use canon_error::LoadError;
use serde::Serialize;

/// Kinds of continuity issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, strum::Display)]
pub enum IssueKind {
    /// A canon source could not be read or parsed
    LoadError,
    /// A scene record could not be read or parsed
    RecordParseError,
    /// A scene names a character missing from the registry
    UnknownCharacterReference,
    /// A scene names a location missing from the registry
    UnknownLocationReference,
}

/// A single reported violation or load failure.
///
/// # Examples
///
/// ```
/// use canon_check::{Issue, IssueKind};
///
/// let issue = Issue::unknown_character("S01E01-001", "C-GHOST");
/// assert_eq!(issue.to_string(), "Scene S01E01-001: Unknown character C-GHOST");
/// assert_eq!(*issue.kind(), IssueKind::UnknownCharacterReference);
/// ```
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, derive_more::Display, derive_getters::Getters,
)]
#[display("{}", message)]
pub struct Issue {
    /// What went wrong
    kind: IssueKind,
    /// Human-readable description
    message: String,
}

impl Issue {
    /// Scene references a character that is not in canon.
    pub fn unknown_character(scene: &str, character_id: &str) -> Self {
        Self {
            kind: IssueKind::UnknownCharacterReference,
            message: format!("Scene {}: Unknown character {}", scene, character_id),
        }
    }

    /// Scene references a location that is not in canon.
    pub fn unknown_location(scene: &str, location_id: &str) -> Self {
        Self {
            kind: IssueKind::UnknownLocationReference,
            message: format!("Scene {}: Unknown location {}", scene, location_id),
        }
    }

    /// A scene record failed to load.
    pub fn record_parse(error: &LoadError) -> Self {
        Self {
            kind: IssueKind::RecordParseError,
            message: error.kind().to_string(),
        }
    }

    /// A canon source failed to load.
    pub fn load(error: &LoadError) -> Self {
        Self {
            kind: IssueKind::LoadError,
            message: error.kind().to_string(),
        }
    }
}

/// Names of the continuity checks, in reporting order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CheckName {
    /// Scene character ids resolve
    CharacterReferences,
    /// Scene location ids resolve
    LocationReferences,
    /// Timeline periods are consistent
    TimelineConsistency,
}

impl CheckName {
    /// Heading used in human-readable reports.
    ///
    /// # Examples
    ///
    /// ```
    /// use canon_check::CheckName;
    ///
    /// assert_eq!(CheckName::CharacterReferences.to_string(), "character_references");
    /// assert_eq!(CheckName::CharacterReferences.title(), "Character References");
    /// ```
    pub fn title(&self) -> String {
        self.as_ref()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}
