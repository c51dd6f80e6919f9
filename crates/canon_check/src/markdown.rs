//! Validation of the modular Markdown canon.

use crate::validation::{ValidationErrorKind, ValidationResult, ValidationWarningKind};
use canon_core::source::list_files;
use canon_core::{CanonPaths, EntityKind, MarkdownDocument};
use canon_error::LoadErrorKind;
use pulldown_cmark::{Event, HeadingLevel, Parser, Tag, TagEnd};
use std::path::{Path, PathBuf};

/// Aggregated listing file generated next to the entity files.
const INDEX_FILE: &str = "index.md";

/// Frontmatter and section requirements for one entity kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkdownRules {
    /// Entity kind the rules apply to
    pub kind: EntityKind,
    /// Frontmatter fields every file must define
    pub required_fields: &'static [&'static str],
    /// Second-level headings every file must contain
    pub required_sections: &'static [&'static str],
    /// Whether a missing directory is an error rather than a warning
    pub directory_required: bool,
}

impl MarkdownRules {
    /// Rules for an entity kind, or `None` for kinds kept only in YAML.
    pub fn for_kind(kind: EntityKind) -> Option<Self> {
        let (required_fields, required_sections, directory_required): (
            &'static [&'static str],
            &'static [&'static str],
            bool,
        ) = match kind {
            EntityKind::Character => (
                &["id", "name", "type", "role", "status"],
                &["Overview", "Traits", "Goals", "Relationships", "Backstory"],
                true,
            ),
            EntityKind::Location => (&["id", "name"], &["Overview"], true),
            EntityKind::Theme => (
                &["id", "name"],
                &["Description", "Examples", "Significance"],
                true,
            ),
            EntityKind::TimelineEvent => (&["id", "title"], &["Overview", "Significance"], true),
            EntityKind::Scene => (&["id", "episode", "title"], &["Synopsis", "Characters"], false),
            EntityKind::Episode => return None,
        };

        Some(Self {
            kind,
            required_fields,
            required_sections,
            directory_required,
        })
    }

    /// Checks one parsed document, returning the first failure message.
    ///
    /// # Examples
    ///
    /// ```
    /// use canon_check::markdown::MarkdownRules;
    /// use canon_core::{EntityKind, MarkdownDocument};
    /// use std::path::Path;
    ///
    /// let rules = MarkdownRules::for_kind(EntityKind::Location).unwrap();
    /// let doc = MarkdownDocument::parse(
    ///     Path::new("l_mesa.md"),
    ///     "---\nid: L-MESA\nname: Mesa Hub\n---\n\n# Mesa Hub\n\n## Overview\nHQ\n",
    /// )
    /// .unwrap();
    /// assert_eq!(rules.check(&doc), None);
    /// ```
    pub fn check(&self, document: &MarkdownDocument) -> Option<(ValidationErrorKind, String)> {
        let missing_fields: Vec<&str> = self
            .required_fields
            .iter()
            .copied()
            .filter(|field| !document.has_field(field))
            .collect();
        if !missing_fields.is_empty() {
            return Some((
                ValidationErrorKind::MissingFrontmatter,
                format!("Missing required frontmatter fields: {:?}", missing_fields),
            ));
        }

        let headings = section_headings(document.body());
        let missing_sections: Vec<String> = self
            .required_sections
            .iter()
            .filter(|section| !headings.iter().any(|h| h == *section))
            .map(|section| format!("## {}", section))
            .collect();
        if !missing_sections.is_empty() {
            return Some((
                ValidationErrorKind::MissingSection,
                format!("Missing required sections: {:?}", missing_sections),
            ));
        }

        None
    }
}

/// Text of every second-level heading in a Markdown body.
pub fn section_headings(body: &str) -> Vec<String> {
    let mut headings = Vec::new();
    let mut current: Option<String> = None;

    for event in Parser::new(body) {
        match event {
            Event::Start(Tag::Heading {
                level: HeadingLevel::H2,
                ..
            }) => current = Some(String::new()),
            Event::End(TagEnd::Heading(HeadingLevel::H2)) => {
                if let Some(text) = current.take() {
                    headings.push(text.trim().to_string());
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.push_str(&text);
                }
            }
            _ => {}
        }
    }

    headings
}

/// Validates Markdown canon files of one repository.
#[derive(Debug, Clone)]
pub struct MarkdownValidator {
    paths: CanonPaths,
    result: ValidationResult,
}

impl MarkdownValidator {
    /// Creates a validator for a repository.
    pub fn new(paths: CanonPaths) -> Self {
        Self {
            paths,
            result: ValidationResult::new(),
        }
    }

    /// Errors and warnings gathered so far.
    pub fn result(&self) -> &ValidationResult {
        &self.result
    }

    /// Validates a single file against the rules of its kind.
    #[tracing::instrument(skip_all, fields(path = %path.display()))]
    pub fn validate_file(&mut self, rules: &MarkdownRules, path: &Path) -> bool {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        let document = match MarkdownDocument::read(path) {
            Ok(document) => document,
            Err(e) => {
                let reason = match e.kind() {
                    LoadErrorKind::Read { message, .. } | LoadErrorKind::Parse { message, .. } => {
                        message.clone()
                    }
                    other => other.to_string(),
                };
                self.result.add_error(
                    ValidationErrorKind::LoadFailure,
                    format!("{} {}: Failed to parse: {}", rules.kind, name, reason),
                );
                return false;
            }
        };

        match rules.check(&document) {
            None => {
                tracing::debug!(kind = %rules.kind, file = %name, "Valid");
                true
            }
            Some((kind, message)) => {
                self.result
                    .add_error(kind, format!("{} {}: {}", rules.kind, name, message));
                false
            }
        }
    }

    /// Validates every file of one entity kind.
    #[tracing::instrument(skip(self))]
    pub fn validate_kind(&mut self, kind: EntityKind) -> bool {
        let (Some(rules), Some(dir)) = (MarkdownRules::for_kind(kind), self.directory(kind)) else {
            return true;
        };

        if !dir.is_dir() {
            let label = directory_label(kind);
            if rules.directory_required {
                self.result.add_error(
                    ValidationErrorKind::MissingSource,
                    format!("Missing {} directory", label),
                );
                return false;
            }
            self.result.add_warning(
                ValidationWarningKind::MissingSource,
                format!("No {} directory found", label),
            );
            return true;
        }

        let files = match list_files(&dir, "md") {
            Ok(files) => files,
            Err(e) => {
                self.result
                    .add_error(ValidationErrorKind::LoadFailure, e.kind().to_string());
                return false;
            }
        };

        let mut valid = true;
        for file in files {
            if file.file_name().is_some_and(|name| name == INDEX_FILE) {
                continue;
            }
            valid &= self.validate_file(&rules, &file);
        }
        valid
    }

    /// Runs every entity kind, never stopping early.
    pub fn run_all(mut self) -> ValidationResult {
        for kind in [
            EntityKind::Character,
            EntityKind::Location,
            EntityKind::Theme,
            EntityKind::TimelineEvent,
            EntityKind::Scene,
        ] {
            tracing::info!(section = %kind, "Checking");
            self.validate_kind(kind);
        }
        self.result
    }

    fn directory(&self, kind: EntityKind) -> Option<PathBuf> {
        let dir = match kind {
            EntityKind::Character => self.paths.characters_dir(),
            EntityKind::Location => self.paths.locations_dir(),
            EntityKind::Theme => self.paths.themes_dir(),
            EntityKind::TimelineEvent => self.paths.timeline_dir(),
            EntityKind::Scene => self.paths.markdown_scenes_dir(),
            EntityKind::Episode => return None,
        };
        Some(dir.clone())
    }
}

fn directory_label(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Character => "characters",
        EntityKind::Location => "locations",
        EntityKind::Theme => "themes",
        EntityKind::TimelineEvent => "timeline",
        EntityKind::Scene => "scenes",
        EntityKind::Episode => "episodes",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_headings_only_level_two() {
        let body = "# Title\n\n## Overview\ntext\n\n### Detail\n\n## `Traits`\n";
        assert_eq!(section_headings(body), vec!["Overview", "Traits"]);
    }

    #[test]
    fn test_missing_fields_reported_before_sections() {
        let rules = MarkdownRules::for_kind(EntityKind::Theme).unwrap();
        let doc = MarkdownDocument::parse(Path::new("t.md"), "no frontmatter").unwrap();
        let (kind, message) = rules.check(&doc).unwrap();
        assert_eq!(kind, ValidationErrorKind::MissingFrontmatter);
        assert_eq!(message, r#"Missing required frontmatter fields: ["id", "name"]"#);
    }

    #[test]
    fn test_missing_sections_listed() {
        let rules = MarkdownRules::for_kind(EntityKind::TimelineEvent).unwrap();
        let doc = MarkdownDocument::parse(
            Path::new("te.md"),
            "---\nid: TE-X-1\ntitle: X\n---\n\n## Overview\n",
        )
        .unwrap();
        let (kind, message) = rules.check(&doc).unwrap();
        assert_eq!(kind, ValidationErrorKind::MissingSection);
        assert_eq!(message, r###"Missing required sections: ["## Significance"]"###);
    }

    #[test]
    fn test_episodes_have_no_markdown_rules() {
        assert!(MarkdownRules::for_kind(EntityKind::Episode).is_none());
    }
}
