//! Markdown documents with YAML frontmatter.

use canon_error::{LoadError, LoadErrorKind};
use serde::Serialize;
use serde_yaml::{Mapping, Value};
use std::path::Path;

const DELIMITER: &str = "---";

/// A Markdown document split into frontmatter fields and body.
#[derive(Debug, Clone, Default, PartialEq, derive_getters::Getters)]
pub struct MarkdownDocument {
    /// Frontmatter fields, empty when the document has none
    frontmatter: Mapping,
    /// Markdown body following the frontmatter
    body: String,
}

impl MarkdownDocument {
    /// Reads and parses a Markdown file.
    pub fn read(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LoadError::new(LoadErrorKind::Read {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        })?;
        Self::parse(path, &content)
    }

    /// Parses Markdown content.
    ///
    /// A document without an opening and closing `---` line has no
    /// frontmatter and its whole content is the body.
    ///
    /// # Examples
    ///
    /// ```
    /// use canon_core::MarkdownDocument;
    /// use std::path::Path;
    ///
    /// let doc = MarkdownDocument::parse(
    ///     Path::new("c_dolores.md"),
    ///     "---\nid: C-DOLORES\nname: Dolores\n---\n\n## Overview\nRancher's daughter\n",
    /// )
    /// .unwrap();
    /// assert!(doc.has_field("id"));
    /// assert!(doc.body().contains("## Overview"));
    /// ```
    pub fn parse(path: &Path, content: &str) -> Result<Self, LoadError> {
        let content = content.trim_start_matches('\u{feff}');
        let Some((raw, body)) = split_frontmatter(content) else {
            return Ok(Self {
                frontmatter: Mapping::new(),
                body: content.to_string(),
            });
        };

        let parse_error = |message: String| {
            LoadError::new(LoadErrorKind::Parse {
                path: path.display().to_string(),
                message,
            })
        };

        let parsed = serde_yaml::from_str::<Value>(raw).map_err(|e| parse_error(e.to_string()))?;
        let frontmatter = match parsed {
            Value::Null => Mapping::new(),
            Value::Mapping(map) => map,
            _ => return Err(parse_error("frontmatter must be a mapping".to_string())),
        };

        Ok(Self {
            frontmatter,
            body: body.to_string(),
        })
    }

    /// Returns true if the frontmatter defines `name`.
    pub fn has_field(&self, name: &str) -> bool {
        self.frontmatter.contains_key(name)
    }

    /// Frontmatter field rendered as text, when it is a scalar.
    pub fn field_text(&self, name: &str) -> Option<String> {
        self.frontmatter.get(name).and_then(crate::scalar::scalar_text)
    }
}

/// Splits content into raw frontmatter and body.
fn split_frontmatter(content: &str) -> Option<(&str, &str)> {
    let mut lines = content.split_inclusive('\n');
    let first = lines.next()?;
    if first.trim_end() != DELIMITER {
        return None;
    }

    let start = first.len();
    let mut offset = start;
    for line in lines {
        if line.trim_end() == DELIMITER {
            let raw = &content[start..offset];
            let body = &content[offset + line.len()..];
            return Some((raw, body));
        }
        offset += line.len();
    }
    None
}

/// Renders frontmatter fields and a body as a Markdown document.
pub fn render_markdown<T: Serialize>(
    frontmatter: &T,
    body: &str,
) -> Result<String, serde_yaml::Error> {
    let yaml = serde_yaml::to_string(frontmatter)?;
    Ok(format!("{}\n{}{}\n\n{}", DELIMITER, yaml, DELIMITER, body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_requires_closing_delimiter() {
        assert!(split_frontmatter("---\nid: C-X\n").is_none());
        assert!(split_frontmatter("# Title\n---\n").is_none());
    }

    #[test]
    fn test_split_returns_raw_and_body() {
        let (raw, body) = split_frontmatter("---\nid: C-X\n---\nbody\n").unwrap();
        assert_eq!(raw, "id: C-X\n");
        assert_eq!(body, "body\n");
    }

    #[test]
    fn test_empty_frontmatter_is_empty_mapping() {
        let doc = MarkdownDocument::parse(Path::new("x.md"), "---\n---\n## Overview\n").unwrap();
        assert!(doc.frontmatter().is_empty());
        assert_eq!(doc.body(), "## Overview\n");
    }

    #[test]
    fn test_non_mapping_frontmatter_is_error() {
        let err = MarkdownDocument::parse(Path::new("x.md"), "---\n- a\n- b\n---\n").unwrap_err();
        assert!(err.kind().to_string().contains("must be a mapping"));
    }
}
