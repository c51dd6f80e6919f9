//! Aggregated `index.md` listings for converted directories.

use canon_core::source::{file_stem, list_files};
use canon_core::{CharacterType, MarkdownDocument};
use canon_error::LoadError;
use std::path::Path;

/// File name of every generated listing.
pub const INDEX_FILE: &str = "index.md";

/// One linked entry of a listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Link text, taken from the file's title field
    pub label: String,
    /// File name the entry links to
    pub file_name: String,
    /// Suffix appended after the link, such as a date
    pub detail: Option<String>,
    /// Character type, when the frontmatter declares one
    pub character_type: Option<CharacterType>,
}

impl IndexEntry {
    fn line(&self) -> String {
        match &self.detail {
            Some(detail) => format!("- [{}]({}) - {}\n", self.label, self.file_name, detail),
            None => format!("- [{}]({})\n", self.label, self.file_name),
        }
    }
}

/// Reads an entry for every Markdown file in `dir` except the listing itself.
///
/// `label_field` names the frontmatter field used as link text, falling back
/// to the file stem. `detail_field` optionally names a field appended after
/// the link when present and non-empty.
pub(crate) fn read_entries(
    dir: &Path,
    label_field: &str,
    detail_field: Option<&str>,
) -> Result<Vec<IndexEntry>, LoadError> {
    let mut entries = Vec::new();

    for path in list_files(dir, "md")? {
        let Some(file_name) = path.file_name().map(|n| n.to_string_lossy().into_owned()) else {
            continue;
        };
        if file_name == INDEX_FILE {
            continue;
        }

        let document = MarkdownDocument::read(&path)?;
        let label = document
            .field_text(label_field)
            .unwrap_or_else(|| file_stem(&path));
        let detail = detail_field
            .and_then(|field| document.field_text(field))
            .filter(|detail| !detail.is_empty());
        let character_type = document
            .field_text("type")
            .and_then(|value| value.parse::<CharacterType>().ok());

        entries.push(IndexEntry {
            label,
            file_name,
            detail,
            character_type,
        });
    }

    Ok(entries)
}

/// Renders a flat listing under a top-level heading.
///
/// # Examples
///
/// ```
/// use canon_convert::{IndexEntry, render_index};
///
/// let entries = vec![IndexEntry {
///     label: "Sweetwater".to_string(),
///     file_name: "l_sweetwater.md".to_string(),
///     detail: None,
///     character_type: None,
/// }];
/// assert_eq!(
///     render_index("Locations", &entries),
///     "# Locations\n\n- [Sweetwater](l_sweetwater.md)\n"
/// );
/// ```
pub fn render_index(title: &str, entries: &[IndexEntry]) -> String {
    let mut index = format!("# {}\n\n", title);
    for entry in entries {
        index.push_str(&entry.line());
    }
    index
}

/// Renders the character listing with hosts first and everyone else after.
pub fn render_character_index(entries: &[IndexEntry]) -> String {
    let (hosts, humans): (Vec<&IndexEntry>, Vec<&IndexEntry>) = entries
        .iter()
        .partition(|entry| entry.character_type == Some(CharacterType::Host));

    let mut index = String::from("# Characters\n\n## Hosts\n");
    for entry in hosts {
        index.push_str(&entry.line());
    }
    index.push_str("\n## Humans\n");
    for entry in humans {
        index.push_str(&entry.line());
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, character_type: Option<CharacterType>) -> IndexEntry {
        IndexEntry {
            label: label.to_string(),
            file_name: format!("{}.md", label.to_lowercase()),
            detail: None,
            character_type,
        }
    }

    #[test]
    fn test_character_index_groups_hosts_first() {
        let entries = vec![
            entry("William", Some(CharacterType::Human)),
            entry("Dolores", Some(CharacterType::Host)),
            entry("Unknown", None),
        ];
        assert_eq!(
            render_character_index(&entries),
            concat!(
                "# Characters\n\n",
                "## Hosts\n- [Dolores](dolores.md)\n\n",
                "## Humans\n- [William](william.md)\n- [Unknown](unknown.md)\n",
            )
        );
    }

    #[test]
    fn test_detail_suffix() {
        let mut event = entry("Park Opens", None);
        event.detail = Some("2020".to_string());
        assert_eq!(event.line(), "- [Park Opens](park opens.md) - 2020\n");
    }
}
