//! Conversion driver.

use crate::ConvertResult;
use crate::index::{INDEX_FILE, IndexEntry, read_entries, render_character_index, render_index};
use crate::render::{
    render_character, render_location, render_scene, render_theme, render_timeline_event,
};
use canon_core::source::{collection, decode_records, list_files, read_document, read_record};
use canon_core::{
    CanonPaths, CanonRecord, Character, Location, Scene, Theme, TimelineEvent, id_to_filename,
};
use canon_error::{ConvertError, ConvertErrorKind};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

/// Scene file kept as an authoring template, never converted.
const SCENE_TEMPLATE: &str = "TEMPLATE.yml";

/// Counts of converted records and the listings written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionSummary {
    /// Character files written
    pub characters: usize,
    /// Location files written
    pub locations: usize,
    /// Theme files written
    pub themes: usize,
    /// Timeline files written
    pub timeline: usize,
    /// Scene files written
    pub scenes: usize,
    /// Listing files written
    pub indexes: Vec<PathBuf>,
}

impl ConversionSummary {
    /// Total entity files written, listings excluded.
    pub fn total(&self) -> usize {
        self.characters + self.locations + self.themes + self.timeline + self.scenes
    }
}

/// Converts the YAML canon of one repository into Markdown.
#[derive(Debug, Clone)]
pub struct Converter {
    paths: CanonPaths,
}

impl Converter {
    /// Creates a converter for a repository.
    pub fn new(paths: CanonPaths) -> Self {
        Self { paths }
    }

    /// Converts characters. Returns the number of files written.
    pub fn convert_characters(&self) -> ConvertResult<usize> {
        let characters: Vec<Character> =
            load_collection(self.paths.characters_file(), "characters")?;
        write_records(self.paths.characters_dir(), &characters, render_character)
    }

    /// Converts world locations.
    pub fn convert_locations(&self) -> ConvertResult<usize> {
        let locations: Vec<Location> = load_collection(self.paths.world_file(), "locations")?;
        write_records(self.paths.locations_dir(), &locations, render_location)
    }

    /// Converts themes.
    pub fn convert_themes(&self) -> ConvertResult<usize> {
        let themes: Vec<Theme> = load_collection(self.paths.themes_file(), "themes")?;
        write_records(self.paths.themes_dir(), &themes, render_theme)
    }

    /// Converts timeline events.
    pub fn convert_timeline(&self) -> ConvertResult<usize> {
        let events: Vec<TimelineEvent> = load_collection(self.paths.timeline_file(), "events")?;
        write_records(self.paths.timeline_dir(), &events, render_timeline_event)
    }

    /// Converts every scene file except the authoring template.
    #[tracing::instrument(skip(self))]
    pub fn convert_scenes(&self) -> ConvertResult<usize> {
        let scenes_dir = self.paths.scenes_dir();
        if !scenes_dir.is_dir() {
            tracing::debug!(dir = %scenes_dir.display(), "No scenes to convert");
            return Ok(0);
        }

        let mut written = 0;
        for file in list_files(scenes_dir, "yml")? {
            if file.file_name().is_some_and(|name| name == SCENE_TEMPLATE) {
                tracing::debug!(path = %file.display(), "Skipping template");
                continue;
            }

            let scene: Scene = read_record(&file)?;
            let Some(id) = scene.id().as_deref().filter(|id| !id.is_empty()) else {
                return Err(ConvertError::new(ConvertErrorKind::MissingId {
                    path: file.display().to_string(),
                }));
            };

            let markdown = render_scene(id, &scene)?;
            write_file(&self.paths.markdown_scenes_dir().join(id_to_filename(id)), &markdown)?;
            written += 1;
        }

        tracing::info!(written, "Converted scenes");
        Ok(written)
    }

    /// Writes `index.md` into every converted directory that holds files.
    pub fn write_indexes(&self) -> ConvertResult<Vec<PathBuf>> {
        let mut written = Vec::new();

        if let Some(entries) = existing_entries(self.paths.characters_dir(), "name", None)? {
            let path = self.paths.characters_dir().join(INDEX_FILE);
            write_file(&path, &render_character_index(&entries))?;
            written.push(path);
        }

        let listings = [
            (self.paths.locations_dir(), "Locations", "name", None),
            (self.paths.themes_dir(), "Themes", "name", None),
            (self.paths.timeline_dir(), "Timeline Events", "title", Some("date")),
            (self.paths.markdown_scenes_dir(), "Scenes", "title", Some("id")),
        ];
        for (dir, title, label_field, detail_field) in listings {
            if let Some(entries) = existing_entries(dir, label_field, detail_field)? {
                let path = dir.join(INDEX_FILE);
                write_file(&path, &render_index(title, &entries))?;
                written.push(path);
            }
        }

        tracing::info!(indexes = written.len(), "Created index files");
        Ok(written)
    }

    /// Converts every source then writes the listings.
    ///
    /// The first failure aborts the run; files already written stay in place.
    #[tracing::instrument(skip_all, fields(root = %self.paths.root().display()))]
    pub fn run_all(&self) -> ConvertResult<ConversionSummary> {
        tracing::info!("Converting YAML to Markdown");

        let mut summary = ConversionSummary {
            characters: self.convert_characters()?,
            locations: self.convert_locations()?,
            themes: self.convert_themes()?,
            timeline: self.convert_timeline()?,
            scenes: self.convert_scenes()?,
            indexes: Vec::new(),
        };
        summary.indexes = self.write_indexes()?;

        tracing::info!(files = summary.total(), "Conversion complete");
        Ok(summary)
    }
}

/// Loads a collection strictly: any malformed record fails the conversion.
fn load_collection<T: DeserializeOwned>(path: &Path, key: &str) -> ConvertResult<Vec<T>> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "Source absent, nothing to convert");
        return Ok(Vec::new());
    }

    let document = read_document(path)?;
    let items = collection(path, &document, key)?;
    let (records, errors) = decode_records(path, items);
    match errors.into_iter().next() {
        Some(error) => Err(error.into()),
        None => Ok(records),
    }
}

fn write_records<T, F>(dir: &Path, records: &[T], render: F) -> ConvertResult<usize>
where
    T: CanonRecord,
    F: Fn(&T) -> ConvertResult<String>,
{
    for record in records {
        let markdown = render(record)?;
        write_file(&dir.join(id_to_filename(record.record_id())), &markdown)?;
    }

    if !records.is_empty() {
        tracing::info!(kind = %T::KIND, written = records.len(), "Converted");
    }
    Ok(records.len())
}

fn existing_entries(
    dir: &Path,
    label_field: &str,
    detail_field: Option<&str>,
) -> ConvertResult<Option<Vec<IndexEntry>>> {
    if !dir.is_dir() {
        return Ok(None);
    }
    let entries = read_entries(dir, label_field, detail_field)?;
    Ok((!entries.is_empty()).then_some(entries))
}

fn write_file(path: &Path, contents: &str) -> ConvertResult<()> {
    let write_error = |e: std::io::Error| {
        ConvertError::new(ConvertErrorKind::Write {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    };

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }
    std::fs::write(path, contents).map_err(write_error)?;
    tracing::debug!(path = %path.display(), "Created");
    Ok(())
}
