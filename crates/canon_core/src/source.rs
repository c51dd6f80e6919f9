//! Reading YAML canon sources.
//!
//! Collections are decoded one record at a time: a malformed document fails
//! its whole source, while a malformed record only drops that record.

use canon_error::{LoadError, LoadErrorKind};
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::path::{Path, PathBuf};

/// Reads a file and parses it as a single YAML document.
#[tracing::instrument(skip_all, fields(path = %path.display()))]
pub fn read_document(path: &Path) -> Result<Value, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        LoadError::new(LoadErrorKind::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })?;

    serde_yaml::from_str(&content).map_err(|e| {
        LoadError::new(LoadErrorKind::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })
}

/// Reads a file and decodes it as one record.
///
/// An empty document is a parse error rather than a record of defaults.
pub fn read_record<T: DeserializeOwned>(path: &Path) -> Result<T, LoadError> {
    let document = read_document(path)?;
    if document.is_null() {
        return Err(LoadError::new(LoadErrorKind::Parse {
            path: path.display().to_string(),
            message: "document is empty".to_string(),
        }));
    }
    serde_yaml::from_value(document).map_err(|e| {
        LoadError::new(LoadErrorKind::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    })
}

/// Returns the sequence stored under `key` in a document.
///
/// An empty document or a missing key yields an empty slice. A key holding
/// anything other than a sequence is a parse error for the whole source.
pub fn collection<'a>(
    path: &Path,
    document: &'a Value,
    key: &str,
) -> Result<&'a [Value], LoadError> {
    let entries = match document {
        Value::Null => return Ok(&[]),
        Value::Mapping(map) => map.get(key),
        _ => {
            return Err(LoadError::new(LoadErrorKind::Parse {
                path: path.display().to_string(),
                message: "document root must be a mapping".to_string(),
            }));
        }
    };

    match entries {
        None | Some(Value::Null) => Ok(&[]),
        Some(Value::Sequence(items)) => Ok(items.as_slice()),
        Some(_) => Err(LoadError::new(LoadErrorKind::Parse {
            path: path.display().to_string(),
            message: format!("`{}` must be a list", key),
        })),
    }
}

/// Decodes the entry at `index` of a collection.
pub fn decode_record<T: DeserializeOwned>(
    path: &Path,
    index: usize,
    item: &Value,
) -> Result<T, LoadError> {
    serde_yaml::from_value::<T>(item.clone()).map_err(|e| {
        tracing::debug!(index, error = %e, "Malformed record");
        LoadError::new(LoadErrorKind::Record {
            path: path.display().to_string(),
            index,
            message: e.to_string(),
        })
    })
}

/// Decodes each entry of a collection, keeping the ones that fit `T`.
pub fn decode_records<T: DeserializeOwned>(
    path: &Path,
    items: &[Value],
) -> (Vec<T>, Vec<LoadError>) {
    let mut records = Vec::with_capacity(items.len());
    let mut errors = Vec::new();

    for (index, item) in items.iter().enumerate() {
        match decode_record(path, index, item) {
            Ok(record) => records.push(record),
            Err(e) => errors.push(e),
        }
    }

    (records, errors)
}

/// Lists files with the given extension directly inside `dir`, sorted by path.
///
/// Sorting makes every run visit records in the same order.
pub fn list_files(dir: &Path, extension: &str) -> Result<Vec<PathBuf>, LoadError> {
    let read_error = |e: std::io::Error| {
        LoadError::new(LoadErrorKind::Read {
            path: dir.display().to_string(),
            message: e.to_string(),
        })
    };

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_file() && path.extension().and_then(|s| s.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// File stem as text, used to name records in messages.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}
