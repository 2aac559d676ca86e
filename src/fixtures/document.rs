// Canonical fixture rendering and all-or-nothing commit to disk

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{error_codes, VectorError, VectorResult};

/// Key holding the provenance label in every fixture
pub const SOURCE_KEY: &str = "source";

/// A provenance-tagged fixture awaiting rendering
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureDocument {
    source: String,
    sections: Map<String, Value>,
}

impl FixtureDocument {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            sections: Map::new(),
        }
    }

    /// Add a named result sequence.
    ///
    /// A later section with the same name replaces the earlier one. The
    /// name `source` is reserved for the provenance label.
    pub fn with_section<T: Serialize>(mut self, name: &str, records: &[T]) -> VectorResult<Self> {
        if name == SOURCE_KEY {
            return Err(VectorError::SerializationError(format!(
                "section name '{}' is reserved",
                SOURCE_KEY
            )));
        }
        let value = serde_json::to_value(records)?;
        self.sections.insert(name.to_string(), value);
        Ok(self)
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn section(&self, name: &str) -> Option<&Value> {
        self.sections.get(name)
    }

    /// The fixture as a canonical JSON value
    pub fn to_value(&self) -> Value {
        let mut object = self.sections.clone();
        object.insert(SOURCE_KEY.to_string(), Value::String(self.source.clone()));
        canonicalize(Value::Object(object))
    }

    /// Render canonical JSON text.
    pub fn render(&self) -> VectorResult<String> {
        Ok(serde_json::to_string_pretty(&self.to_value())?)
    }

    /// Render and write to `path`, creating parent directories.
    pub fn write_to(&self, path: &Path) -> VectorResult<()> {
        let contents = self.render()?;
        ensure_parent(path)?;
        fs::write(path, contents).map_err(|e| {
            VectorError::output_error("write", path, &e.to_string(), error_codes::OUTPUT_WRITE_FAILED)
        })?;
        log::info!("wrote {}", path.display());
        Ok(())
    }
}

/// Rebuild every object with its keys in lexicographic order.
///
/// Without serde_json's `preserve_order` feature maps are already sorted;
/// with it they keep insertion order, so the order is imposed here.
pub fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            entries.sort_by(|a, b| a.0.cmp(&b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(key, value)| (key, canonicalize(value)))
                    .collect(),
            )
        }
        Value::Array(items) => Value::Array(items.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

fn ensure_parent(path: &Path) -> VectorResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| {
            VectorError::output_error(
                "create_dir_all",
                parent,
                &e.to_string(),
                error_codes::OUTPUT_DIRECTORY_FAILED,
            )
        })?;
    }
    Ok(())
}

fn staging_path(path: &Path) -> VectorResult<PathBuf> {
    let name = path.file_name().ok_or_else(|| {
        VectorError::output_error(
            "stage",
            path,
            "destination has no file name",
            error_codes::OUTPUT_WRITE_FAILED,
        )
    })?;
    let mut staged: OsString = name.to_os_string();
    staged.push(".tmp");
    Ok(path.with_file_name(staged))
}

fn discard(staged: &[(PathBuf, &Path)]) {
    for (tmp, _) in staged {
        if let Err(e) = fs::remove_file(tmp) {
            log::warn!("could not remove staged file {}: {}", tmp.display(), e);
        }
    }
}

/// Write a batch of fixtures so that a failure leaves no destination
/// modified.
///
/// Every document is rendered first, then written next to its destination
/// as `<name>.tmp`. Only when all staged writes succeeded are they renamed
/// into place. Returns the destination paths in input order.
pub fn write_fixtures(documents: &[(PathBuf, FixtureDocument)]) -> VectorResult<Vec<PathBuf>> {
    let rendered = documents
        .iter()
        .map(|(path, document)| document.render().map(|contents| (path.as_path(), contents)))
        .collect::<VectorResult<Vec<_>>>()?;

    let mut staged: Vec<(PathBuf, &Path)> = Vec::with_capacity(rendered.len());
    for (path, contents) in &rendered {
        let result = ensure_parent(path).and_then(|_| {
            let tmp = staging_path(path)?;
            fs::write(&tmp, contents).map_err(|e| {
                VectorError::output_error("write", &tmp, &e.to_string(), error_codes::OUTPUT_WRITE_FAILED)
            })?;
            Ok(tmp)
        });
        match result {
            Ok(tmp) => staged.push((tmp, *path)),
            Err(e) => {
                discard(&staged);
                return Err(e);
            }
        }
    }

    for (index, (tmp, path)) in staged.iter().enumerate() {
        if let Err(e) = fs::rename(tmp, path) {
            discard(&staged[index..]);
            return Err(VectorError::output_error(
                "rename",
                path,
                &e.to_string(),
                error_codes::OUTPUT_COMMIT_FAILED,
            ));
        }
        log::info!("wrote {}", path.display());
    }

    Ok(rendered.iter().map(|(path, _)| path.to_path_buf()).collect())
}
