//! Reading a directory of per-collection JSON files.
//!
//! Each `{name}.json` file becomes one collection keyed by its file stem. Files
//! are visited in lexicographic order so results do not depend on the
//! filesystem's enumeration order.

use crate::domain::collection::Database;
use anyhow::{anyhow, Context};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::{Path, PathBuf};

/// Outcome of reading a collection directory.
#[derive(Debug, Default)]
pub struct DirectoryScan {
    /// Collections that parsed successfully.
    pub database: Database,
    /// Number of `.json` files found, parsed or not.
    pub files_found: usize,
    /// Files that could not be read or parsed, with the reason.
    pub failures: Vec<(PathBuf, String)>,
}

impl DirectoryScan {
    pub fn loaded(&self) -> usize {
        self.database.len()
    }
}

/// Lists the `.json` files directly inside `dir`, sorted by file name.
pub fn list_json_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let entries =
        fs::read_dir(dir).with_context(|| format!("failed to read directory {}", dir.display()))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry?.path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        if is_json && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parses one collection file into `(collection name, value)`.
pub fn read_collection_file(path: &Path) -> anyhow::Result<(String, JsonValue)> {
    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(|| anyhow!("file name is not valid UTF-8: {}", path.display()))?
        .to_string();
    let content = fs::read_to_string(path)?;
    let value: JsonValue = serde_json::from_str(&content)?;
    Ok((name, value))
}

/// Reads every collection file in `dir`.
///
/// Per-file failures are logged and collected; they never abort the scan.
/// Only a missing or unreadable directory is an error.
pub fn read_collection_dir(dir: &Path) -> anyhow::Result<DirectoryScan> {
    let files = list_json_files(dir)?;
    let mut scan = DirectoryScan {
        files_found: files.len(),
        ..DirectoryScan::default()
    };

    for path in files {
        match read_collection_file(&path) {
            Ok((name, value)) => {
                tracing::debug!(file = %path.display(), collection = %name, "loaded collection file");
                scan.database.insert(name, value);
            }
            Err(e) => {
                tracing::warn!(file = %path.display(), error = %e, "skipping unreadable collection file");
                scan.failures.push((path, e.to_string()));
            }
        }
    }

    Ok(scan)
}
