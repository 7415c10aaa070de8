//! Startup loading of the collection database.
//!
//! Resolution order, first success wins:
//! 1. the merged document (`db.json`), whose top-level keys are collection names;
//! 2. the per-collection directory (`db/`), one collection per `.json` file;
//! 3. the built-in default dataset;
//! 4. an empty database.
//!
//! Loading never fails. Every error degrades to the next step and is only logged.

use crate::domain::collection::{builtin_dataset, Database};
use crate::storage::collection_dir::read_collection_dir;
use anyhow::{anyhow, Context};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem locations the loader consults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataPaths {
    pub merged_file: PathBuf,
    pub collection_dir: PathBuf,
}

impl DataPaths {
    pub fn new(merged_file: impl Into<PathBuf>, collection_dir: impl Into<PathBuf>) -> Self {
        Self {
            merged_file: merged_file.into(),
            collection_dir: collection_dir.into(),
        }
    }

    /// Paths resolved from `DB_FILE` / `DB_DIR` (see [`crate::infra::config`]).
    pub fn from_env() -> Self {
        Self::new(crate::infra::config::db_file(), crate::infra::config::db_dir())
    }
}

/// Which resolution step produced the database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    MergedDocument,
    CollectionDirectory,
    BuiltinDefaults,
    Empty,
}

impl fmt::Display for LoadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LoadSource::MergedDocument => "merged document",
            LoadSource::CollectionDirectory => "collection directory",
            LoadSource::BuiltinDefaults => "built-in defaults",
            LoadSource::Empty => "empty",
        };
        f.write_str(s)
    }
}

/// Loads the database, never failing.
pub fn load(paths: &DataPaths) -> Database {
    load_with_source(paths).0
}

/// Like [`load`], also reporting which step produced the result.
pub fn load_with_source(paths: &DataPaths) -> (Database, LoadSource) {
    if paths.merged_file.exists() {
        match load_merged_document(&paths.merged_file) {
            Ok(db) => {
                tracing::info!(
                    file = %paths.merged_file.display(),
                    collections = db.len(),
                    "loaded merged document"
                );
                return (db, LoadSource::MergedDocument);
            }
            Err(e) => {
                tracing::error!(
                    file = %paths.merged_file.display(),
                    error = %e,
                    "failed to read merged document, trying collection directory"
                );
            }
        }
    }

    if paths.collection_dir.is_dir() {
        match read_collection_dir(&paths.collection_dir) {
            Ok(scan) => {
                tracing::info!(
                    dir = %paths.collection_dir.display(),
                    collections = scan.loaded(),
                    skipped = scan.failures.len(),
                    "loaded collection directory"
                );
                return (scan.database, LoadSource::CollectionDirectory);
            }
            Err(e) => {
                tracing::error!(
                    dir = %paths.collection_dir.display(),
                    error = %e,
                    "failed to read collection directory"
                );
            }
        }
    }

    match builtin_dataset() {
        Ok(db) => {
            tracing::warn!("no database files found, serving built-in defaults");
            (db, LoadSource::BuiltinDefaults)
        }
        Err(e) => {
            tracing::error!(error = %e, "built-in defaults unavailable, serving empty database");
            (Database::new(), LoadSource::Empty)
        }
    }
}

/// Parses the merged document. The top level must be a JSON object.
pub fn load_merged_document(path: &Path) -> anyhow::Result<Database> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let value: serde_json::Value = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    Database::from_value(value)
        .ok_or_else(|| anyhow!("{} must contain a JSON object at top level", path.display()))
}
