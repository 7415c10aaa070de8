//! Build-time merge of a collection directory into one merged document.
//!
//! The output is the artifact the loader prefers at startup: a pretty-printed
//! JSON object whose keys are the collection file stems.

use crate::storage::collection_dir::read_collection_dir;
use crate::storage::loader::DataPaths;
use anyhow::{bail, Context};
use std::fs;
use std::path::PathBuf;

/// What a successful merge wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeSummary {
    pub output: PathBuf,
    pub files_found: usize,
    pub collections: Vec<String>,
    pub skipped: Vec<PathBuf>,
}

/// Merges `paths.collection_dir` into `paths.merged_file`.
///
/// Fails without writing when the directory is missing, holds no `.json`
/// files, or none of its files parse. Individual unparseable files are left
/// out of the output.
pub fn try_merge(paths: &DataPaths) -> anyhow::Result<MergeSummary> {
    let source = &paths.collection_dir;
    if !source.is_dir() {
        bail!("source directory {} not found", source.display());
    }

    let scan = read_collection_dir(source)?;
    if scan.files_found == 0 {
        bail!("no JSON files found in {}", source.display());
    }
    if scan.loaded() == 0 {
        bail!(
            "none of the {} JSON files in {} could be parsed",
            scan.files_found,
            source.display()
        );
    }

    for name in scan.database.names() {
        tracing::info!(collection = %name, "merged collection");
    }

    let text = serde_json::to_string_pretty(scan.database.as_map())?;

    let output = &paths.merged_file;
    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    fs::write(output, text).with_context(|| format!("failed to write {}", output.display()))?;

    let summary = MergeSummary {
        output: output.clone(),
        files_found: scan.files_found,
        collections: scan.database.names(),
        skipped: scan.failures.into_iter().map(|(path, _)| path).collect(),
    };
    tracing::info!(
        output = %summary.output.display(),
        files = summary.files_found,
        merged = summary.collections.len(),
        skipped = summary.skipped.len(),
        "wrote merged document"
    );
    Ok(summary)
}

/// Boolean form of [`try_merge`]; the failure reason is logged.
pub fn merge(paths: &DataPaths) -> bool {
    match try_merge(paths) {
        Ok(_) => true,
        Err(e) => {
            tracing::error!(error = %e, "merge failed");
            false
        }
    }
}
