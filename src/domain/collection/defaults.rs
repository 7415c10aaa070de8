//! Built-in dataset served when no data files are present.

use super::Database;
use anyhow::Context;

const BUILTIN_DATASET: &str = include_str!("defaults.json");

/// Parses the embedded default dataset: one example record per built-in collection.
pub fn builtin_dataset() -> anyhow::Result<Database> {
    let value: serde_json::Value =
        serde_json::from_str(BUILTIN_DATASET).context("built-in dataset is not valid JSON")?;
    Database::from_value(value).context("built-in dataset is not a JSON object")
}
