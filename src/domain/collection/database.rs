//! The in-memory collection map and its request-time lookups.

use super::ids::ids_match;
use super::status::{ItemCount, ItemCounts, StatusReport};
use chrono::Utc;
use serde_json::{Map, Value as JsonValue};
use std::fmt::Display;
use thiserror::Error;

/// Lookup failures surfaced to callers.
///
/// Both variants carry enough context for a discoverable error body: the
/// valid collection names, or the size of the collection that was searched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    #[error("Collection '{name}' not found")]
    CollectionNotFound { name: String, available: Vec<String> },

    #[error("Item with id '{id}' not found in collection '{collection}'")]
    RecordNotFound {
        collection: String,
        id: String,
        total_items: usize,
    },
}

/// Mapping from collection name to collection value.
///
/// Built once at startup by the loader and shared read-only afterwards
/// (wrap it in an `Arc` to hand it to request handlers). Key order follows
/// the order in which collections were loaded.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Database {
    collections: Map<String, JsonValue>,
}

impl Database {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self {
            collections: Map::new(),
        }
    }

    /// Wraps an already-built JSON object.
    pub fn from_map(collections: Map<String, JsonValue>) -> Self {
        Self { collections }
    }

    /// Interprets a parsed document as a database.
    ///
    /// Only a top-level JSON object has collection keys; anything else yields `None`.
    pub fn from_value(value: JsonValue) -> Option<Self> {
        match value {
            JsonValue::Object(map) => Some(Self::from_map(map)),
            _ => None,
        }
    }

    /// Adds or replaces a collection. Later inserts win on duplicate names.
    pub fn insert(&mut self, name: impl Into<String>, value: JsonValue) {
        self.collections.insert(name.into(), value);
    }

    /// Returns all collection names in load order.
    pub fn names(&self) -> Vec<String> {
        self.collections.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.collections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.collections.is_empty()
    }

    pub fn as_map(&self) -> &Map<String, JsonValue> {
        &self.collections
    }

    /// Looks up a collection by exact name.
    pub fn get(&self, name: &str) -> Result<&JsonValue, LookupError> {
        self.collections
            .get(name)
            .ok_or_else(|| LookupError::CollectionNotFound {
                name: name.to_string(),
                available: self.names(),
            })
    }

    /// Returns the first record of `name` whose `id` loosely equals `id`.
    ///
    /// A collection that is not an array has no addressable records and is
    /// reported as empty.
    pub fn find_record(&self, name: &str, id: impl Display) -> Result<&JsonValue, LookupError> {
        let collection = self.get(name)?;
        let requested = id.to_string();

        let records = collection.as_array().map(Vec::as_slice).unwrap_or_default();
        records
            .iter()
            .find(|record| {
                record
                    .get("id")
                    .map(|rid| ids_match(rid, &requested))
                    .unwrap_or(false)
            })
            .ok_or_else(|| LookupError::RecordNotFound {
                collection: name.to_string(),
                id: requested,
                total_items: records.len(),
            })
    }

    /// Per-collection item counts; non-array values are marked as such.
    pub fn item_counts(&self) -> ItemCounts {
        self.collections
            .iter()
            .map(|(name, value)| {
                let count = match value.as_array() {
                    Some(items) => ItemCount::Items(items.len()),
                    None => ItemCount::NotArray,
                };
                (name.clone(), count)
            })
            .collect()
    }

    /// Builds the status report served by `/api/status`.
    pub fn status(&self, platform: &str) -> StatusReport {
        StatusReport {
            status: StatusReport::RUNNING.to_string(),
            collections: self.names(),
            platform: platform.to_string(),
            timestamp: Utc::now(),
            item_counts: self.item_counts(),
        }
    }
}

impl FromIterator<(String, JsonValue)> for Database {
    fn from_iter<T: IntoIterator<Item = (String, JsonValue)>>(iter: T) -> Self {
        Self::from_map(iter.into_iter().collect())
    }
}
