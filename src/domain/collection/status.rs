//! Process status reporting.

use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use utoipa::ToSchema;

/// Size of one collection as reported by `/api/status`.
///
/// Serializes as a bare number, or as the string `"not array"` for values that
/// are not sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemCount {
    Items(usize),
    NotArray,
}

impl Serialize for ItemCount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ItemCount::Items(n) => serializer.serialize_u64(*n as u64),
            ItemCount::NotArray => serializer.serialize_str("not array"),
        }
    }
}

/// Ordered `name -> count` pairs, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemCounts(Vec<(String, ItemCount)>);

impl ItemCounts {
    pub fn get(&self, name: &str) -> Option<&ItemCount> {
        self.0.iter().find(|(n, _)| n == name).map(|(_, c)| c)
    }
}

impl FromIterator<(String, ItemCount)> for ItemCounts {
    fn from_iter<T: IntoIterator<Item = (String, ItemCount)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Serialize for ItemCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, count) in &self.0 {
            map.serialize_entry(name, count)?;
        }
        map.end()
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StatusReport {
    /// Always `running` while the process serves requests.
    pub status: String,
    /// Loaded collection names, in load order.
    pub collections: Vec<String>,
    /// Free-text hosting label (see `APP_PLATFORM`).
    pub platform: String,
    #[schema(value_type = String, format = DateTime)]
    pub timestamp: DateTime<Utc>,
    /// Item count per collection, or `"not array"`.
    #[schema(value_type = Object)]
    pub item_counts: ItemCounts,
}

impl StatusReport {
    pub const RUNNING: &'static str = "running";
}
