//! Domain model for served JSON collections.
//!
//! A [`Database`] maps collection names to arbitrary JSON values. Collections are
//! normally arrays of record objects carrying an `id` field, but nothing here
//! enforces a schema: every value stays a `serde_json::Value` end to end.

pub mod database;
pub mod defaults;
pub mod ids;
pub mod status;

pub use database::{Database, LookupError};
pub use defaults::builtin_dataset;
pub use ids::{id_key, ids_match};
pub use status::{ItemCount, ItemCounts, StatusReport};
