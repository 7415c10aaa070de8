pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use domain::collection::{Database, ItemCount, LookupError, StatusReport};
pub use storage::{load, merge, DataPaths};
