pub mod collection_dir;
pub mod loader;
pub mod merge;

pub use loader::{load, load_with_source, DataPaths, LoadSource};
pub use merge::{merge, try_merge, MergeSummary};
