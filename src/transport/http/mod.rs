pub mod router;
pub mod types;
pub mod handlers {
    pub mod collections;
    pub mod fallback;
    pub mod status;
}

pub use router::{create_app, create_router, normalize_paths, ApiDoc, AppService};
pub use types::AppState;
