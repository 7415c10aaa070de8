use crate::domain::collection::{Database, LookupError};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

/// Shared, read-only request context.
///
/// The database is loaded once before the router is built and never mutated,
/// so handlers read it without locking.
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<Database>,
    pub platform: Arc<str>,
}

impl AppState {
    pub fn new(database: Database, platform: impl Into<String>) -> Self {
        let platform: String = platform.into();
        Self {
            database: Arc::new(database),
            platform: Arc::from(platform),
        }
    }
}

/// Path shapes listed by the catch-all route.
pub const AVAILABLE_ENDPOINTS: &[&str] = &["/api/status", "/api/:collection", "/api/:collection/:id"];

#[derive(Serialize, Debug, ToSchema)]
pub struct CollectionNotFoundResponse {
    pub error: String,
    /// Every collection name that can be requested instead.
    pub available: Vec<String>,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RecordNotFoundResponse {
    pub error: String,
    /// Number of records in the searched collection.
    pub total_items: usize,
}

#[derive(Serialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EndpointNotFoundResponse {
    pub error: String,
    pub path: String,
    pub available_endpoints: Vec<String>,
}

impl EndpointNotFoundResponse {
    pub fn for_path(path: &str) -> Self {
        Self {
            error: "Endpoint not found".to_string(),
            path: path.to_string(),
            available_endpoints: AVAILABLE_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Lookup failure rendered as a 404 JSON body.
#[derive(Debug)]
pub struct ApiError(pub LookupError);

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.0.to_string();
        match self.0 {
            LookupError::CollectionNotFound { available, .. } => (
                StatusCode::NOT_FOUND,
                Json(CollectionNotFoundResponse { error, available }),
            )
                .into_response(),
            LookupError::RecordNotFound { total_items, .. } => (
                StatusCode::NOT_FOUND,
                Json(RecordNotFoundResponse { error, total_items }),
            )
                .into_response(),
        }
    }
}
