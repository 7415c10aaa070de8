use crate::transport::http::types::{
    ApiError, AppState, CollectionNotFoundResponse, RecordNotFoundResponse,
};
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    get,
    path = "/api/{collection}",
    params(
        ("collection" = String, Path, description = "Collection name (e.g. dosen)")
    ),
    responses(
        (status = 200, description = "The whole collection, as loaded"),
        (status = 404, description = "Unknown collection", body = CollectionNotFoundResponse)
    )
)]
pub async fn list_collection_handler(
    State(state): State<AppState>,
    Path(collection): Path<String>,
) -> Result<Json<JsonValue>, ApiError> {
    match state.database.get(&collection) {
        Ok(value) => Ok(Json(value.clone())),
        Err(e) => {
            tracing::debug!(collection = %collection, "collection not found");
            Err(e.into())
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/{collection}/{id}",
    params(
        ("collection" = String, Path, description = "Collection name (e.g. dosen)"),
        ("id" = String, Path, description = "Record id; numeric and string ids match each other")
    ),
    responses(
        (status = 200, description = "The first record with a matching id"),
        (status = 404, description = "No record with that id (an unknown collection answers with CollectionNotFoundResponse)", body = RecordNotFoundResponse)
    )
)]
pub async fn get_record_handler(
    State(state): State<AppState>,
    Path((collection, id)): Path<(String, String)>,
) -> Result<Json<JsonValue>, ApiError> {
    let record = state.database.find_record(&collection, &id).map_err(|e| {
        tracing::debug!(collection = %collection, id = %id, error = %e, "record lookup failed");
        ApiError::from(e)
    })?;
    Ok(Json(record.clone()))
}
