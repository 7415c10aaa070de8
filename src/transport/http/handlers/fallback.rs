use crate::transport::http::types::EndpointNotFoundResponse;
use axum::http::{Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Catch-all for unmatched paths.
///
/// GET and HEAD answer 200 with a body describing the supported path shapes,
/// matching the behavior existing clients of this API rely on. Other methods
/// get a plain 404.
pub async fn fallback_handler(method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        tracing::debug!(%method, path = %uri.path(), "unmatched route");
        return StatusCode::NOT_FOUND.into_response();
    }

    tracing::debug!(path = %uri.path(), "unmatched route");
    (StatusCode::OK, Json(EndpointNotFoundResponse::for_path(uri.path()))).into_response()
}
