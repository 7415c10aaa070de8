use crate::domain::collection::StatusReport;
use crate::transport::http::handlers::{collections, fallback, status};
use crate::transport::http::types::{
    AppState, CollectionNotFoundResponse, EndpointNotFoundResponse, RecordNotFoundResponse,
};
use axum::extract::Request;
use axum::http::uri::{PathAndQuery, Uri};
use axum::routing::get;
use axum::Router;
use tower::util::MapRequest;
use tower::ServiceBuilder;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        status::status_handler,
        collections::list_collection_handler,
        collections::get_record_handler
    ),
    components(schemas(
        StatusReport,
        CollectionNotFoundResponse,
        RecordNotFoundResponse,
        EndpointNotFoundResponse
    ))
)]
pub struct ApiDoc;

/// Router wrapped so that paths are normalized before route matching.
///
/// Serve it with `axum::ServiceExt::<Request>::into_make_service`.
pub type AppService = NormalizePath<MapRequest<Router, fn(Request) -> Request>>;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/status", get(status::status_handler))
        .route("/api/:collection", get(collections::list_collection_handler))
        .route("/api/:collection/:id", get(collections::get_record_handler))
        .fallback(fallback::fallback_handler)
        .with_state(app_state)
}

/// [`create_router`] behind path normalization.
pub fn create_app(app_state: AppState) -> AppService {
    normalize_paths(create_router(app_state))
}

/// Trims trailing slashes and matches the `api` / `status` route literals
/// without regard to case. Collection names and ids keep their case.
///
/// Layers added through `Router::layer` run after routing, so normalization
/// has to wrap the finished router.
pub fn normalize_paths(router: Router) -> AppService {
    ServiceBuilder::new()
        .layer(NormalizePathLayer::trim_trailing_slash())
        .map_request(fold_route_literals as fn(Request) -> Request)
        .service(router)
}

fn fold_route_literals(mut req: Request) -> Request {
    let Some(path) = fold_literal_segments(req.uri().path()) else {
        return req;
    };
    let path_and_query = match req.uri().query() {
        Some(q) => format!("{}?{}", path, q),
        None => path,
    };

    let mut parts = req.uri().clone().into_parts();
    match path_and_query.parse::<PathAndQuery>() {
        Ok(pq) => {
            parts.path_and_query = Some(pq);
            if let Ok(uri) = Uri::from_parts(parts) {
                *req.uri_mut() = uri;
            }
        }
        Err(e) => tracing::debug!(error = %e, "could not rewrite request path"),
    }
    req
}

/// Lowercases the route literals of `path`, or `None` when nothing changes.
pub fn fold_literal_segments(path: &str) -> Option<String> {
    let rest = path.strip_prefix('/')?;
    let mut segments: Vec<&str> = rest.split('/').collect();
    if !segments[0].eq_ignore_ascii_case("api") {
        return None;
    }

    let mut changed = false;
    if segments[0] != "api" {
        segments[0] = "api";
        changed = true;
    }
    if segments.len() == 2 && segments[1] != "status" && segments[1].eq_ignore_ascii_case("status")
    {
        segments[1] = "status";
        changed = true;
    }

    changed.then(|| format!("/{}", segments.join("/")))
}
