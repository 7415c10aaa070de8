use crate::domain::collection::StatusReport;
use crate::transport::http::types::AppState;
use axum::extract::State;
use axum::Json;

#[utoipa::path(
    get,
    path = "/api/status",
    responses(
        (status = 200, description = "Service is running", body = StatusReport)
    )
)]
pub async fn status_handler(State(state): State<AppState>) -> Json<StatusReport> {
    Json(state.database.status(&state.platform))
}
