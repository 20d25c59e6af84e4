use axum::Json;

use crate::models::StatusResponse;

/// Liveness probe. Never touches the record store.
#[utoipa::path(
    get,
    path = "/live",
    responses(
        (status = 200, description = "Process is up", body = StatusResponse)
    ),
    tag = "health"
)]
pub async fn live() -> Json<StatusResponse> {
    Json(StatusResponse::new("live"))
}

/// Readiness probe. Never touches the record store.
#[utoipa::path(
    get,
    path = "/ready",
    responses(
        (status = 200, description = "Ready to serve traffic", body = StatusResponse)
    ),
    tag = "health"
)]
pub async fn ready() -> Json<StatusResponse> {
    Json(StatusResponse::new("ready"))
}
