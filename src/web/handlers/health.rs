//! Health check handler.

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::web::dto::HealthResponse;
use crate::web::handlers::AppState;

/// GET /api/health - Liveness and upload directory status.
#[utoipa::path(
    get,
    path = "/api/health",
    tag = "health",
    responses(
        (status = 200, description = "Server is up", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        uploads_folder: state.songs().storage_available(),
    })
}
