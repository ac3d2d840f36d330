//! Router configuration for the Music Hub web server.

use std::path::Path;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Json, Router,
};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{
    clear_songs, delete_song, health_check, list_songs, serve_upload, upload_song, AppState,
};
use super::openapi::ApiDoc;

/// Create the main router: JSON API plus stored media.
///
/// Request bodies above `max_upload_size` bytes are rejected with 413.
pub fn create_router(app_state: Arc<AppState>, max_upload_size: usize) -> Router {
    let api_routes = Router::new()
        .route("/songs", get(list_songs))
        .route("/upload", post(upload_song))
        .route("/delete/:id", delete(delete_song))
        .route("/clear", delete(clear_songs))
        .route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .route("/uploads/*filename", get(serve_upload))
        .layer(DefaultBodyLimit::max(max_upload_size))
        .layer(TraceLayer::new_for_http())
        .with_state(app_state)
}

/// Create the router serving the front end.
///
/// `/` returns `index.html` and `/static/*` serves the directory as-is.
/// Returns `None` if the directory doesn't exist.
pub fn create_static_router(static_path: impl AsRef<Path>) -> Option<Router> {
    let static_path = static_path.as_ref();

    if !static_path.is_dir() {
        tracing::warn!(
            "Static files directory not found: {}. Front end will be disabled.",
            static_path.display()
        );
        return None;
    }

    tracing::info!("Serving static files from: {}", static_path.display());

    Some(
        Router::new()
            .route_service("/", ServeFile::new(static_path.join("index.html")))
            .nest_service("/static", ServeDir::new(static_path)),
    )
}

/// Create the router exposing the OpenAPI document.
pub fn create_openapi_router() -> Router {
    Router::new().route(
        "/api-docs/openapi.json",
        get(|| async { Json(ApiDoc::openapi()) }),
    )
}
