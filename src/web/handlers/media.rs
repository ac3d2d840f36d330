//! Media file serving for stored uploads.

use std::io;
use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Path, Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::web::handlers::AppState;

/// GET /uploads/*filename - Serve a stored media file.
///
/// Responses are plain text on failure: 403 `Forbidden` for names that
/// could leave the upload directory, 404 `File not found` otherwise.
/// Successful responses support range requests.
pub async fn serve_upload(
    State(state): State<Arc<AppState>>,
    Path(filename): Path<String>,
    request: Request,
) -> Response {
    let path = match state.storage.resolve(&filename) {
        Ok(path) => path,
        Err(_) => {
            tracing::warn!("Rejected unsafe media path: {}", filename);
            return (StatusCode::FORBIDDEN, "Forbidden").into_response();
        }
    };

    match tokio::fs::metadata(&path).await {
        Ok(metadata) if metadata.is_file() => {}
        Ok(_) => return (StatusCode::NOT_FOUND, "File not found").into_response(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!("Media file not found: {}", path.display());
            return (StatusCode::NOT_FOUND, "File not found").into_response();
        }
        Err(e) => {
            tracing::error!("Failed to stat {}: {}", path.display(), e);
            return (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response();
        }
    }

    match ServeFile::new(&path).oneshot(request).await {
        Ok(response) => response.map(Body::new).into_response(),
        Err(never) => match never {},
    }
}
