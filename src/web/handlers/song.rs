//! Song handlers for the web API.

use std::sync::Arc;

use axum::{
    extract::{
        multipart::{MultipartError, MultipartRejection},
        Multipart, Path, State,
    },
    http::StatusCode,
    Json,
};

use crate::song::{UploadRequest, UploadedFile};
use crate::web::dto::{MessageResponse, SongResponse, UploadResponse};
use crate::web::error::{ApiError, ErrorBody};
use crate::web::handlers::AppState;

/// Map a multipart read failure to an API error.
///
/// Bodies over the configured limit surface here as a 413 from the
/// underlying stream.
fn multipart_error(e: MultipartError) -> ApiError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        tracing::warn!("Upload rejected: {}", e);
        ApiError::payload_too_large("File too large")
    } else {
        tracing::error!("Failed to read multipart field: {}", e);
        ApiError::bad_request("Invalid multipart data")
    }
}

/// GET /api/songs - List all songs, newest first.
#[utoipa::path(
    get,
    path = "/api/songs",
    tag = "songs",
    responses(
        (status = 200, description = "All songs, newest first", body = Vec<SongResponse>),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn list_songs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SongResponse>>, ApiError> {
    let entries = state.songs().list().await?;
    tracing::debug!(count = entries.len(), "Listing songs");

    Ok(Json(entries.into_iter().map(SongResponse::from).collect()))
}

/// POST /api/upload - Upload an MP3 or MP4 file.
///
/// Multipart fields: `file` (required) and `title` (optional). Other
/// fields are ignored.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "songs",
    responses(
        (status = 200, description = "Song stored", body = UploadResponse),
        (status = 400, description = "Missing file or unsupported type", body = ErrorBody),
        (status = 413, description = "File too large", body = ErrorBody),
        (status = 500, description = "Storage or database failure", body = ErrorBody)
    )
)]
pub async fn upload_song(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<UploadResponse>, ApiError> {
    tracing::info!("Upload request received");

    let mut multipart = multipart.map_err(|e| {
        tracing::warn!("Upload without multipart body: {}", e);
        ApiError::bad_request("No file provided")
    })?;

    let mut request = UploadRequest::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or("").to_string();

        match name.as_str() {
            "file" => {
                let filename = field.file_name().unwrap_or("").to_string();
                let content = field.bytes().await.map_err(multipart_error)?.to_vec();
                tracing::debug!(filename = %filename, size = content.len(), "Received file field");
                request.file = Some(UploadedFile::new(filename, content));
            }
            "title" => {
                request.title = Some(field.text().await.map_err(multipart_error)?);
            }
            _ => {}
        }
    }

    let song = state.songs().upload(request).await?;

    Ok(Json(UploadResponse::new(song)))
}

/// DELETE /api/delete/:id - Delete one song and its file.
#[utoipa::path(
    delete,
    path = "/api/delete/{id}",
    tag = "songs",
    params(
        ("id" = i64, Path, description = "Song ID")
    ),
    responses(
        (status = 200, description = "Song deleted", body = MessageResponse),
        (status = 404, description = "Song not found", body = ErrorBody),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn delete_song(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.songs().delete(id).await?;

    Ok(Json(MessageResponse::new("Song deleted successfully")))
}

/// DELETE /api/clear - Delete every song and every managed file.
#[utoipa::path(
    delete,
    path = "/api/clear",
    tag = "songs",
    responses(
        (status = 200, description = "Library cleared", body = MessageResponse),
        (status = 500, description = "Database failure", body = ErrorBody)
    )
)]
pub async fn clear_songs(
    State(state): State<Arc<AppState>>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.songs().clear().await?;

    Ok(Json(MessageResponse::new("All songs deleted successfully")))
}
