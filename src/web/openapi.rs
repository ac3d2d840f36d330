//! OpenAPI document for the Music Hub API.

use utoipa::OpenApi;

use super::dto::{HealthResponse, MessageResponse, SongResponse, UploadResponse};
use super::error::{ErrorBody, ErrorCode};
use super::handlers::{health, song};

/// Generated OpenAPI description, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(title = "Music Hub API", description = "Upload, list and play MP3/MP4 files"),
    paths(
        song::list_songs,
        song::upload_song,
        song::delete_song,
        song::clear_songs,
        health::health_check,
    ),
    components(schemas(
        SongResponse,
        UploadResponse,
        MessageResponse,
        HealthResponse,
        ErrorBody,
        ErrorCode,
    )),
    tags(
        (name = "songs", description = "Song library"),
        (name = "health", description = "Server status")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_paths() {
        let doc = ApiDoc::openapi();
        let json = serde_json::to_value(&doc).unwrap();
        let paths = json["paths"].as_object().unwrap();

        assert!(paths.contains_key("/api/songs"));
        assert!(paths.contains_key("/api/upload"));
        assert!(paths.contains_key("/api/delete/{id}"));
        assert!(paths.contains_key("/api/clear"));
        assert!(paths.contains_key("/api/health"));
    }
}
