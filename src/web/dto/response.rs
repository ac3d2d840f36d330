//! Response DTOs for the Music Hub web API.

use serde::Serialize;
use utoipa::ToSchema;

use crate::song::{Song, SongEntry};

/// A song as listed by `GET /api/songs`.
#[derive(Debug, Serialize, ToSchema)]
pub struct SongResponse {
    /// Song ID.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Public URL path (`/uploads/<storage filename>`).
    pub file_path: String,
    /// `mp3` or `mp4`.
    pub file_type: String,
    /// Insertion timestamp.
    pub created_at: String,
    /// Whether the backing file exists on disk.
    pub exists: bool,
}

impl From<SongEntry> for SongResponse {
    fn from(entry: SongEntry) -> Self {
        let file_path = entry.song.public_path();
        Self {
            id: entry.song.id,
            title: entry.song.title,
            file_path,
            file_type: entry.song.file_type,
            created_at: entry.song.created_at,
            exists: entry.exists,
        }
    }
}

/// Response of `POST /api/upload`.
#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Song ID.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Public URL path.
    pub file_path: String,
    /// `mp3` or `mp4`.
    pub file_type: String,
    /// Success message.
    pub message: String,
}

impl UploadResponse {
    /// Build the upload response for a freshly created song.
    pub fn new(song: Song) -> Self {
        let file_path = song.public_path();
        Self {
            id: song.id,
            title: song.title,
            file_path,
            file_type: song.file_type,
            message: "Song uploaded successfully".to_string(),
        }
    }
}

/// Plain success message.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response of `GET /api/health`.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `ok`.
    pub status: String,
    /// Whether the managed upload directory exists.
    pub uploads_folder: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_song() -> Song {
        Song {
            id: 7,
            title: "My Track".to_string(),
            file_path: "uploads/abc_20240101_120000.mp3".to_string(),
            file_type: "mp3".to_string(),
            created_at: "2024-01-01 12:00:00".to_string(),
        }
    }

    #[test]
    fn test_song_response_from_entry() {
        let response = SongResponse::from(SongEntry {
            song: sample_song(),
            exists: true,
        });

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["title"], "My Track");
        assert_eq!(json["file_path"], "/uploads/abc_20240101_120000.mp3");
        assert_eq!(json["file_type"], "mp3");
        assert_eq!(json["created_at"], "2024-01-01 12:00:00");
        assert_eq!(json["exists"], true);
    }

    #[test]
    fn test_upload_response() {
        let json = serde_json::to_value(UploadResponse::new(sample_song())).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["file_path"], "/uploads/abc_20240101_120000.mp3");
        assert_eq!(json["message"], "Song uploaded successfully");
        assert!(json.get("exists").is_none());
    }
}
