//! Song record types.

use crate::file::{MediaStorage, MediaType};

/// One uploaded media item.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Song {
    /// Unique song ID.
    pub id: i64,
    /// Display title.
    pub title: String,
    /// Server-side storage path of the binary.
    pub file_path: String,
    /// Lowercase extension (`mp3` or `mp4`).
    pub file_type: String,
    /// Insertion timestamp (`YYYY-MM-DD HH:MM:SS`, UTC).
    pub created_at: String,
}

impl Song {
    /// Public URL path the file is served under.
    pub fn public_path(&self) -> String {
        MediaStorage::public_path(&self.file_path)
    }

    /// Whether the backing file currently exists on disk.
    pub fn file_exists(&self) -> bool {
        MediaStorage::exists(&self.file_path)
    }
}

/// Data for inserting a new song.
#[derive(Debug, Clone)]
pub struct NewSong {
    /// Display title.
    pub title: String,
    /// Storage path of the already-saved binary.
    pub file_path: String,
    /// Validated media type.
    pub media_type: MediaType,
}

impl NewSong {
    /// Create a new NewSong.
    pub fn new(title: impl Into<String>, file_path: impl Into<String>, media_type: MediaType) -> Self {
        Self {
            title: title.into(),
            file_path: file_path.into(),
            media_type,
        }
    }
}
