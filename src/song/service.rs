//! Song service for Music Hub.
//!
//! This module provides the operations behind the HTTP API:
//! - Upload with validation, verified storage and record insertion
//! - Listing with on-disk existence checks
//! - Single delete and clear-all with best-effort file removal

use tracing::{info, warn};

use crate::db::Database;
use crate::file::{split_extension, MediaStorage, MediaType};
use crate::{MusicHubError, Result};

use super::model::{NewSong, Song};
use super::repository::SongRepository;

/// Message returned when an upload carries a disallowed extension.
pub const UNSUPPORTED_TYPE_MESSAGE: &str = "File type not allowed. Only MP3 and MP4 are supported.";

/// The file part of an upload request.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original filename as sent by the client.
    pub filename: String,
    /// File content.
    pub content: Vec<u8>,
}

impl UploadedFile {
    /// Create a new UploadedFile.
    pub fn new(filename: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            filename: filename.into(),
            content,
        }
    }
}

/// Request data for an upload.
#[derive(Debug, Clone, Default)]
pub struct UploadRequest {
    /// File part, if one was sent.
    pub file: Option<UploadedFile>,
    /// Optional title field.
    pub title: Option<String>,
}

impl UploadRequest {
    /// Create an upload request for a file.
    pub fn new(file: UploadedFile) -> Self {
        Self {
            file: Some(file),
            title: None,
        }
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A listed song together with its on-disk state.
#[derive(Debug, Clone)]
pub struct SongEntry {
    /// Stored record.
    pub song: Song,
    /// Whether the backing file exists.
    pub exists: bool,
}

/// Pick the display title: the trimmed supplied title, or the filename stem.
pub fn resolve_title(title: Option<&str>, filename: &str) -> String {
    match title.map(str::trim) {
        Some(title) if !title.is_empty() => title.to_string(),
        _ => split_extension(filename).0.to_string(),
    }
}

/// Service tying the song table to the managed upload directory.
pub struct SongService<'a> {
    db: &'a Database,
    storage: &'a MediaStorage,
}

impl<'a> SongService<'a> {
    /// Create a new SongService.
    pub fn new(db: &'a Database, storage: &'a MediaStorage) -> Self {
        Self { db, storage }
    }

    /// List all songs, newest first, with existence flags.
    pub async fn list(&self) -> Result<Vec<SongEntry>> {
        let songs = SongRepository::new(self.db.pool()).list().await?;

        Ok(songs
            .into_iter()
            .map(|song| {
                let exists = song.file_exists();
                SongEntry { song, exists }
            })
            .collect())
    }

    /// Upload a song.
    ///
    /// # Validation
    /// In order: a file part is present, its filename is non-empty, and its
    /// extension is `mp3` or `mp4` (case-insensitive).
    ///
    /// # Returns
    /// The created record. Nothing is inserted unless the file was saved
    /// and verified first.
    pub async fn upload(&self, request: UploadRequest) -> Result<Song> {
        let file = request
            .file
            .ok_or_else(|| MusicHubError::Validation("No file provided".to_string()))?;

        if file.filename.is_empty() {
            return Err(MusicHubError::Validation("No file selected".to_string()));
        }

        let media_type = MediaType::from_filename(&file.filename).ok_or_else(|| {
            warn!("Rejected upload with invalid extension: {}", file.filename);
            MusicHubError::Validation(UNSUPPORTED_TYPE_MESSAGE.to_string())
        })?;

        let title = resolve_title(request.title.as_deref(), &file.filename);

        let path = self.storage.save(&file.content, media_type).await?;
        let file_path = path.to_string_lossy().into_owned();

        let repo = SongRepository::new(self.db.pool());
        let song = match repo.create(&NewSong::new(title, &file_path, media_type)).await {
            Ok(song) => song,
            Err(e) => {
                MediaStorage::remove_best_effort(&path).await;
                return Err(e);
            }
        };

        info!(
            id = song.id,
            title = %song.title,
            file_path = %song.file_path,
            "Song saved"
        );
        Ok(song)
    }

    /// Delete a song and, best-effort, its file.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let repo = SongRepository::new(self.db.pool());

        let file_path = repo
            .get_file_path(id)
            .await?
            .ok_or_else(|| MusicHubError::NotFound("Song".to_string()))?;

        MediaStorage::remove_best_effort(&file_path).await;

        // A concurrent delete may have removed the row in the meantime
        if !repo.delete(id).await? {
            return Err(MusicHubError::NotFound("Song".to_string()));
        }

        info!(id, "Song deleted");
        Ok(())
    }

    /// Delete every song and, best-effort, every file.
    ///
    /// Returns the number of deleted records.
    pub async fn clear(&self) -> Result<u64> {
        let repo = SongRepository::new(self.db.pool());

        for file_path in repo.list_file_paths().await? {
            MediaStorage::remove_best_effort(&file_path).await;
        }

        let deleted = repo.clear().await?;
        info!(deleted, "All songs deleted");
        Ok(deleted)
    }

    /// Whether the managed upload directory exists.
    pub fn storage_available(&self) -> bool {
        self.storage.is_available()
    }
}
