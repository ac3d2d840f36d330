//! Media file storage for Music Hub.
//!
//! Uploaded binaries live flat inside one managed directory under generated
//! names of the form `<uuid hex>_<YYYYmmdd_HHMMSS>.<ext>`:
//! ```text
//! {base_path}/
//! ├── 3f2a9c0d8e7b4a1f9c6d5e4b3a291807_20240301_142233.mp3
//! └── b81c...._20240301_142301.mp4
//! ```

use std::io;
use std::path::{Path, PathBuf};

use chrono::Local;
use tokio::fs;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::MediaType;
use crate::{MusicHubError, Result};

/// URL prefix under which stored files are served.
pub const PUBLIC_PREFIX: &str = "/uploads";

/// Name of the probe file written by [`MediaStorage::probe_writable`].
const PROBE_FILE: &str = "test.txt";

/// Storage service for the managed upload directory.
#[derive(Debug, Clone)]
pub struct MediaStorage {
    /// Managed upload directory.
    base_path: PathBuf,
}

impl MediaStorage {
    /// Create a new MediaStorage, creating the directory if it doesn't exist.
    pub fn new(base_path: impl Into<PathBuf>) -> Result<Self> {
        let base_path = base_path.into();
        if !base_path.exists() {
            std::fs::create_dir_all(&base_path)?;
            info!("Created uploads folder: {}", base_path.display());
        }

        Ok(Self { base_path })
    }

    /// Get the managed upload directory.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Whether the managed upload directory currently exists.
    pub fn is_available(&self) -> bool {
        self.base_path.is_dir()
    }

    /// Generate a unique storage filename for the given media type.
    pub fn generate_stored_name(media_type: MediaType) -> String {
        format!(
            "{}_{}.{}",
            Uuid::new_v4().simple(),
            Local::now().format("%Y%m%d_%H%M%S"),
            media_type.as_str()
        )
    }

    /// Save content under a freshly generated name.
    ///
    /// The write is verified by checking that the file exists and is not
    /// empty; on failure the partial file is removed and a
    /// [`MusicHubError::Storage`] is returned.
    ///
    /// # Returns
    ///
    /// The full storage path of the saved file.
    pub async fn save(&self, content: &[u8], media_type: MediaType) -> Result<PathBuf> {
        let stored_name = Self::generate_stored_name(media_type);
        let file_path = self.base_path.join(&stored_name);
        debug!("Saving to: {}", file_path.display());

        if let Err(e) = fs::write(&file_path, content).await {
            let _ = fs::remove_file(&file_path).await;
            return Err(MusicHubError::Storage(format!("Failed to save file: {e}")));
        }

        match fs::metadata(&file_path).await {
            Ok(meta) if meta.is_file() && meta.len() > 0 => {
                info!(
                    "File saved successfully: {} ({} bytes)",
                    file_path.display(),
                    meta.len()
                );
                Ok(file_path)
            }
            _ => {
                let _ = fs::remove_file(&file_path).await;
                Err(MusicHubError::Storage("Failed to save file".to_string()))
            }
        }
    }

    /// Resolve a requested filename inside the managed directory.
    ///
    /// Names containing `..` or starting with `/` are rejected before any
    /// filesystem access.
    pub fn resolve(&self, filename: &str) -> Result<PathBuf> {
        if is_unsafe_name(filename) {
            return Err(MusicHubError::Forbidden(filename.to_string()));
        }
        Ok(self.base_path.join(filename))
    }

    /// Remove a stored file.
    ///
    /// # Returns
    ///
    /// `true` if the file was removed, `false` if it didn't exist.
    pub async fn remove(path: impl AsRef<Path>) -> Result<bool> {
        match fs::remove_file(path.as_ref()).await {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Remove a stored file, logging instead of failing.
    pub async fn remove_best_effort(path: impl AsRef<Path>) {
        let path = path.as_ref();
        match Self::remove(path).await {
            Ok(true) => info!("Deleted file: {}", path.display()),
            Ok(false) => debug!("File already gone: {}", path.display()),
            Err(e) => warn!("Error deleting file {}: {}", path.display(), e),
        }
    }

    /// Check whether the file behind a stored path exists.
    pub fn exists(path: impl AsRef<Path>) -> bool {
        path.as_ref().is_file()
    }

    /// Public URL path for a stored file: `/uploads/<basename>`.
    pub fn public_path(file_path: &str) -> String {
        let basename = Path::new(file_path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{PUBLIC_PREFIX}/{basename}")
    }

    /// Check that the managed directory accepts writes.
    pub async fn probe_writable(&self) -> Result<()> {
        let probe = self.base_path.join(PROBE_FILE);
        fs::write(&probe, b"test").await?;
        fs::remove_file(&probe).await?;
        Ok(())
    }
}

/// Whether a requested filename could escape the managed directory.
pub fn is_unsafe_name(filename: &str) -> bool {
    filename.contains("..") || filename.starts_with('/')
}
