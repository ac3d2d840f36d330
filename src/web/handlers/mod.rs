//! API handlers for the Music Hub web UI.

pub mod health;
pub mod media;
pub mod song;

use crate::file::MediaStorage;
use crate::song::SongService;
use crate::Database;

pub use health::*;
pub use media::*;
pub use song::*;

/// Application state shared across handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Song database.
    pub db: Database,
    /// Managed upload directory.
    pub storage: MediaStorage,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, storage: MediaStorage) -> Self {
        Self { db, storage }
    }

    /// Song service bound to this state.
    pub fn songs(&self) -> SongService<'_> {
        SongService::new(&self.db, &self.storage)
    }
}
