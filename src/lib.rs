//! Music Hub - a small self-hosted library for MP3 and MP4 files.
//!
//! Files are uploaded over HTTP, stored under a managed directory with
//! generated names, and tracked in a SQLite database.

pub mod config;
pub mod db;
pub mod error;
pub mod file;
pub mod logging;
pub mod song;
pub mod web;

pub use config::Config;
pub use db::Database;
pub use error::{MusicHubError, Result};
pub use file::{MediaStorage, MediaType};
pub use song::{Song, SongService};
pub use web::WebServer;
