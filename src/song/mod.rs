//! Song library module for Music Hub.
//!
//! Records live in the `songs` table; their binaries live in the managed
//! upload directory (see [`crate::file`]).

mod model;
mod repository;
mod service;

pub use model::{NewSong, Song};
pub use repository::SongRepository;
pub use service::{
    resolve_title, SongEntry, SongService, UploadRequest, UploadedFile, UNSUPPORTED_TYPE_MESSAGE,
};
