//! File management module for Music Hub.
//!
//! This module owns the managed upload directory:
//! - Accepted media types and extension parsing
//! - Unique storage naming, verified writes and best-effort removal
//! - Path checks for serving stored files

mod media_type;
mod storage;

pub use media_type::{split_extension, MediaType};
pub use storage::{is_unsafe_name, MediaStorage, PUBLIC_PREFIX};
