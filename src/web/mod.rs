//! Web layer for Music Hub.
//!
//! A JSON API under `/api`, stored media under `/uploads`, the OpenAPI
//! document and the single-page front end.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod openapi;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use router::create_router;
pub use server::WebServer;
