//! Data Transfer Objects for the web API.

pub mod response;

pub use response::*;
