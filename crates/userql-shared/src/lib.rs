//! Data model shared by the userql server and its clients.

pub mod models;

pub use models::*;
