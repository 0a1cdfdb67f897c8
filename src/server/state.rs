//! Application state shared across all request handlers.
//!
//! The state is initialized once during startup and then cloned for each request
//! through Axum's state extraction. Every field is cheap to clone.

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::server::storage::BlobStore;

#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Storage backend holding uploaded icons and banners.
    pub blobs: Arc<dyn BlobStore>,

    /// Public URL prefix of stored files, ending in `/`.
    ///
    /// Prepended to blob paths when serializing file fields.
    pub media_url: String,
}

impl AppState {
    pub fn new(db: DatabaseConnection, blobs: Arc<dyn BlobStore>, media_url: String) -> Self {
        Self {
            db,
            blobs,
            media_url,
        }
    }
}
