//! Blob storage for uploaded files.
//!
//! Uploaded category icons and server icons/banners are stored as blobs addressed by a
//! relative path such as `server/3/server_banner/b.jpg`. The database only keeps that
//! path; the `BlobStore` trait is the seam between the data layer and the storage
//! backend.
//!
//! - `local` - Filesystem backend rooted at the configured media directory
//! - `memory` - In-memory backend recording every call, used by tests

pub mod local;
#[cfg(test)]
pub mod memory;

use async_trait::async_trait;

use crate::server::error::storage::StorageError;

pub use local::LocalBlobStore;

/// Storage backend for uploaded files.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Writes `content` at `path`, replacing any blob already stored there.
    async fn put(&self, path: &str, content: &[u8]) -> Result<(), StorageError>;

    /// Removes the blob at `path`.
    ///
    /// Deleting a path that holds no blob succeeds.
    async fn delete(&self, path: &str) -> Result<(), StorageError>;

    /// Checks whether a blob is stored at `path`.
    async fn exists(&self, path: &str) -> Result<bool, StorageError>;
}
