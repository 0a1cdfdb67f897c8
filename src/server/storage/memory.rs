use async_trait::async_trait;
use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use crate::server::{error::storage::StorageError, storage::BlobStore};

/// In-memory blob store recording every delete call.
///
/// Deletes are logged even when the path holds no blob so tests can assert on
/// exactly which cleanups the data layer issued. `failing_deletes` makes every
/// delete return an error to exercise best-effort cleanup.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
    deleted: Mutex<Vec<String>>,
    fail_deletes: bool,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_deletes() -> Self {
        Self {
            fail_deletes: true,
            ..Self::default()
        }
    }

    /// Seeds a blob at `path`.
    pub fn with_blob(self, path: &str) -> Self {
        lock(&self.blobs).insert(path.to_string(), path.as_bytes().to_vec());
        self
    }

    pub fn contains(&self, path: &str) -> bool {
        lock(&self.blobs).contains_key(path)
    }

    pub fn content(&self, path: &str) -> Option<Vec<u8>> {
        lock(&self.blobs).get(path).cloned()
    }

    /// Paths passed to `delete`, in call order.
    pub fn deleted(&self) -> Vec<String> {
        lock(&self.deleted).clone()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        lock(&self.blobs).insert(path.to_string(), content.to_vec());
        Ok(())
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        lock(&self.deleted).push(path.to_string());

        if self.fail_deletes {
            return Err(StorageError::Io {
                path: path.to_string(),
                source: std::io::Error::other("delete disabled"),
            });
        }

        lock(&self.blobs).remove(path);
        Ok(())
    }

    async fn exists(&self, path: &str) -> Result<bool, StorageError> {
        Ok(self.contains(path))
    }
}
