use async_trait::async_trait;
use std::{
    io::ErrorKind,
    path::{Component, Path, PathBuf},
};

use crate::server::{error::storage::StorageError, storage::BlobStore};

/// Blob store writing files below a root directory on local disk.
///
/// The same directory is served under `/media` so stored paths map directly
/// onto media URLs.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
}

impl LocalBlobStore {
    /// Creates a store rooted at `root`. The directory is created on first write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves a blob path below the root, rejecting absolute paths and `..`.
    fn resolve(&self, path: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(path);
        let is_plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_)));

        if path.is_empty() || !is_plain {
            return Err(StorageError::InvalidPath(path.to_string()));
        }

        Ok(self.root.join(relative))
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(&self, path: &str, content: &[u8]) -> Result<(), StorageError> {
        let full_path = self.resolve(path)?;
        let io_err = |source| StorageError::Io {
            path: path.to_string(),
            source,
        };

        if let Some(parent) = full_path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_err)?;
        }

        tokio::fs::write(&full_path, content).await.map_err(io_err)
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let full_path = self.resolve(path)?;

        match tokio::fs::remove_file(&full_path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StorageError::Io {
                path: path.to_string(),
                source,
            }),
        }
    }

    async fn exists(&self, path: &str) -> Result<bool, StorageError> {
        let full_path = self.resolve(path)?;

        tokio::fs::try_exists(&full_path)
            .await
            .map_err(|source| StorageError::Io {
                path: path.to_string(),
                source,
            })
    }
}
