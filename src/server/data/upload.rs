//! Upload path derivation and file lifecycle helpers.
//!
//! Every file field owns a namespace `{entity_type}/{id}/{field_purpose}/` so no two
//! records ever share a blob. Paths embed the record id and can therefore only be
//! derived once the record has been inserted.

use crate::server::{
    error::storage::StorageError,
    model::upload::{FileChange, FileUpload},
    storage::BlobStore,
};

/// Blob path of a category icon: `category/{id}/category_icon/{filename}`.
pub fn category_icon_upload_path(category_id: i32, filename: &str) -> String {
    upload_path("category", category_id, "category_icon", filename)
}

/// Blob path of a server icon: `server/{id}/server_icon/{filename}`.
pub fn server_icon_upload_path(server_id: i32, filename: &str) -> String {
    upload_path("server", server_id, "server_icon", filename)
}

/// Blob path of a server banner: `server/{id}/server_banner/{filename}`.
pub fn server_banner_upload_path(server_id: i32, filename: &str) -> String {
    upload_path("server", server_id, "server_banner", filename)
}

fn upload_path(entity_type: &str, id: i32, field_purpose: &str, filename: &str) -> String {
    format!(
        "{}/{}/{}/{}",
        entity_type,
        id,
        field_purpose,
        base_name(filename)
    )
}

/// Final component of a client-supplied filename.
///
/// Directory parts are dropped so an uploaded name cannot leave its namespace.
fn base_name(filename: &str) -> &str {
    let name = filename
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(filename)
        .trim();

    match name {
        "" | "." | ".." => "upload",
        name => name,
    }
}

/// Deletes a blob, logging instead of failing.
///
/// Metadata writes take priority over cleanup, so a failed deletion only leaves
/// an orphaned blob behind.
pub async fn delete_blob_best_effort(blobs: &dyn BlobStore, path: &str) {
    match blobs.delete(path).await {
        Ok(()) => tracing::debug!("Deleted blob {}", path),
        Err(e) => tracing::warn!("Failed to delete blob {}: {}", path, e),
    }
}

/// Stores a new upload at the path derived by `derive_path`.
pub async fn store_upload(
    blobs: &dyn BlobStore,
    upload: &FileUpload,
    derive_path: impl FnOnce(&str) -> String,
) -> Result<String, StorageError> {
    let path = derive_path(&upload.filename);
    blobs.put(&path, &upload.content).await?;

    Ok(path)
}

/// Applies a file-field change and returns the reference to persist.
///
/// The previous blob is deleted whenever the new reference differs from the
/// stored one. Writing the new upload must succeed; deleting the old blob is
/// best-effort.
///
/// # Arguments
/// - `blobs` - Blob store holding the files
/// - `current` - Reference currently persisted on the record
/// - `change` - Requested change for the field
/// - `derive_path` - Upload path derivation for this field, given a filename
///
/// # Returns
/// - `Ok(Option<String>)` - Reference to write onto the record
/// - `Err(StorageError)` - Failed to store the new upload
pub async fn apply_file_change(
    blobs: &dyn BlobStore,
    current: Option<&str>,
    change: FileChange,
    derive_path: impl FnOnce(&str) -> String,
) -> Result<Option<String>, StorageError> {
    let next = match change {
        FileChange::Keep => return Ok(current.map(str::to_string)),
        FileChange::Clear => None,
        FileChange::Replace(upload) => Some(store_upload(blobs, &upload, derive_path).await?),
    };

    if let Some(old) = current {
        if next.as_deref() != Some(old) {
            delete_blob_best_effort(blobs, old).await;
        }
    }

    Ok(next)
}
