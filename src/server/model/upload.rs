//! Uploaded file payloads and file-field changes.

/// An uploaded file waiting to be written to the blob store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// Original filename supplied by the client.
    pub filename: String,
    /// Raw file content.
    pub content: Vec<u8>,
}

impl FileUpload {
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Requested change to a file field when updating a record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FileChange {
    /// Leave the stored file reference untouched.
    #[default]
    Keep,
    /// Remove the stored file and null the reference.
    Clear,
    /// Store a new file in place of the current one.
    Replace(FileUpload),
}
