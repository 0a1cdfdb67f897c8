use thiserror::Error;

/// Errors raised by blob store backends.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The path is absolute or climbs out of the storage root.
    #[error("Invalid blob path '{0}'")]
    InvalidPath(String),

    /// Filesystem operation on a blob failed.
    #[error("Blob I/O failed for '{path}': {source}")]
    Io {
        /// Blob path the operation targeted
        path: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },
}
