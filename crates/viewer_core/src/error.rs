use thiserror::Error;

/// Failure reported by the persistent storage adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),
    #[error("storage io error: {0}")]
    Io(String),
    #[error("stored record is corrupt: {0}")]
    Corrupt(String),
}

/// User-visible reasons an upload was rejected. The `Display` text is what
/// ends up in the error banner.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadError {
    #[error("No or unsupported file uploaded")]
    NoFileSelected,
    #[error("Could not read file: {0}")]
    Read(String),
    #[error("{0}")]
    Parse(String),
    #[error("Unsupported file.")]
    UnsupportedArtifact,
    #[error("{0}")]
    Storage(#[from] StorageError),
}

impl From<serde_json::Error> for UploadError {
    fn from(err: serde_json::Error) -> Self {
        UploadError::Parse(err.to_string())
    }
}
