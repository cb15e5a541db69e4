use std::path::Path;

use viewer_core::UploadError;

/// File extension the upload picker offers. Not enforced when reading.
pub const ACCEPTED_EXTENSION: &str = "json";

#[async_trait::async_trait]
pub trait UploadReader: Send + Sync {
    /// Read the whole file as text in one shot.
    async fn read_text(&self, path: &Path) -> Result<String, UploadError>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FsUploadReader;

#[async_trait::async_trait]
impl UploadReader for FsUploadReader {
    async fn read_text(&self, path: &Path) -> Result<String, UploadError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|err| UploadError::Read(err.to_string()))
    }
}
