use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use viewer_core::{Artifact, StorageError};
use viewer_logging::{viewer_debug, viewer_info};

use crate::persist::AtomicFileWriter;

const RECORD_FILENAME: &str = "visualisation_output.json";

/// The single key-value slot holding the last accepted artifact.
#[async_trait::async_trait]
pub trait ArtifactStore: Send + Sync {
    async fn recover(&self) -> Result<Option<Artifact>, StorageError>;
    async fn clear(&self) -> Result<(), StorageError>;
    async fn store(&self, artifact: &Artifact) -> Result<(), StorageError>;
}

#[async_trait::async_trait]
impl<T: ArtifactStore + ?Sized> ArtifactStore for Box<T> {
    async fn recover(&self) -> Result<Option<Artifact>, StorageError> {
        (**self).recover().await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        (**self).clear().await
    }

    async fn store(&self, artifact: &Artifact) -> Result<(), StorageError> {
        (**self).store(artifact).await
    }
}

#[derive(Clone)]
pub struct StoreSettings {
    pub dir: PathBuf,
    pub file_name: String,
    /// Timestamp written next to each stored record.
    pub stored_utc: Arc<dyn Fn() -> String + Send + Sync>,
}

impl StoreSettings {
    pub fn default_with_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            file_name: RECORD_FILENAME.to_string(),
            stored_utc: Arc::new(|| "unknown".to_string()),
        }
    }

    pub fn record_path(&self) -> PathBuf {
        self.dir.join(&self.file_name)
    }
}

impl fmt::Debug for StoreSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreSettings")
            .field("dir", &self.dir)
            .field("file_name", &self.file_name)
            .finish_non_exhaustive()
    }
}

#[derive(Serialize)]
struct RecordOut<'a> {
    stored_at: &'a str,
    output: &'a Value,
}

#[derive(Deserialize)]
struct RecordIn {
    stored_at: String,
    output: Value,
}

/// Keeps the record as one JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileArtifactStore {
    settings: StoreSettings,
}

impl FileArtifactStore {
    pub fn new(settings: StoreSettings) -> Self {
        Self { settings }
    }

    pub fn record_path(&self) -> PathBuf {
        self.settings.record_path()
    }
}

#[async_trait::async_trait]
impl ArtifactStore for FileArtifactStore {
    async fn recover(&self) -> Result<Option<Artifact>, StorageError> {
        let path = self.record_path();
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                viewer_debug!("No stored record at {:?}", path);
                return Ok(None);
            }
            Err(err) => return Err(StorageError::Io(err.to_string())),
        };

        let record: RecordIn = serde_json::from_str(&content)
            .map_err(|err| StorageError::Corrupt(format!("{}: {}", path.display(), err)))?;
        viewer_info!("Loaded record from {:?} stored at {}", path, record.stored_at);
        Ok(Some(Artifact::from_value(record.output)))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        remove_record(&self.record_path()).await
    }

    async fn store(&self, artifact: &Artifact) -> Result<(), StorageError> {
        let stored_at = (self.settings.stored_utc)();
        let content = serde_json::to_string(&RecordOut {
            stored_at: &stored_at,
            output: artifact.as_value(),
        })
        .map_err(|err| StorageError::Corrupt(err.to_string()))?;

        let writer = AtomicFileWriter::new(self.settings.dir.clone());
        let file_name = self.settings.file_name.clone();
        let written = tokio::task::spawn_blocking(move || writer.write(&file_name, &content))
            .await
            .map_err(|err| StorageError::Unavailable(err.to_string()))??;
        viewer_info!("Stored record at {:?}", written);
        Ok(())
    }
}

async fn remove_record(path: &Path) -> Result<(), StorageError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
        Err(err) => Err(StorageError::Io(err.to_string())),
    }
}

/// In-process slot; clones share the same record.
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactStore {
    slot: Arc<Mutex<Option<Artifact>>>,
}

impl MemoryArtifactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(artifact: Artifact) -> Self {
        Self {
            slot: Arc::new(Mutex::new(Some(artifact))),
        }
    }

    pub fn snapshot(&self) -> Option<Artifact> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn with_slot<T>(&self, f: impl FnOnce(&mut Option<Artifact>) -> T) -> Result<T, StorageError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|_| StorageError::Unavailable("memory slot poisoned".into()))?;
        Ok(f(&mut slot))
    }
}

#[async_trait::async_trait]
impl ArtifactStore for MemoryArtifactStore {
    async fn recover(&self) -> Result<Option<Artifact>, StorageError> {
        self.with_slot(|slot| slot.clone())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.with_slot(|slot| *slot = None)
    }

    async fn store(&self, artifact: &Artifact) -> Result<(), StorageError> {
        self.with_slot(|slot| *slot = Some(artifact.clone()))
    }
}
