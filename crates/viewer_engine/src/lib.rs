//! Viewer engine: storage and file IO, and the controller that executes core effects.
mod controller;
mod persist;
mod store;
mod upload;

pub use controller::ArtifactController;
pub use persist::{ensure_storage_dir, AtomicFileWriter, PersistError};
pub use store::{ArtifactStore, FileArtifactStore, MemoryArtifactStore, StoreSettings};
pub use upload::{FsUploadReader, UploadReader, ACCEPTED_EXTENSION};
pub use viewer_core::{StorageError, UploadError};
