use std::path::PathBuf;

use crate::{Artifact, StorageError, UploadError};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// The viewer was opened; recovery runs once per session.
    Activated,
    /// Result of reading the persistent record.
    Recovered(Result<Option<Artifact>, StorageError>),
    /// User picked a file (or dismissed the picker without one).
    FileSelected(Option<PathBuf>),
    /// Text content of the selected file.
    UploadRead(Result<String, UploadError>),
    /// Result of persisting an accepted artifact.
    ArtifactStored(Result<(), StorageError>),
    /// User clicked Reset in the navigation bar.
    ResetClicked,
    /// Result of clearing the persistent record.
    StoreCleared(Result<(), StorageError>),
    /// User followed a navigation link.
    Navigate(String),
    /// User closed the error banner.
    DismissError,
    /// User closed the warning banner.
    DismissWarning,
    /// Fallback for placeholder wiring.
    NoOp,
}
