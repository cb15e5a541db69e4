use std::path::PathBuf;

use crate::Artifact;

/// Work the state machine asks the outside world to perform. Each effect is
/// answered by exactly one message carrying its result.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Answered by `Msg::Recovered`.
    RecoverArtifact,
    /// Answered by `Msg::UploadRead`.
    ReadUpload { path: PathBuf },
    /// Answered by `Msg::ArtifactStored`.
    StoreArtifact(Artifact),
    /// Answered by `Msg::StoreCleared`.
    ClearStore,
}
