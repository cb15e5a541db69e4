//! Viewer core: pure artifact-session state machine, router and view-model helpers.
mod artifact;
mod compat;
mod effect;
mod error;
mod msg;
mod route;
mod state;
mod update;
mod view_model;

pub use artifact::{Artifact, ControllerConfig, BUILD_ID};
pub use compat::{check_compatibility, mismatch_warning, Compatibility};
pub use effect::Effect;
pub use error::{StorageError, UploadError};
pub use msg::Msg;
pub use route::{
    route, Screen, SubView, View, GAME_VISUALISATION, IIFO_VISUALISATION, IIGO_VISUALISATION,
    IITO_VISUALISATION, RESOURCES_VISUALISATION, ROLES_VISUALISATION, VISUALISATIONS,
};
pub use state::{AppState, LoadingReason, SessionPhase};
pub use update::update;
pub use view_model::{AppViewModel, Banner, ERROR_HEADING, WARNING_HEADING};
