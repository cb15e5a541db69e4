use crate::route::View;
use crate::view_model::{AppViewModel, Banner};
use crate::{route, Artifact, ControllerConfig, VISUALISATIONS};

/// Why the viewer is busy; each reason carries a fixed user-facing text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadingReason {
    Recovering,
    ReadingUpload,
    Resetting,
}

impl LoadingReason {
    pub fn text(self) -> &'static str {
        match self {
            LoadingReason::Recovering => "We're hard at work!",
            LoadingReason::ReadingUpload => "Reading your file!",
            LoadingReason::Resetting => "Cleaning up your mess!",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    Bootstrapping,
    Empty,
    Populated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    config: ControllerConfig,
    artifact: Option<Artifact>,
    error: Option<String>,
    warning: Option<String>,
    loading: Option<LoadingReason>,
    location: String,
    activated: bool,
    bootstrapped: bool,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_config(ControllerConfig::default())
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ControllerConfig) -> Self {
        Self {
            config,
            artifact: None,
            error: None,
            warning: None,
            loading: None,
            location: VISUALISATIONS.to_string(),
            activated: false,
            bootstrapped: false,
            dirty: false,
        }
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn artifact(&self) -> Option<&Artifact> {
        self.artifact.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    pub fn loading(&self) -> Option<LoadingReason> {
        self.loading
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn phase(&self) -> SessionPhase {
        if !self.bootstrapped {
            SessionPhase::Bootstrapping
        } else if self.artifact.is_some() {
            SessionPhase::Populated
        } else {
            SessionPhase::Empty
        }
    }

    /// The routed screen, with the session's artifact attached for the views.
    pub fn routed_view(&self) -> View<'_> {
        View::resolve(self.artifact.as_ref(), &self.location)
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            phase: self.phase(),
            location: self.location.clone(),
            screen: route(self.artifact.is_some(), &self.location),
            loading_text: self.loading.map(LoadingReason::text),
            error: self.error.clone().map(Banner::error),
            warning: self.warning.clone().map(Banner::warning),
            show_navbar: self.artifact.is_some(),
            build_id: self.config.build_id.clone(),
            dirty: self.dirty,
        }
    }

    /// Returns whether a re-render is due and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::replace(&mut self.dirty, false)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Flips the activation latch; `false` when the session was already activated.
    pub(crate) fn activate(&mut self) -> bool {
        !std::mem::replace(&mut self.activated, true)
    }

    pub(crate) fn finish_bootstrap(&mut self) {
        self.bootstrapped = true;
    }

    pub(crate) fn set_loading(&mut self, reason: LoadingReason) {
        self.loading = Some(reason);
    }

    pub(crate) fn clear_loading(&mut self) {
        self.loading = None;
    }

    pub(crate) fn set_artifact(&mut self, artifact: Artifact) {
        self.artifact = Some(artifact);
    }

    pub(crate) fn clear_artifact(&mut self) {
        self.artifact = None;
    }

    pub(crate) fn set_error(&mut self, message: String) {
        self.error = Some(message);
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }

    pub(crate) fn set_warning(&mut self, message: String) {
        self.warning = Some(message);
    }

    pub(crate) fn clear_warning(&mut self) {
        self.warning = None;
    }

    pub(crate) fn navigate(&mut self, path: &str) {
        self.location = path.to_string();
    }
}
