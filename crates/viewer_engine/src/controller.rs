use std::collections::VecDeque;
use std::path::PathBuf;

use viewer_core::{update, AppState, AppViewModel, ControllerConfig, Effect, Msg, View};
use viewer_logging::viewer_debug;

use crate::store::ArtifactStore;
use crate::upload::{FsUploadReader, UploadReader};

/// Owns the session state and runs every effect `update` asks for, one at a
/// time, until no work is left. Nothing escapes as an error: failures come
/// back as messages and end up in the session state.
pub struct ArtifactController<S, R = FsUploadReader> {
    state: AppState,
    store: S,
    reader: R,
}

impl<S: ArtifactStore> ArtifactController<S, FsUploadReader> {
    pub fn new(config: ControllerConfig, store: S) -> Self {
        Self::with_reader(config, store, FsUploadReader)
    }
}

impl<S: ArtifactStore, R: UploadReader> ArtifactController<S, R> {
    pub fn with_reader(config: ControllerConfig, store: S, reader: R) -> Self {
        Self {
            state: AppState::with_config(config),
            store,
            reader,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn view(&self) -> AppViewModel {
        self.state.view()
    }

    pub fn routed_view(&self) -> View<'_> {
        self.state.routed_view()
    }

    /// View model to render if anything changed since the last call.
    pub fn take_render(&mut self) -> Option<AppViewModel> {
        let view = self.state.view();
        self.state.consume_dirty().then_some(view)
    }

    pub async fn activate(&mut self) {
        self.dispatch(Msg::Activated).await;
    }

    pub async fn select_file(&mut self, path: Option<PathBuf>) {
        self.dispatch(Msg::FileSelected(path)).await;
    }

    pub async fn reset(&mut self) {
        self.dispatch(Msg::ResetClicked).await;
    }

    pub async fn navigate(&mut self, path: impl Into<String>) {
        self.dispatch(Msg::Navigate(path.into())).await;
    }

    pub async fn dismiss_error(&mut self) {
        self.dispatch(Msg::DismissError).await;
    }

    pub async fn dismiss_warning(&mut self) {
        self.dispatch(Msg::DismissWarning).await;
    }

    pub async fn dispatch(&mut self, msg: Msg) {
        let mut inbox = VecDeque::from([msg]);
        while let Some(msg) = inbox.pop_front() {
            let state = std::mem::take(&mut self.state);
            let (state, effects) = update(state, msg);
            self.state = state;
            for effect in effects {
                inbox.push_back(self.run_effect(effect).await);
            }
        }
    }

    async fn run_effect(&self, effect: Effect) -> Msg {
        viewer_debug!("Running effect {}", effect_name(&effect));
        match effect {
            Effect::RecoverArtifact => Msg::Recovered(self.store.recover().await),
            Effect::ReadUpload { path } => Msg::UploadRead(self.reader.read_text(&path).await),
            Effect::StoreArtifact(artifact) => Msg::ArtifactStored(self.store.store(&artifact).await),
            Effect::ClearStore => Msg::StoreCleared(self.store.clear().await),
        }
    }
}

/// Effects can carry a whole artifact; log only their kind.
fn effect_name(effect: &Effect) -> &'static str {
    match effect {
        Effect::RecoverArtifact => "RecoverArtifact",
        Effect::ReadUpload { .. } => "ReadUpload",
        Effect::StoreArtifact(_) => "StoreArtifact",
        Effect::ClearStore => "ClearStore",
    }
}
