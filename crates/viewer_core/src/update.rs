use viewer_logging::{viewer_debug, viewer_info, viewer_warn};

use crate::{
    check_compatibility, mismatch_warning, AppState, Artifact, Compatibility, Effect,
    LoadingReason, Msg, UploadError, GAME_VISUALISATION, VISUALISATIONS,
};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Activated => {
            if !state.activate() {
                viewer_debug!("Ignoring repeated activation");
                return (state, Vec::new());
            }
            viewer_info!("Viewer activated; looking for a stored output");
            state.set_loading(LoadingReason::Recovering);
            state.mark_dirty();
            vec![Effect::RecoverArtifact]
        }
        Msg::Recovered(result) => {
            state.finish_bootstrap();
            state.clear_loading();
            state.mark_dirty();
            match result {
                Ok(Some(artifact)) => {
                    viewer_info!("Recovered stored output (build id {:?})", artifact.build_id());
                    state.set_artifact(artifact);
                    state.navigate(GAME_VISUALISATION);
                    run_compatibility_gate(&mut state)
                }
                Ok(None) => {
                    viewer_info!("No stored output to recover");
                    Vec::new()
                }
                Err(err) => {
                    // An unreadable cache is not something the user can act on.
                    viewer_warn!("Treating stored output as absent: {}", err);
                    Vec::new()
                }
            }
        }
        Msg::FileSelected(None) => {
            state.set_loading(LoadingReason::ReadingUpload);
            reject_upload(&mut state, UploadError::NoFileSelected)
        }
        Msg::FileSelected(Some(path)) => {
            viewer_info!("Reading uploaded file {:?}", path);
            state.set_loading(LoadingReason::ReadingUpload);
            state.mark_dirty();
            vec![Effect::ReadUpload { path }]
        }
        Msg::UploadRead(result) => match result.and_then(|text| validate_upload(&text)) {
            Ok(artifact) => {
                state.set_artifact(artifact);
                state.mark_dirty();
                let effects = run_compatibility_gate(&mut state);
                match state.artifact() {
                    Some(accepted) => vec![Effect::StoreArtifact(accepted.clone())],
                    None => effects,
                }
            }
            Err(err) => reject_upload(&mut state, err),
        },
        Msg::ArtifactStored(result) => {
            match result {
                Ok(()) => state.clear_error(),
                Err(err) => {
                    viewer_warn!("Accepted output could not be persisted: {}", err);
                    state.set_error(UploadError::from(err).to_string());
                }
            }
            finish_upload(&mut state);
            Vec::new()
        }
        Msg::ResetClicked => begin_reset(&mut state),
        Msg::StoreCleared(result) => {
            if let Err(err) = result {
                viewer_warn!("Stored output could not be cleared: {}", err);
            }
            state.navigate(VISUALISATIONS);
            state.clear_loading();
            state.clear_error();
            state.clear_warning();
            state.mark_dirty();
            Vec::new()
        }
        Msg::Navigate(path) => {
            viewer_debug!("Navigating to {}", path);
            state.navigate(&path);
            state.mark_dirty();
            Vec::new()
        }
        Msg::DismissError => {
            if state.error().is_some() {
                state.clear_error();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::DismissWarning => {
            if state.warning().is_some() {
                state.clear_warning();
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

/// Checks the minimal shape an upload needs before it may become the active artifact.
fn validate_upload(text: &str) -> Result<Artifact, UploadError> {
    let artifact = Artifact::parse(text)?;
    match artifact.build_id() {
        Some(build_id) => {
            viewer_debug!("Uploaded output was built on {}", build_id);
            Ok(artifact)
        }
        None => Err(UploadError::UnsupportedArtifact),
    }
}

/// Leaves the artifact untouched. Navigation still happens so the outcome
/// matches a successful upload from the router's point of view.
fn reject_upload(state: &mut AppState, err: UploadError) -> Vec<Effect> {
    viewer_info!("Upload rejected: {}", err);
    state.set_error(err.to_string());
    finish_upload(state);
    Vec::new()
}

fn finish_upload(state: &mut AppState) {
    state.navigate(GAME_VISUALISATION);
    state.clear_loading();
    state.mark_dirty();
}

/// Runs after every transition that sets the artifact. Produces at most one
/// of: warning set, warning cleared, reset started.
fn run_compatibility_gate(state: &mut AppState) -> Vec<Effect> {
    let compatibility = match state.artifact() {
        Some(artifact) => check_compatibility(&state.config().build_id, artifact),
        None => return Vec::new(),
    };

    match compatibility {
        Compatibility::Compatible => {
            state.clear_warning();
            Vec::new()
        }
        Compatibility::Mismatch { ours, theirs } => {
            viewer_warn!("Output built on {} differs from viewer build {}", theirs, ours);
            state.set_warning(mismatch_warning(&ours, &theirs));
            Vec::new()
        }
        Compatibility::Unreadable => {
            viewer_warn!("Output has no readable build id; discarding it");
            begin_reset(state)
        }
    }
}

fn begin_reset(state: &mut AppState) -> Vec<Effect> {
    viewer_info!("Resetting session");
    state.set_loading(LoadingReason::Resetting);
    state.clear_artifact();
    state.mark_dirty();
    vec![Effect::ClearStore]
}
