use std::sync::Once;

use serde_json::json;
use viewer_core::{
    update, AppState, Artifact, ControllerConfig, Effect, LoadingReason, Msg, Screen,
    SessionPhase, StorageError, SubView, GAME_VISUALISATION, ROLES_VISUALISATION,
    VISUALISATIONS,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(viewer_logging::initialize_for_tests);
}

/// A populated session carrying both banners.
fn populated_state() -> AppState {
    let state = AppState::with_config(ControllerConfig::with_build_id("def456"));
    let (state, _) = update(state, Msg::Activated);
    let artifact = Artifact::from_value(json!({ "GitInfo": { "Hash": "abc123" } }));
    let (state, _) = update(state, Msg::Recovered(Ok(Some(artifact))));
    let (state, _) = update(state, Msg::FileSelected(None));
    assert!(state.error().is_some());
    assert!(state.warning().is_some());
    state
}

fn reset(state: AppState) -> AppState {
    let (state, effects) = update(state, Msg::ResetClicked);
    assert_eq!(effects, vec![Effect::ClearStore]);
    assert_eq!(state.loading(), Some(LoadingReason::Resetting));
    assert_eq!(state.artifact(), None);
    let (state, effects) = update(state, Msg::StoreCleared(Ok(())));
    assert!(effects.is_empty());
    state
}

#[test]
fn reset_clears_everything() {
    init_logging();
    let state = reset(populated_state());

    assert_eq!(state.artifact(), None);
    assert_eq!(state.error(), None);
    assert_eq!(state.warning(), None);
    assert_eq!(state.loading(), None);
    assert_eq!(state.location(), VISUALISATIONS);
    assert_eq!(state.phase(), SessionPhase::Empty);
}

#[test]
fn reset_is_idempotent() {
    init_logging();
    let mut once = reset(populated_state());
    let mut twice = reset(reset(populated_state()));
    once.consume_dirty();
    twice.consume_dirty();

    assert_eq!(once, twice);
}

#[test]
fn failed_clear_still_completes_reset() {
    init_logging();
    let (state, _) = update(populated_state(), Msg::ResetClicked);
    let (state, _) = update(
        state,
        Msg::StoreCleared(Err(StorageError::Io("read-only filesystem".into()))),
    );

    assert_eq!(state.artifact(), None);
    assert_eq!(state.error(), None);
    assert_eq!(state.loading(), None);
    assert_eq!(state.location(), VISUALISATIONS);
}

#[test]
fn banners_are_dismissed_independently() {
    init_logging();
    let (state, _) = update(populated_state(), Msg::DismissError);
    assert_eq!(state.error(), None);
    assert!(state.warning().is_some());

    let (state, _) = update(populated_state(), Msg::DismissWarning);
    assert!(state.error().is_some());
    assert_eq!(state.warning(), None);
}

#[test]
fn navigation_routes_between_sub_views() {
    init_logging();
    let state = populated_state();
    assert_eq!(state.location(), GAME_VISUALISATION);

    let (state, _) = update(state, Msg::Navigate(ROLES_VISUALISATION.to_string()));
    assert_eq!(state.view().screen, Screen::SubView(SubView::Roles));

    let (state, _) = update(state, Msg::Navigate("/visualisations/unknown".to_string()));
    assert_eq!(state.view().screen, Screen::NotFound);
}

#[test]
fn routed_view_hands_the_full_artifact_to_sub_views() {
    init_logging();
    let state = populated_state();
    match state.routed_view() {
        viewer_core::View::Visualisation { sub_view, artifact } => {
            assert_eq!(sub_view, SubView::Game);
            assert_eq!(Some(artifact), state.artifact());
        }
        other => panic!("unexpected view {other:?}"),
    }
}
