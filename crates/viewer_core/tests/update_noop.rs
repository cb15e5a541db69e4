use viewer_core::{update, AppState, Msg};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn dismissing_absent_banners_changes_nothing() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::DismissError);
    let (next, _) = update(next, Msg::DismissWarning);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
