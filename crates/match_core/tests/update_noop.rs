use match_core::{update, AppState, Msg, PointerEvent};

#[test]
fn update_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::NoOp);

    assert_eq!(state, next);
    assert!(effects.is_empty());
}

#[test]
fn pointer_without_cards_is_noop() {
    let state = AppState::new();
    let (next, effects) = update(state.clone(), Msg::Pointer(PointerEvent::Up));

    assert_eq!(state, next);
    assert!(effects.is_empty());
}
