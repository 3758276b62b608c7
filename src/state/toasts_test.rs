use super::*;

#[test]
fn toast_state_defaults_empty() {
    let state = ToastState::default();
    assert!(state.toasts.is_empty());
}

#[test]
fn push_appends_and_returns_id() {
    let mut state = ToastState::default();
    let id = state.push(ToastVariant::Destructive, "Error", "sign out failed");
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, id);
    assert_eq!(state.toasts[0].title, "Error");
    assert_eq!(state.toasts[0].message, "sign out failed");
    assert_eq!(state.toasts[0].variant, ToastVariant::Destructive);
}

#[test]
fn dismiss_removes_only_the_target() {
    let mut state = ToastState::default();
    let first = state.push(ToastVariant::Info, "A", "one");
    let second = state.push(ToastVariant::Info, "B", "two");
    state.dismiss(&first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);
}

#[test]
fn dismiss_unknown_id_is_noop() {
    let mut state = ToastState::default();
    state.push(ToastVariant::Info, "A", "one");
    state.dismiss("not-an-id");
    assert_eq!(state.toasts.len(), 1);
}
