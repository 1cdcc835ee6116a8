use super::*;

#[test]
fn push_assigns_monotonic_ids() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "connected");
    let second = state.push(ToastKind::Error, "failed");

    assert_eq!(first, 0);
    assert_eq!(second, 1);
    assert_eq!(state.toasts.len(), 2);
    assert_eq!(state.toasts[0].message, "connected");
    assert_eq!(state.toasts[1].kind, ToastKind::Error);
}

#[test]
fn dismiss_removes_only_the_matching_toast() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "a");
    let second = state.push(ToastKind::Success, "b");

    state.dismiss(first);
    assert_eq!(state.toasts.len(), 1);
    assert_eq!(state.toasts[0].id, second);

    // Unknown ids are ignored.
    state.dismiss(999);
    assert_eq!(state.toasts.len(), 1);
}

#[test]
fn ids_are_not_reused_after_dismissal() {
    let mut state = ToastState::default();
    let first = state.push(ToastKind::Success, "a");
    state.dismiss(first);
    let second = state.push(ToastKind::Success, "b");
    assert!(second > first);
}
