use super::*;

#[test]
fn show_replaces_current_toast() {
    let mut state = NotifyState::default();
    let first = state.show(NotifyKind::Success, "saved");
    let second = state.show(NotifyKind::Error, "failed");
    assert_ne!(first, second);

    let current = state.current.as_ref().unwrap();
    assert_eq!(current.seq, second);
    assert_eq!(current.kind, NotifyKind::Error);
    assert_eq!(current.message, "failed");
}

#[test]
fn dismiss_closes_matching_toast() {
    let mut state = NotifyState::default();
    let seq = state.show(NotifyKind::Success, "saved");
    state.dismiss(seq);
    assert!(state.current.is_none());
}

#[test]
fn stale_dismiss_keeps_newer_toast() {
    let mut state = NotifyState::default();
    let stale = state.show(NotifyKind::Success, "saved");
    let fresh = state.show(NotifyKind::Success, "saved again");
    state.dismiss(stale);
    assert_eq!(state.current.as_ref().map(|n| n.seq), Some(fresh));
}
