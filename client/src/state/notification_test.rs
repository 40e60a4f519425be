use super::*;

#[test]
fn alert_state_default_is_empty() {
    let state = AlertState::default();
    assert!(state.current.is_none());
    assert_eq!(state.seq, 0);
}

#[test]
fn show_overwrites_previous_notification() {
    let mut state = AlertState::default();
    state.show(Notification::success("first"));
    state.show(Notification::failure("second"));
    assert_eq!(state.current, Some(Notification::failure("second")));
    assert_eq!(state.seq, 2);
}

#[test]
fn expire_clears_matching_notification() {
    let mut state = AlertState::default();
    let seq = state.show(Notification::success("done"));
    assert!(state.expire(seq));
    assert!(state.current.is_none());
}

#[test]
fn expire_ignores_superseded_notification() {
    let mut state = AlertState::default();
    let stale = state.show(Notification::success("old"));
    state.show(Notification::failure("new"));
    assert!(!state.expire(stale));
    assert_eq!(state.current, Some(Notification::failure("new")));
}

#[test]
fn expire_after_dismiss_is_noop() {
    let mut state = AlertState::default();
    let seq = state.show(Notification::success("x"));
    state.dismiss();
    assert!(!state.expire(seq));
}

#[test]
fn constructors_tag_colors() {
    assert_eq!(Notification::success("ok").color, NotificationColor::Green);
    assert_eq!(Notification::failure("no").color, NotificationColor::Red);
    assert_eq!(NotificationColor::Green.css_modifier(), "alert--green");
    assert_eq!(NotificationColor::Red.css_modifier(), "alert--red");
}

#[test]
fn signal_notifier_writes_into_slot() {
    let alerts = RwSignal::new(AlertState::default());
    Notifier::show(&alerts, Notification::failure("Login failed. Please try again."));
    let state = alerts.get_untracked();
    assert_eq!(state.current, Some(Notification::failure("Login failed. Please try again.")));
    assert_eq!(state.seq, 1);
}
