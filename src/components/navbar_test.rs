use super::*;

fn profile(name: Option<&str>) -> Option<Profile> {
    Some(Profile { full_name: name.map(ToOwned::to_owned) })
}

// =============================================================
// Mount-time resolution scenarios
// =============================================================

#[test]
fn admin_with_profile_name() {
    let state = resolved_state(true, profile(Some("Ada Lovelace")), None);
    assert!(state.signed_in);
    assert!(state.is_admin);
    assert_eq!(state.display_label(), "Ada Lovelace");
}

#[test]
fn non_admin_falls_back_to_metadata_name() {
    // Profile lookup failed entirely; metadata carries the name.
    let state = resolved_state(false, None, Some("Grace".to_owned()));
    assert!(state.signed_in);
    assert!(!state.is_admin);
    assert_eq!(state.display_label(), "Grace");
}

#[test]
fn profile_name_wins_over_metadata() {
    let state = resolved_state(false, profile(Some("Ada Lovelace")), Some("Grace".to_owned()));
    assert_eq!(state.display_label(), "Ada Lovelace");
}

#[test]
fn empty_profile_name_falls_back_to_metadata() {
    let state = resolved_state(false, profile(None), Some("Grace".to_owned()));
    assert_eq!(state.display_label(), "Grace");
}

#[test]
fn no_name_anywhere_uses_generic_label() {
    let state = resolved_state(false, profile(None), None);
    assert_eq!(state.display_label(), "Account");
}

// =============================================================
// Session-change handling
// =============================================================

#[test]
fn sign_out_event_clears_resolved_state() {
    let mut state = resolved_state(true, profile(Some("Ada Lovelace")), None);
    state.apply_session_change(false);
    assert!(!state.signed_in);
    assert!(!state.is_admin);
    assert_eq!(state.display_label(), "Account");
}
