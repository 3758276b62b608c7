use super::*;

#[test]
fn session_deserializes_with_metadata_name() {
    let json = serde_json::json!({
        "user": {
            "id": "u-1",
            "email": "ada@example.com",
            "user_metadata": { "full_name": "Ada Lovelace" }
        }
    });
    let session: Session = serde_json::from_value(json).expect("session");
    assert_eq!(session.user.id, "u-1");
    assert_eq!(
        session.user.user_metadata.full_name.as_deref(),
        Some("Ada Lovelace")
    );
}

#[test]
fn session_tolerates_absent_metadata() {
    let json = serde_json::json!({
        "user": { "id": "u-2", "email": null }
    });
    let session: Session = serde_json::from_value(json).expect("session");
    assert!(session.user.email.is_none());
    assert!(session.user.user_metadata.full_name.is_none());
}

#[test]
fn profile_full_name_may_be_null() {
    let json = serde_json::json!({ "full_name": null });
    let profile: Profile = serde_json::from_value(json).expect("profile");
    assert!(profile.full_name.is_none());
}
