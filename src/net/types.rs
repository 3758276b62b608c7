#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

/// An authenticated user's active login, as returned by the backend.
///
/// Presence of a `Session` value is what "signed in" means everywhere in
/// this crate; anonymous visitors simply have no session.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Session {
    pub user: SessionUser,
}

/// Identity carried inside a session.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: Option<String>,
    /// Free-form attributes set at sign-up. May be missing entirely in
    /// older session payloads.
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

/// Sign-up metadata embedded in the session user record.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub full_name: Option<String>,
}

/// A stored profile record keyed by user id.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Profile {
    pub full_name: Option<String>,
}
