#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication state as the navbar displays it.
///
/// `Default` is the anonymous visitor: no session, no admin rights, no
/// display name. All fields are view state; the source of truth lives in
/// the backend auth/profile store.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub signed_in: bool,
    pub is_admin: bool,
    pub full_name: String,
}

impl AuthState {
    /// State for a signed-in user, as resolved by the mount-time loader.
    pub fn signed_in_with(is_admin: bool, full_name: String) -> Self {
        Self { signed_in: true, is_admin, full_name }
    }

    /// Apply a session-change notification.
    ///
    /// Losing the session clears the display name and admin flag. Regaining
    /// one only flips presence: admin status and name are re-resolved by
    /// the loader on the next mount, not here.
    pub fn apply_session_change(&mut self, session_present: bool) {
        self.signed_in = session_present;
        if !session_present {
            self.full_name.clear();
            self.is_admin = false;
        }
    }

    /// Label for the account menu trigger: the display name, or a generic
    /// fallback when none was resolved.
    pub fn display_label(&self) -> &str {
        if self.full_name.is_empty() {
            "Account"
        } else {
            &self.full_name
        }
    }
}

/// Resolve a display name from an ordered list of candidates.
///
/// Candidates are tried in order (profile record first, then session
/// metadata); the first one that is non-empty after trimming wins. Yields
/// an empty string when no candidate qualifies.
pub fn resolve_display_name<I>(candidates: I) -> String
where
    I: IntoIterator<Item = Option<String>>,
{
    candidates
        .into_iter()
        .flatten()
        .map(|name| name.trim().to_owned())
        .find(|name| !name.is_empty())
        .unwrap_or_default()
}
