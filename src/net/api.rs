//! REST API helpers for the auth/profile backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/`false`/error since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Lookups whose failure and absence mean the same thing to the UI
//! (session, role check, profile) return `Option`/`bool` so a flaky
//! backend degrades to the anonymous or non-admin view without crashing
//! hydration. Operations whose failure is shown to the user (sign-out,
//! sign-in, change-password) return `Result` with a message string.

#![allow(clippy::unused_async)]

use super::types::{Profile, Session};

/// Fetch the current session from `GET /api/auth/session`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_session() -> Option<Session> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/session")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Session>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Ask the backend whether a user holds a named role via
/// `POST /api/auth/has-role`. Any failure reads as "no".
pub async fn check_role(user_id: &str, role: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct HasRoleRequest<'a> {
            user_id: &'a str,
            role: &'a str,
        }
        #[derive(serde::Deserialize)]
        struct HasRoleResponse {
            has_role: bool,
        }

        let Ok(req) = gloo_net::http::Request::post("/api/auth/has-role")
            .json(&HasRoleRequest { user_id, role })
        else {
            return false;
        };
        let Ok(resp) = req.send().await else {
            return false;
        };
        if !resp.ok() {
            return false;
        }
        resp.json::<HasRoleResponse>()
            .await
            .map_or(false, |body| body.has_role)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (user_id, role);
        false
    }
}

/// Fetch a user's profile record from `GET /api/profiles/{user_id}`.
pub async fn fetch_profile(user_id: &str) -> Option<Profile> {
    #[cfg(feature = "hydrate")]
    {
        let url = format!("/api/profiles/{user_id}");
        let resp = gloo_net::http::Request::get(&url).send().await.ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<Profile>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = user_id;
        None
    }
}

/// Sign the current user out via `POST /api/auth/logout`.
///
/// On success, raises a `SignedOut` auth-change event so subscribed
/// components drop their session-derived state.
///
/// # Errors
///
/// Returns the failure message when the request fails or the server
/// rejects it.
pub async fn sign_out() -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("sign out failed: {}", resp.status()));
        }
        super::auth_events::emit(super::auth_events::AuthChangeEvent::SignedOut, None);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Sign in with email and password via `POST /api/auth/login`.
///
/// On success, raises a `SignedIn` auth-change event carrying the new
/// session.
///
/// # Errors
///
/// Returns the failure message when the request fails or the credentials
/// are rejected.
pub async fn sign_in(email: &str, password: &str) -> Result<Session, String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct LoginRequest<'a> {
            email: &'a str,
            password: &'a str,
        }

        let req = gloo_net::http::Request::post("/api/auth/login")
            .json(&LoginRequest { email, password })
            .map_err(|e| e.to_string())?;
        let resp = req.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("sign in failed: {}", resp.status()));
        }
        let session: Session = resp.json().await.map_err(|e| e.to_string())?;
        super::auth_events::emit(
            super::auth_events::AuthChangeEvent::SignedIn,
            Some(&session),
        );
        Ok(session)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Change the current user's password via `POST /api/auth/change-password`.
///
/// # Errors
///
/// Returns the failure message when the request fails or the server
/// rejects the new password.
pub async fn change_password(new_password: &str) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        #[derive(serde::Serialize)]
        struct ChangePasswordRequest<'a> {
            password: &'a str,
        }

        let req = gloo_net::http::Request::post("/api/auth/change-password")
            .json(&ChangePasswordRequest { password: new_password })
            .map_err(|e| e.to_string())?;
        let resp = req.send().await.map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("password change failed: {}", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = new_password;
        Err("not available on server".to_owned())
    }
}
