//! Site navigation bar reflecting authentication state.
//!
//! Anonymous visitors get the static links and a login button. Signed-in
//! users get an account dropdown (display name, password change, sign out)
//! and, for admins, a shortcut to the admin area.
//!
//! On mount the navbar runs a one-shot fetch sequence (session, admin role
//! check, profile lookup) and subscribes to auth-change events so a
//! sign-out elsewhere in the app clears it immediately. The subscription
//! and a liveness flag for the in-flight fetch are both released in
//! `on_cleanup`, so neither can touch state after the component unmounts.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::change_password::ChangePasswordForm;
use crate::net::types::Profile;
use crate::state::auth::{AuthState, resolve_display_name};
use crate::state::toasts::ToastState;

/// Top navigation bar.
#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    #[cfg(feature = "hydrate")]
    {
        use std::cell::Cell;
        use std::rc::Rc;

        let alive = Rc::new(Cell::new(true));

        {
            let alive = Rc::clone(&alive);
            leptos::task::spawn_local(async move {
                let loaded = load_auth_state().await;
                // A slow fetch resolving after unmount must not write state.
                if alive.get() {
                    auth.set(loaded);
                }
            });
        }

        let subscription = crate::net::auth_events::subscribe(move |_event, session| {
            auth.update(|a| a.apply_session_change(session.is_some()));
        });

        on_cleanup(move || {
            alive.set(false);
            subscription.unsubscribe();
        });
    }

    let on_admin = {
        let navigate = navigate.clone();
        move |_| navigate("/admin", NavigateOptions::default())
    };
    let on_login = move |_| navigate("/auth", NavigateOptions::default());

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <div class="navbar__links">
                    <a href="#features" class="navbar__link">"Features"</a>
                    <a href="#about" class="navbar__link">"About"</a>
                    <a href="#contact" class="navbar__link">"Contact"</a>
                    <Show when=move || auth.get().is_admin>
                        <button class="btn navbar__admin" on:click=on_admin.clone()>
                            <svg class="navbar__admin-icon" viewBox="0 0 20 20" aria-hidden="true">
                                <path d="M10 2 L17 5 V10 C17 14 14 17 10 18 C6 17 3 14 3 10 V5 Z"></path>
                            </svg>
                            "Admin"
                        </button>
                    </Show>
                </div>
                <div class="navbar__account">
                    <Show
                        when=move || auth.get().signed_in
                        fallback=move || {
                            let on_login = on_login.clone();
                            view! {
                                <button class="btn navbar__login" on:click=on_login>
                                    "Login"
                                </button>
                            }
                        }
                    >
                        <AccountMenu/>
                    </Show>
                </div>
            </div>
        </nav>
    }
}

/// Account dropdown for a signed-in user: display name trigger, password
/// change form, and sign out.
#[component]
fn AccountMenu() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let open = RwSignal::new(false);

    let label = move || auth.get().display_label().to_owned();

    let on_sign_out = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_out().await {
                    Ok(()) => {
                        // Full navigation to the auth page for a clean state.
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href("/auth");
                        }
                    }
                    Err(e) => {
                        leptos::logging::warn!("sign out failed: {e}");
                        toasts.update(|t| {
                            t.push(
                                crate::state::toasts::ToastVariant::Destructive,
                                "Error",
                                &e,
                            );
                        });
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &toasts;
        }
    };

    view! {
        <div class="account-menu">
            <button
                class="btn account-menu__trigger"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {label}
            </button>
            <Show when=move || open.get()>
                <div class="account-menu__content">
                    <ChangePasswordForm/>
                    <div class="account-menu__separator"></div>
                    <button class="account-menu__item" on:click=on_sign_out.clone()>
                        "Sign Out"
                    </button>
                </div>
            </Show>
        </div>
    }
}

/// Build the signed-in navbar state from the resolved parts.
///
/// The display name is the first non-empty candidate: profile record, then
/// session metadata; a user with neither gets the generic account label at
/// render time.
pub(crate) fn resolved_state(
    is_admin: bool,
    profile: Option<Profile>,
    metadata_name: Option<String>,
) -> AuthState {
    let full_name =
        resolve_display_name([profile.and_then(|p| p.full_name), metadata_name]);
    AuthState::signed_in_with(is_admin, full_name)
}

/// One-shot mount fetch: session, then admin role check and profile lookup.
///
/// Failures degrade silently to the anonymous or non-admin view; only the
/// profile miss is logged since the metadata fallback usually covers it.
#[cfg(feature = "hydrate")]
async fn load_auth_state() -> AuthState {
    let Some(session) = crate::net::api::fetch_session().await else {
        return AuthState::default();
    };

    let is_admin = crate::net::api::check_role(&session.user.id, "admin").await;

    let profile = crate::net::api::fetch_profile(&session.user.id).await;
    if profile.is_none() {
        leptos::logging::warn!("profile lookup failed for user {}", session.user.id);
    }

    resolved_state(is_admin, profile, session.user.user_metadata.full_name)
}
