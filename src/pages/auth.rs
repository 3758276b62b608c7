//! Authentication page with an email/password sign-in form.

use leptos::prelude::*;

use crate::state::toasts::ToastState;

/// Sign-in page. Successful login navigates back to the landing page;
/// failures surface as a destructive toast.
#[component]
pub fn AuthPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() || email.get().is_empty() {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::sign_in(&email.get_untracked(), &password.get_untracked())
                    .await
                {
                    Ok(_session) => {
                        // Full navigation so every component remounts with
                        // the fresh session.
                        if let Some(w) = web_sys::window() {
                            let _ = w.location().set_href("/");
                        }
                    }
                    Err(e) => {
                        toasts.update(|t| {
                            t.push(
                                crate::state::toasts::ToastVariant::Destructive,
                                "Sign in failed",
                                &e,
                            );
                        });
                        pending.set(false);
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
        <div class="auth-page">
            <h1>"Sign In"</h1>
            <form class="auth-page__form" on:submit=submit>
                <label class="auth-page__label">
                    "Email"
                    <input
                        class="auth-page__input"
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-page__label">
                    "Password"
                    <input
                        class="auth-page__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    {move || if pending.get() { "Signing in..." } else { "Sign In" }}
                </button>
            </form>
        </div>
    }
}
