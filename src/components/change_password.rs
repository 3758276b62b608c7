//! Password-change subform shown inside the account dropdown.

use leptos::prelude::*;

use crate::state::toasts::{ToastState, ToastVariant};

/// Controlled form with new-password and confirmation fields.
///
/// Outcomes are reported through toasts; the form clears itself after a
/// successful change.
#[component]
pub fn ChangePasswordForm() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get() {
            return;
        }
        let new_password = password.get();
        if new_password.is_empty() {
            return;
        }
        if new_password != confirm.get() {
            toasts.update(|t| {
                t.push(ToastVariant::Destructive, "Error", "Passwords do not match");
            });
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            pending.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::change_password(&new_password).await {
                    Ok(()) => {
                        password.set(String::new());
                        confirm.set(String::new());
                        toasts.update(|t| {
                            t.push(ToastVariant::Info, "Password updated", "");
                        });
                    }
                    Err(e) => {
                        toasts.update(|t| {
                            t.push(ToastVariant::Destructive, "Error", &e);
                        });
                    }
                }
                pending.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = new_password;
        }
    };

    view! {
        <form class="change-password" on:submit=submit>
            <label class="change-password__label">
                "New Password"
                <input
                    class="change-password__input"
                    type="password"
                    prop:value=move || password.get()
                    on:input=move |ev| password.set(event_target_value(&ev))
                />
            </label>
            <label class="change-password__label">
                "Confirm"
                <input
                    class="change-password__input"
                    type="password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| confirm.set(event_target_value(&ev))
                />
            </label>
            <button class="btn" type="submit" disabled=move || pending.get()>
                {move || if pending.get() { "Saving..." } else { "Change Password" }}
            </button>
        </form>
    }
}
