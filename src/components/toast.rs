//! Toast stack rendering transient notifications.

use leptos::prelude::*;

use crate::state::toasts::{ToastState, ToastVariant};

/// Auto-dismiss delay for toasts, in milliseconds.
#[cfg(feature = "hydrate")]
const DISMISS_AFTER_MS: u64 = 5000;

/// Renders the current toast queue in a fixed corner stack.
///
/// Each toast can be dismissed by click; in the browser it also dismisses
/// itself after a few seconds.
#[component]
pub fn Toaster() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <div class="toaster">
            <For
                each=move || toasts.get().toasts
                key=|toast| toast.id.clone()
                children=move |toast| {
                    let id = toast.id.clone();
                    let class = match toast.variant {
                        ToastVariant::Info => "toast",
                        ToastVariant::Destructive => "toast toast--destructive",
                    };

                    #[cfg(feature = "hydrate")]
                    {
                        let id = id.clone();
                        leptos::task::spawn_local(async move {
                            gloo_timers::future::sleep(std::time::Duration::from_millis(
                                DISMISS_AFTER_MS,
                            ))
                            .await;
                            toasts.update(|t| t.dismiss(&id));
                        });
                    }

                    let dismiss_id = id.clone();
                    view! {
                        <div class=class role="status">
                            <span class="toast__title">{toast.title.clone()}</span>
                            <span class="toast__message">{toast.message.clone()}</span>
                            <button
                                class="toast__dismiss"
                                on:click=move |_| toasts.update(|t| t.dismiss(&dismiss_id))
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
