//! Toast Stack Component

use leptos::prelude::*;

use crate::context::use_app_context;

/// Stacked notifications, newest at the bottom
#[component]
pub fn ToastStack() -> impl IntoView {
    let notifier = use_app_context().notifier;

    view! {
        <div class="toast-stack">
            <For
                each=move || notifier.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.severity.css_class()>
                            <div class="toast-content">
                                <span class="toast-message">{toast.message}</span>
                                <button class="toast-close" on:click=move |_| notifier.dismiss(id)>
                                    "×"
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
