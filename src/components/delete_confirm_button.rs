//! Two-step delete control for a feedback row (admins only).

use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::MouseEvent;

use crate::context::use_app_context;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Idle,
    Confirming,
    Deleting,
}

#[component]
pub fn DeleteConfirmButton(feedback_id: u32) -> impl IntoView {
    let ctx = use_app_context();
    let step = RwSignal::new(Step::Idle);

    let goto = move |next: Step| {
        move |ev: MouseEvent| {
            ev.stop_propagation();
            step.set(next);
        }
    };
    let confirm = move |ev: MouseEvent| {
        ev.stop_propagation();
        step.set(Step::Deleting);
        spawn_local(async move {
            ctx.delete_feedback(feedback_id).await;
            // on success the row is gone along with this signal
            let _ = step.try_set(Step::Idle);
        });
    };

    move || match step.get() {
        Step::Idle => view! {
            <button class="delete-btn" title="Delete feedback" on:click=goto(Step::Confirming)>
                "×"
            </button>
        }
        .into_any(),
        Step::Confirming => view! {
            <span class="delete-confirm">
                <span class="delete-confirm-text">{format!("Delete #{}?", feedback_id)}</span>
                <button class="confirm-btn" on:click=confirm>"✓"</button>
                <button class="cancel-btn" on:click=goto(Step::Idle)>"✗"</button>
            </span>
        }
        .into_any(),
        Step::Deleting => view! { <span class="delete-confirm-text">"Deleting…"</span> }.into_any(),
    }
}
