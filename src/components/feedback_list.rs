//! Feedback List Component

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::AppStateStoreFields;
use crate::view_state::format_timestamp;

#[component]
pub fn FeedbackList() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;
    let is_admin = Memo::new(move |_| ctx.is_admin());

    view! {
        <div class="feedback-list">
            <Show
                when=move || store.feedback().with(|records| !records.is_empty())
                fallback=|| view! {
                    <p class="empty-state">"No feedback matches the current filters."</p>
                }
            >
                <For
                    each=move || store.feedback().get()
                    key=|record| record.id
                    children=move |record| {
                        let id = record.id;
                        let badge = format!("{} ({:.2})", record.label(), record.score());
                        view! {
                            <div class=format!("feedback-item {}", record.label_class())>
                                <div class="feedback-meta">
                                    <span>{record.heading()}</span>
                                    <span class=format!("sentiment-badge {}", record.label_class())>{badge}</span>
                                    <Show when=move || is_admin.get()>
                                        <DeleteConfirmButton feedback_id=id />
                                    </Show>
                                </div>
                                <div class="feedback-text">{record.text.clone()}</div>
                                <div class="feedback-date">{format_timestamp(&record.created_at)}</div>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
