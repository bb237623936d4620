//! Home Section
//!
//! Anonymous feedback form with validation and a live sentiment preview.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{CatalogSelect, FieldErrors, SentimentPreview};
use crate::context::use_app_context;
use crate::models::{FeedbackDraft, Sentiment};
use crate::store::AppStateStoreFields;
use crate::validation::{feedback_rules, FormValidation};
use crate::view_state::{char_counter, PreviewAction, PreviewTracker};

#[component]
pub fn HomeSection() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let (draft, set_draft) = signal(FeedbackDraft::default());
    let (errors, set_errors) = signal(FormValidation::default());
    let (submitting, set_submitting) = signal(false);
    let preview = RwSignal::new(None::<Sentiment>);
    let tracker = StoredValue::new(PreviewTracker::default());

    let on_text_input = move |text: String| {
        set_draft.update(|d| d.text = text.clone());

        let action = tracker
            .try_update_value(|t| t.on_input(&text))
            .unwrap_or(PreviewAction::Hide);
        match action {
            PreviewAction::Hide => preview.set(None),
            PreviewAction::Request { seq, text } => {
                let api = ctx.api();
                spawn_local(async move {
                    let result = api.test_sentiment(&text).await;
                    if let Err(e) = &result {
                        log::error!("[PREVIEW] Sentiment preview failed: {}", e);
                    }
                    // Only the newest request may paint
                    if let Some(shown) = tracker.try_with_value(|t| t.settle(seq, result)).flatten() {
                        let _ = preview.try_set(shown);
                    }
                });
            }
        }
    };

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = draft.get_untracked();

        let validation = feedback_rules().validate(&current.fields());
        if !validation.is_valid {
            log::debug!("[FEEDBACK] Invalid draft: {:?}", validation.errors);
            set_errors.set(validation);
            return;
        }
        set_errors.set(FormValidation::default());

        let Some(body) = current.to_request() else {
            ctx.notifier.error("Please choose a valid category and subject.");
            return;
        };

        set_submitting.set(true);
        spawn_local(async move {
            if ctx.submit_feedback(body).await.is_some() {
                let _ = set_draft.try_set(FeedbackDraft::default());
                let _ = preview.try_set(None);
                tracker.try_update_value(|t| t.reset());
            }
            let _ = set_submitting.try_set(false);
        });
    };

    let categories = Signal::derive(move || store.categories().get());
    let subjects = Signal::derive(move || store.subjects().get());
    let field_invalid = move |field: &'static str| errors.with(|e| !e.field(field).is_empty());

    view! {
        <section class="section home-section">
            <h2>"Share your feedback"</h2>
            <p class="subtitle">"Anonymous: your name is never stored."</p>

            <form class="feedback-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="category">"Category"</label>
                    <CatalogSelect
                        id="category"
                        placeholder="Choose a category"
                        options=categories
                        value=Signal::derive(move || draft.with(|d| d.category_id.clone()))
                        on_change=move |v: String| set_draft.update(|d| d.category_id = v)
                        invalid=Signal::derive(move || field_invalid("category_id"))
                    />
                    <FieldErrors errors=errors field="category_id" />
                </div>

                <div class="form-group">
                    <label for="subject">"Subject"</label>
                    <CatalogSelect
                        id="subject"
                        placeholder="Choose a subject"
                        options=subjects
                        value=Signal::derive(move || draft.with(|d| d.subject_id.clone()))
                        on_change=move |v: String| set_draft.update(|d| d.subject_id = v)
                        invalid=Signal::derive(move || field_invalid("subject_id"))
                    />
                    <FieldErrors errors=errors field="subject_id" />
                </div>

                <div class="form-group">
                    <label for="feedbackText">"Your feedback"</label>
                    <textarea
                        id="feedbackText"
                        class="form-control"
                        class:error=move || field_invalid("text")
                        rows="5"
                        placeholder="What went well, what could be better?"
                        prop:value=move || draft.with(|d| d.text.clone())
                        on:input=move |ev| on_text_input(event_target_value(&ev))
                    />
                    <div class="char-counter">{move || draft.with(|d| char_counter(&d.text))}</div>
                    <FieldErrors errors=errors field="text" />
                    <SentimentPreview preview=preview />
                </div>

                <button
                    type="submit"
                    class=move || if submitting.get() { "btn btn-primary loading" } else { "btn btn-primary" }
                    disabled=move || submitting.get()
                >
                    "Send feedback"
                </button>
            </form>
        </section>
    }
}
