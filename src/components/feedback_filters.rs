//! Feedback Filters Component

use leptos::prelude::*;

use crate::components::CatalogSelect;
use crate::context::use_app_context;
use crate::models::{FilterSet, SENTIMENT_LABELS};
use crate::store::{use_app_store, AppStateStoreFields};

/// Category/subject/sentiment selects; the list reloads on Apply
#[component]
pub fn FeedbackFilters() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    // Start from whatever is currently applied to the list
    let (applied_category, applied_subject, applied_sentiment) =
        store.filters().with_untracked(|f| f.selection());
    let (category, set_category) = signal(applied_category);
    let (subject, set_subject) = signal(applied_subject);
    let (sentiment, set_sentiment) = signal(applied_sentiment);

    let apply = move |_| {
        let filters = FilterSet::from_selection(
            &category.get_untracked(),
            &subject.get_untracked(),
            &sentiment.get_untracked(),
        );
        ctx.apply_filters(filters);
    };

    view! {
        <div class="filters">
            <CatalogSelect
                id="filterCategory"
                placeholder="All categories"
                options=Signal::derive(move || store.categories().get())
                value=category.into()
                on_change=move |v: String| set_category.set(v)
            />
            <CatalogSelect
                id="filterSubject"
                placeholder="All subjects"
                options=Signal::derive(move || store.subjects().get())
                value=subject.into()
                on_change=move |v: String| set_subject.set(v)
            />
            <select
                id="filterSentiment"
                class="form-control"
                on:change=move |ev| set_sentiment.set(event_target_value(&ev))
            >
                <option value="">"All sentiments"</option>
                {SENTIMENT_LABELS.iter().map(|label| view! {
                    <option value=*label prop:selected=move || sentiment.get() == *label>{*label}</option>
                }).collect_view()}
            </select>
            <button class="btn btn-primary" on:click=apply>"Apply filters"</button>
        </div>
    }
}
