//! Dashboard Stats Component

use std::collections::BTreeMap;

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

fn breakdown(title: &'static str, counts: BTreeMap<String, u64>) -> impl IntoView {
    view! {
        <div class="breakdown">
            <h4>{title}</h4>
            <ul>
                {counts.into_iter().map(|(name, count)| view! {
                    <li><span>{name}</span><span class="count">{count}</span></li>
                }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
pub fn DashboardStats() -> impl IntoView {
    let store = use_app_store();
    let analytics = move || store.analytics().get().unwrap_or_default();

    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <span class="stat-label">"Total feedback"</span>
                <span class="stat-value">{move || analytics().total_feedback}</span>
            </div>
            <div class="stat-card">
                <span class="stat-label">"Average sentiment"</span>
                <span class="stat-value">{move || format!("{:.2}", analytics().average_sentiment)}</span>
            </div>
            <div class="stat-card positive">
                <span class="stat-label">"Positive"</span>
                <span class="stat-value">{move || analytics().count_for("Positive")}</span>
            </div>
            <div class="stat-card negative">
                <span class="stat-label">"Negative"</span>
                <span class="stat-value">{move || analytics().count_for("Negative")}</span>
            </div>
            <div class="stat-card neutral">
                <span class="stat-label">"Neutral"</span>
                <span class="stat-value">{move || analytics().count_for("Neutral")}</span>
            </div>
        </div>
        <div class="breakdowns">
            {move || breakdown("By category", analytics().feedback_by_category)}
            {move || breakdown("By subject", analytics().feedback_by_subject)}
        </div>
    }
}
