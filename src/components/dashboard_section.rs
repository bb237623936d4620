//! Dashboard Section
//!
//! Analytics, filters and the feedback list. Owns the auto-refresh timer:
//! it starts when the section mounts and is cancelled when it unmounts.

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DashboardStats, FeedbackFilters, FeedbackList};
use crate::context::use_app_context;

#[component]
pub fn DashboardSection() -> impl IntoView {
    let ctx = use_app_context();

    let millis = ctx.refresh_interval().as_millis() as u32;
    let ticker = StoredValue::new_local(Some(Interval::new(millis, move || {
        spawn_local(ctx.refresh_dashboard());
    })));
    on_cleanup(move || {
        log::debug!("[DASHBOARD] Stopping auto-refresh");
        ticker.try_update_value(|t| t.take());
    });

    view! {
        <section class="section dashboard-section">
            <div class="dashboard-header">
                <h2>"Dashboard"</h2>
                <button class="btn btn-secondary" on:click=move |_| spawn_local(ctx.refresh_dashboard())>
                    "Refresh"
                </button>
            </div>
            <DashboardStats />
            <FeedbackFilters />
            <FeedbackList />
        </section>
    }
}
