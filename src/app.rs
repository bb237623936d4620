//! Feedback Frontend App
//!
//! Root component: builds the services, provides context and switches between
//! the Home, Login and Dashboard sections.

use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api::ApiClient;
use crate::components::{DashboardSection, HomeSection, LoginSection, NavBar, ToastStack};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::session::{BrowserStorage, SessionStore};
use crate::store::AppState;
use crate::view_state::View;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let session = SessionStore::new(Rc::new(BrowserStorage), config.token_key.clone());
    let api = ApiClient::new(&config.api_base_url, session.clone())
        .expect("AppConfig only yields parseable base URLs");

    let store = Store::new(AppState {
        current_user: session.remembered_user(),
        ..Default::default()
    });
    let ctx = AppContext::new(config, api, store);

    // Provide context to all children
    provide_context(ctx);
    provide_context(store);
    ctx.install_logout_hook();

    // A stale token from a previous visit is dropped right away
    if session.ensure_valid() {
        spawn_local(ctx.load_user());
    }
    spawn_local(ctx.load_catalog());

    // Expiry watchdog for the whole app lifetime
    let check_millis = ctx.session_check_interval().as_millis() as u32;
    Interval::new(check_millis, move || {
        ctx.session().ensure_valid();
    })
    .forget();

    let active = Memo::new(move |_| ctx.view_state.get().view);

    view! {
        <div class="app-layout">
            <NavBar />
            <main class="main-content">
                {move || match active.get() {
                    View::Home => view! { <HomeSection /> }.into_any(),
                    View::Login => view! { <LoginSection /> }.into_any(),
                    View::Dashboard => view! { <DashboardSection /> }.into_any(),
                }}
            </main>
            <ToastStack />
        </div>
    }
}
