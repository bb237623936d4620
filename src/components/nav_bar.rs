//! Navigation Bar Component
//!
//! Section buttons; which ones show depends on the login state.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::AppStateStoreFields;
use crate::view_state::View;

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_app_context();
    let store = ctx.store;

    let nav_class = move |view: View| {
        if ctx.active_view() == view { "nav-btn active" } else { "nav-btn" }
    };
    let nav_button = move |view: View| {
        view! {
            <button class=move || nav_class(view) on:click=move |_| ctx.navigate(view)>
                {view.title()}
            </button>
        }
    };

    view! {
        <nav class="navbar">
            <span class="brand">"School Feedback"</span>
            <div class="nav-buttons">
                {nav_button(View::Home)}
                <Show
                    when=move || ctx.logged_in()
                    fallback=move || nav_button(View::Login)
                >
                    {nav_button(View::Dashboard)}
                    <span class="nav-user">
                        {move || {
                            store
                                .current_user()
                                .with(|u| u.as_ref().map(|u| u.username.clone()))
                                .or_else(|| ctx.session().subject())
                        }}
                    </span>
                    <button class="nav-btn logout" on:click=move |_| ctx.logout()>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
