//! Login Section

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::use_app_context;

#[component]
pub fn LoginSection() -> impl IntoView {
    let ctx = use_app_context();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let user = username.get_untracked();
        let pass = password.get_untracked();
        if user.trim().is_empty() || pass.is_empty() {
            ctx.notifier.error("Enter a username and password.");
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            if ctx.login(user, pass).await {
                let _ = set_username.try_set(String::new());
                let _ = set_password.try_set(String::new());
            }
            let _ = set_submitting.try_set(false);
        });
    };

    view! {
        <section class="section login-section">
            <h2>"Staff login"</h2>
            <form class="login-form" on:submit=on_submit>
                <div class="form-group">
                    <label for="username">"Username"</label>
                    <input
                        id="username"
                        type="text"
                        class="form-control"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="form-group">
                    <label for="password">"Password"</label>
                    <input
                        id="password"
                        type="password"
                        class="form-control"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button
                    type="submit"
                    class=move || if submitting.get() { "btn btn-primary loading" } else { "btn btn-primary" }
                    disabled=move || submitting.get()
                >
                    "Log in"
                </button>
            </form>
        </section>
    }
}
