//! Application Context
//!
//! Shared state provided via Leptos Context API. Services holding `Rc`s live
//! in local storage so the context itself stays `Copy`.

use std::time::Duration;

use leptos::prelude::*;
use leptos::reactive::owner::LocalStorage;

use crate::api::{ApiClient, ApiError};
use crate::config::AppConfig;
use crate::notify::Notifier;
use crate::session::SessionStore;
use crate::store::{store_clear_private, AppStateStoreFields, AppStore};
use crate::view_state::{View, ViewState};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Active view and logged-in flag
    pub view_state: RwSignal<ViewState>,
    /// Toast stack
    pub notifier: Notifier,
    /// Fetched server data
    pub store: AppStore,
    api: StoredValue<ApiClient, LocalStorage>,
    config: StoredValue<AppConfig>,
}

impl AppContext {
    pub fn new(config: AppConfig, api: ApiClient, store: AppStore) -> Self {
        let logged_in = api.session().is_logged_in();
        Self {
            view_state: RwSignal::new(ViewState::new(logged_in)),
            notifier: Notifier::new(config.toast_duration),
            store,
            api: StoredValue::new_local(api),
            config: StoredValue::new(config),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn session(&self) -> SessionStore {
        self.api.with_value(|api| api.session().clone())
    }

    pub fn refresh_interval(&self) -> Duration {
        self.config.with_value(|c| c.refresh_interval)
    }

    pub fn session_check_interval(&self) -> Duration {
        self.config.with_value(|c| c.session_check_interval)
    }

    pub fn active_view(&self) -> View {
        self.view_state.get().view
    }

    pub fn logged_in(&self) -> bool {
        self.view_state.get().logged_in
    }

    /// Admin per the loaded profile, else per the token's role claim
    pub fn is_admin(&self) -> bool {
        let profile_role = self
            .store
            .current_user()
            .with(|user| user.as_ref().and_then(|u| u.role.clone()));
        match profile_role {
            Some(role) => role == "admin",
            None => self.logged_in() && self.session().is_admin(),
        }
    }

    /// Wire the session's forced-logout path to the view layer
    pub fn install_logout_hook(&self) {
        let ctx = *self;
        self.session().set_logout_hook(move || {
            ctx.reset_to_logged_out();
            ctx.notifier.error("Session expired. Please log in again.");
        });
    }

    /// Logged-out state on Home with user data dropped
    pub fn reset_to_logged_out(&self) {
        self.view_state.update(|state| state.on_forced_logout());
        store_clear_private(&self.store);
    }

    /// Surface a failed call. Auth failures were already handled by the
    /// logout hook.
    pub fn report(&self, err: &ApiError, fallback: &str) {
        log::error!("[APP] {}: {}", fallback, err);
        if err.is_auth_failure() {
            return;
        }
        match err.server_message() {
            Some(detail) => self.notifier.error(format!("{} ({})", fallback, detail)),
            None => self.notifier.error(fallback),
        }
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
