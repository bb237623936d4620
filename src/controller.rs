//! View Controller
//!
//! Async user flows: navigation, login/logout, dashboard refresh and
//! feedback submission. Every network call is fire-once; failures are
//! reported through the notifier.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;
use crate::context::AppContext;
use crate::models::{Analytics, FeedbackRecord, FilterSet, LoginResponse, NewFeedback, Sentiment};
use crate::store::{store_remove_feedback, AppStateStoreFields};
use crate::view_state::{sentiment_message, View};

impl AppContext {
    /// Switch sections; entering a live dashboard refreshes it
    pub fn navigate(&self, requested: View) {
        if self.enter(requested) {
            spawn_local(self.refresh_dashboard());
        }
    }

    /// Apply a navigation request. Returns whether the dashboard needs a
    /// refresh.
    fn enter(&self, requested: View) -> bool {
        let refresh = self
            .view_state
            .try_update(|state| state.navigate(requested))
            .unwrap_or(false);
        log::debug!("[VIEW] -> {:?}", self.view_state.get_untracked().view);
        refresh
    }

    fn dashboard_live(&self) -> bool {
        self.view_state
            .try_get_untracked()
            .is_some_and(|state| state.dashboard_live())
    }

    /// Exchange credentials for a token. Failures only ever show a generic
    /// message.
    pub async fn login(self, username: String, password: String) -> bool {
        match self.api().login(&username, &password).await {
            Ok(response) => {
                let refresh = self.start_session(&response);
                self.load_user().await;
                if refresh {
                    self.refresh_dashboard().await;
                }
                true
            }
            Err(e) => {
                log::error!("[AUTH] Login failed: {}", e);
                self.notifier.error("Login failed. Check your credentials.");
                false
            }
        }
    }

    /// Persist the new token and open the dashboard. Returns whether the
    /// dashboard needs a refresh.
    fn start_session(&self, response: &LoginResponse) -> bool {
        self.session().set(&response.access_token);
        self.view_state.update(|state| state.on_login());
        self.notifier.success("Logged in successfully!");
        self.enter(View::Dashboard)
    }

    pub fn logout(&self) {
        self.session().clear();
        self.reset_to_logged_out();
        self.notifier.info("Logged out successfully");
    }

    /// Fetch `/auth/me` into the store
    pub async fn load_user(self) {
        if !self.session().is_logged_in() {
            return;
        }
        match self.api().current_user().await {
            Ok(user) if self.session().is_logged_in() => {
                log::info!("[AUTH] Current user: {}", user.username);
                self.session().remember_user(&user);
                *self.store.current_user().write() = Some(user);
            }
            Ok(_) => log::debug!("[AUTH] Logged out before the profile arrived"),
            Err(e) => self.report(&e, "Failed to load user information"),
        }
    }

    /// Categories and subjects for the select lists
    pub async fn load_catalog(self) {
        let api = self.api();
        match api.categories().await {
            Ok(categories) => *self.store.categories().write() = categories,
            Err(e) => self.report(&e, "Failed to load data"),
        }
        match api.subjects().await {
            Ok(subjects) => *self.store.subjects().write() = subjects,
            Err(e) => self.report(&e, "Failed to load data"),
        }
    }

    /// Analytics, then the filtered list
    pub async fn refresh_dashboard(self) {
        if !self.dashboard_live() {
            return;
        }
        log::debug!("[DASHBOARD] Refreshing");
        let analytics = self.api().analytics().await;
        if self.accept_analytics(analytics) {
            self.load_feedback().await;
        }
    }

    /// Store fresh numbers. Returns whether the list should load next: a
    /// failed analytics call keeps the old numbers but the list still loads,
    /// unless the session is gone.
    fn accept_analytics(&self, result: Result<Analytics, ApiError>) -> bool {
        if !self.dashboard_live() {
            log::debug!("[DASHBOARD] Closed before analytics arrived");
            return false;
        }
        match result {
            Ok(analytics) => {
                *self.store.analytics().write() = Some(analytics);
                true
            }
            Err(e) => {
                self.report(&e, "Failed to load dashboard data");
                !e.is_auth_failure()
            }
        }
    }

    pub async fn load_feedback(self) {
        if !self.dashboard_live() {
            return;
        }
        let filters = self.store.filters().get_untracked();
        let result = self.api().list_feedback(&filters).await;
        self.accept_feedback(result);
    }

    fn accept_feedback(&self, result: Result<Vec<FeedbackRecord>, ApiError>) {
        if !self.dashboard_live() {
            log::debug!("[DASHBOARD] Closed before the list arrived");
            return;
        }
        match result {
            Ok(records) => {
                log::debug!("[DASHBOARD] Loaded {} records", records.len());
                *self.store.feedback().write() = records;
            }
            Err(e) => self.report(&e, "Failed to load feedback"),
        }
    }

    pub fn apply_filters(&self, filters: FilterSet) {
        *self.store.filters().write() = filters;
        spawn_local(self.load_feedback());
    }

    /// Send a validated draft. On success the classification is announced and
    /// returned; nothing else is refreshed.
    pub async fn submit_feedback(self, feedback: NewFeedback) -> Option<Sentiment> {
        match self.api().submit_feedback(&feedback).await {
            Ok(response) => {
                self.notifier
                    .success("Feedback submitted. Thank you for your contribution!");
                self.notifier.info(sentiment_message(&response.sentiment));
                Some(response.sentiment)
            }
            Err(e) => {
                self.report(&e, "Something went wrong. Please try again.");
                None
            }
        }
    }

    /// Admin-only removal of a feedback record
    pub async fn delete_feedback(self, id: u32) {
        match self.api().delete_feedback(id).await {
            Ok(_) => {
                store_remove_feedback(&self.store, id);
                self.notifier.success("Feedback deleted");
            }
            Err(e) => self.report(&e, "Could not delete feedback"),
        }
    }
}
