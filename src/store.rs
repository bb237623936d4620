//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over fetched data.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Analytics, CatalogEntry, FeedbackRecord, FilterSet, UserProfile};

/// Server data shown by the views
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Category reference list, loaded once
    pub categories: Vec<CatalogEntry>,
    /// Subject reference list, loaded once
    pub subjects: Vec<CatalogEntry>,
    /// Dashboard numbers, `None` until the first load
    pub analytics: Option<Analytics>,
    /// Feedback list matching `filters`
    pub feedback: Vec<FeedbackRecord>,
    /// Last applied dashboard filters
    pub filters: FilterSet,
    /// Profile from `/auth/me`
    pub current_user: Option<UserProfile>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Remove a feedback record from the list by ID
pub fn store_remove_feedback(store: &AppStore, feedback_id: u32) {
    store.feedback().write().retain(|record| record.id != feedback_id);
}

/// Drop everything tied to the logged-in user
pub fn store_clear_private(store: &AppStore) {
    *store.analytics().write() = None;
    store.feedback().write().clear();
    *store.current_user().write() = None;
    *store.filters().write() = FilterSet::default();
}
