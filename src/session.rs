//! Session Store
//!
//! Owns the persisted auth token. Token claims are decoded client-side as a
//! hint only; the backend stays the authority on validity.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use base64::Engine;
use serde::Deserialize;

use crate::models::UserProfile;

const USER_KEY: &str = "currentUser";
const ADMIN_ROLE: &str = "admin";

/// Key/value persistence backing the session
///
/// `get`/`set`/`remove` address durable storage; the scratch methods address
/// tab-scoped storage that is wiped on logout.
pub trait TokenStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
    fn get_scratch(&self, key: &str) -> Option<String>;
    fn set_scratch(&self, key: &str, value: &str);
    fn clear_scratch(&self);
}

/// `localStorage` for the token, `sessionStorage` for scratch data
pub struct BrowserStorage;

impl BrowserStorage {
    fn local() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok().flatten()
    }

    fn session() -> Option<web_sys::Storage> {
        web_sys::window()?.session_storage().ok().flatten()
    }
}

impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::local()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::local() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    log::error!("[SESSION] Failed to persist {}", key);
                }
            }
            None => log::warn!("[SESSION] localStorage unavailable"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::local() {
            let _ = storage.remove_item(key);
        }
    }

    fn get_scratch(&self, key: &str) -> Option<String> {
        Self::session()?.get_item(key).ok().flatten()
    }

    fn set_scratch(&self, key: &str, value: &str) {
        if let Some(storage) = Self::session() {
            let _ = storage.set_item(key, value);
        }
    }

    fn clear_scratch(&self) {
        if let Some(storage) = Self::session() {
            let _ = storage.clear();
        }
    }
}

/// In-memory storage, used off-browser
#[derive(Default)]
pub struct MemoryStorage {
    durable: RefCell<HashMap<String, String>>,
    scratch: RefCell<HashMap<String, String>>,
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.durable.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.durable.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.durable.borrow_mut().remove(key);
    }

    fn get_scratch(&self, key: &str) -> Option<String> {
        self.scratch.borrow().get(key).cloned()
    }

    fn set_scratch(&self, key: &str, value: &str) {
        self.scratch.borrow_mut().insert(key.to_string(), value.to_string());
    }

    fn clear_scratch(&self) {
        self.scratch.borrow_mut().clear();
    }
}

/// Claims read from the middle segment of a token
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct TokenClaims {
    #[serde(default)]
    pub exp: Option<i64>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
}

impl TokenClaims {
    /// Decode `header.payload.signature`. Any structural or decode problem
    /// yields `None`.
    pub fn decode(token: &str) -> Option<Self> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return None;
        }
        let payload = parts[1].trim_end_matches('=');
        let bytes = URL_SAFE_NO_PAD
            .decode(payload)
            .or_else(|_| STANDARD_NO_PAD.decode(payload))
            .ok()?;
        serde_json::from_slice(&bytes).ok()
    }
}

/// Expired unless the token decodes and carries `exp >= now`
pub fn is_expired_at(token: &str, now: i64) -> bool {
    match TokenClaims::decode(token).and_then(|claims| claims.exp) {
        Some(exp) => exp < now,
        None => true,
    }
}

type LogoutHook = Rc<dyn Fn()>;

/// Handle to the single live session token
#[derive(Clone)]
pub struct SessionStore {
    storage: Rc<dyn TokenStorage>,
    key: String,
    on_logout: Rc<RefCell<Option<LogoutHook>>>,
}

impl SessionStore {
    pub fn new(storage: Rc<dyn TokenStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
            on_logout: Rc::new(RefCell::new(None)),
        }
    }

    pub fn in_memory(key: impl Into<String>) -> Self {
        Self::new(Rc::new(MemoryStorage::default()), key)
    }

    /// Current token; an empty stored value counts as absent
    pub fn get(&self) -> Option<String> {
        self.storage.get(&self.key).filter(|token| !token.is_empty())
    }

    pub fn set(&self, token: &str) {
        self.storage.set(&self.key, token);
    }

    /// Remove the token and all tab-scoped data
    pub fn clear(&self) {
        self.storage.remove(&self.key);
        self.storage.clear_scratch();
    }

    pub fn is_logged_in(&self) -> bool {
        self.get().is_some()
    }

    pub fn is_expired(&self, token: &str) -> bool {
        is_expired_at(token, chrono::Utc::now().timestamp())
    }

    fn claims(&self) -> Option<TokenClaims> {
        self.get().and_then(|token| TokenClaims::decode(&token))
    }

    /// Role claim of the current token
    pub fn role(&self) -> Option<String> {
        self.claims().and_then(|claims| claims.role)
    }

    /// Username carried in the token's `sub` claim
    pub fn subject(&self) -> Option<String> {
        self.claims().and_then(|claims| claims.sub)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.role().as_deref() == Some(role)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(ADMIN_ROLE)
    }

    pub fn remember_user(&self, user: &UserProfile) {
        match serde_json::to_string(user) {
            Ok(json) => self.storage.set_scratch(USER_KEY, &json),
            Err(e) => log::warn!("[SESSION] Could not store user: {}", e),
        }
    }

    pub fn remembered_user(&self) -> Option<UserProfile> {
        let json = self.storage.get_scratch(USER_KEY)?;
        serde_json::from_str(&json).ok()
    }

    /// Install the callback run after a forced logout
    pub fn set_logout_hook(&self, hook: impl Fn() + 'static) {
        *self.on_logout.borrow_mut() = Some(Rc::new(hook));
    }

    /// Clear the session and notify the view layer
    pub fn force_logout(&self) {
        log::warn!("[SESSION] Forced logout");
        self.clear();
        // Clone out so the hook may touch the session again
        let hook = self.on_logout.borrow().clone();
        if let Some(hook) = hook {
            hook();
        }
    }

    /// Force a logout if the stored token has expired. Returns whether a
    /// usable session remains.
    pub fn ensure_valid(&self) -> bool {
        self.logout_if(|token| self.is_expired(token))
    }

    pub fn ensure_valid_at(&self, now: i64) -> bool {
        self.logout_if(|token| is_expired_at(token, now))
    }

    fn logout_if(&self, expired: impl Fn(&str) -> bool) -> bool {
        match self.get() {
            Some(token) if expired(&token) => {
                self.force_logout();
                false
            }
            Some(_) => true,
            None => false,
        }
    }
}
