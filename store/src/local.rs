use crate::session::{SessionStore, TOKEN_KEY, USER_KEY};

/// SessionStore backed by browser localStorage.
///
/// When localStorage is unavailable (storage disabled, sandboxed frame)
/// reads yield `None` and writes are dropped; the app then behaves as
/// logged out rather than failing.
#[derive(Clone, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn set(key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

impl SessionStore for LocalStore {
    fn token(&self) -> Option<String> {
        Self::get(TOKEN_KEY)
    }

    fn set_token(&self, token: &str) {
        Self::set(TOKEN_KEY, token);
    }

    fn user_json(&self) -> Option<String> {
        Self::get(USER_KEY)
    }

    fn set_user_json(&self, json: &str) {
        Self::set(USER_KEY, json);
    }

    fn clear(&self) {
        Self::remove(TOKEN_KEY);
        Self::remove(USER_KEY);
    }
}
