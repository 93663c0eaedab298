use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::session::{SessionStore, TOKEN_KEY, USER_KEY};

/// In-memory SessionStore for testing and native fallback.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn get(&self, key: &str) -> Option<String> {
        self.values.lock().unwrap().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.values
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
    }
}

impl SessionStore for MemoryStore {
    fn token(&self) -> Option<String> {
        self.get(TOKEN_KEY)
    }

    fn set_token(&self, token: &str) {
        self.set(TOKEN_KEY, token);
    }

    fn user_json(&self) -> Option<String> {
        self.get(USER_KEY)
    }

    fn set_user_json(&self, json: &str) {
        self.set(USER_KEY, json);
    }

    fn clear(&self) {
        let mut values = self.values.lock().unwrap();
        values.remove(TOKEN_KEY);
        values.remove(USER_KEY);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_roundtrip() {
        let store = MemoryStore::new();
        assert!(store.token().is_none());

        store.set_token("abc123");
        assert_eq!(store.token().as_deref(), Some("abc123"));
    }

    #[test]
    fn test_clear_removes_token_and_user() {
        let store = MemoryStore::new();
        store.set_token("abc123");
        store.set_user_json(r#"{"name":"Admin"}"#);

        store.clear();

        assert!(store.token().is_none());
        assert!(store.user_json().is_none());
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set_token("shared");
        assert_eq!(other.token().as_deref(), Some("shared"));

        other.clear();
        assert!(store.token().is_none());
    }
}
