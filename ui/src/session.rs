//! Session context: who is logged in, hydrated from the session store.
//!
//! The store is the durable truth (a token in localStorage survives a
//! reload); [`SessionState`] is the reactive mirror the components read.
//! Both are updated together on login and logout.

use dioxus::prelude::*;
use serde::{Deserialize, Serialize};

use api::models::Admin;
use store::SessionStore;

use crate::client::use_client;

/// Reactive view of the current session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub user: Option<Admin>,
    pub authenticated: bool,
}

impl SessionState {
    /// Rebuild from the durable store, typically on app start.
    ///
    /// A token without a cached admin object (older sessions stored only
    /// the token) still counts as logged in, under a generic identity.
    pub fn from_store<S: SessionStore>(store: &S) -> Self {
        if store.token().is_none() {
            return Self::default();
        }
        let user = store
            .user_json()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_else(|| Admin {
                name: "Admin".to_string(),
                role: Some("admin".to_string()),
                ..Default::default()
            });
        Self {
            user: Some(user),
            authenticated: true,
        }
    }

    pub fn display_name(&self) -> &str {
        self.user
            .as_ref()
            .map(|u| u.name.as_str())
            .filter(|n| !n.is_empty())
            .unwrap_or("Admin")
    }

    pub fn role(&self) -> &str {
        self.user
            .as_ref()
            .and_then(|u| u.role.as_deref())
            .unwrap_or("admin")
    }
}

pub fn use_session() -> Signal<SessionState> {
    use_context::<Signal<SessionState>>()
}

/// Provides [`SessionState`], hydrated once from the client's store.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    let client = use_client();
    use_context_provider(|| Signal::new(SessionState::from_store(client.session())));

    rsx! {
        {children}
    }
}

/// Mark the session as logged in after a successful login call. The
/// client already persisted the token; this updates the reactive side.
pub fn session_login(session: &mut Signal<SessionState>, admin: Option<Admin>) {
    session.set(SessionState {
        user: Some(admin.unwrap_or_else(|| Admin {
            name: "Admin".to_string(),
            role: Some("admin".to_string()),
            ..Default::default()
        })),
        authenticated: true,
    });
}

/// Clear both the durable store and the reactive state.
pub fn session_logout<S: SessionStore>(store: &S, session: &mut Signal<SessionState>) {
    store.clear();
    session.set(SessionState::default());
}

/// Routes reachable without a token. The unauthorized redirect skips
/// these so a rejected login attempt never loops back onto itself.
pub fn is_public_route(path: &str) -> bool {
    path == "/" || path.contains("/login")
}

/// Hard-redirect the browser to the login screen, unless already on a
/// public route. No-op outside the browser.
pub fn force_login_redirect() {
    #[cfg(target_arch = "wasm32")]
    if let Some(window) = web_sys::window() {
        let location = window.location();
        let path = location.pathname().unwrap_or_default();
        if !is_public_route(&path) {
            let _ = location.set_href("/login");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::MemoryStore;

    #[test]
    fn test_empty_store_is_logged_out() {
        let state = SessionState::from_store(&MemoryStore::new());
        assert!(!state.authenticated);
        assert!(state.user.is_none());
        assert_eq!(state.display_name(), "Admin");
    }

    #[test]
    fn test_token_with_cached_admin() {
        let store = MemoryStore::new();
        store.set_token("abc123");
        store.set_user_json(r#"{"id":"a1","name":"Priya","email":"priya@school.test","role":"admin"}"#);

        let state = SessionState::from_store(&store);
        assert!(state.authenticated);
        assert_eq!(state.display_name(), "Priya");
        assert_eq!(state.role(), "admin");
    }

    #[test]
    fn test_token_without_cached_admin_gets_generic_identity() {
        let store = MemoryStore::new();
        store.set_token("abc123");

        let state = SessionState::from_store(&store);
        assert!(state.authenticated);
        assert_eq!(state.display_name(), "Admin");
    }

    #[test]
    fn test_public_routes() {
        assert!(is_public_route("/"));
        assert!(is_public_route("/login"));
        assert!(!is_public_route("/dashboard"));
        assert!(!is_public_route("/fees/due"));
    }
}
