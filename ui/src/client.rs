//! Platform wiring for the API client.
//!
//! Picks the session store for the compile target (localStorage in the
//! browser, in-memory elsewhere), provides one shared [`ApiClient`]
//! through context, and routes API errors to the right surface.

use dioxus::prelude::*;

use api::{ApiClient, ApiError};
use store::FeeDeskConfig;

use crate::session::force_login_redirect;
use crate::toast::{toast_error, Toasts};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type AppStore = store::LocalStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type AppStore = store::MemoryStore;

/// The concrete client every view uses.
pub type AppClient = ApiClient<AppStore>;

pub fn make_store() -> AppStore {
    AppStore::new()
}

/// Build the client against the default backend.
pub fn make_client() -> AppClient {
    make_client_with(&FeeDeskConfig::default())
}

pub fn make_client_with(config: &FeeDeskConfig) -> AppClient {
    ApiClient::from_config(config, make_store())
}

pub fn use_client() -> AppClient {
    use_context::<AppClient>()
}

/// Provides the shared [`AppClient`] (and with it the session store).
#[component]
pub fn ClientProvider(children: Element) -> Element {
    use_context_provider(make_client);

    rsx! {
        {children}
    }
}

/// Route an API error to the right surface: unauthorized goes back to
/// the login screen (the client already dropped the session), anything
/// else becomes an error toast.
pub fn handle_api_error(toasts: &mut Signal<Toasts>, err: &ApiError) {
    if err.is_unauthorized() {
        tracing::warn!("session expired, redirecting to login");
        force_login_redirect();
        return;
    }
    toast_error(toasts, &err.user_message());
}
