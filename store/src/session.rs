//! # Session persistence
//!
//! The only client-side state FeeDesk persists is the auth session: the
//! bearer token handed out by `POST /auth/login` and a small cached copy
//! of the signed-in admin. Everything else is re-fetched per view mount.
//!
//! [`SessionStore`] abstracts where that session lives:
//!
//! | Impl | Platform | Backing |
//! |------|----------|---------|
//! | [`crate::MemoryStore`] | native / tests | `Arc<Mutex<HashMap>>` |
//! | [`crate::LocalStore`] | wasm (`web` feature) | browser localStorage |
//!
//! The cached user is kept as a JSON string so this crate stays free of
//! the API domain types; callers (de)serialize at the boundary.

/// localStorage key for the bearer token.
pub const TOKEN_KEY: &str = "authToken";

/// localStorage key for the cached admin user object (JSON).
pub const USER_KEY: &str = "authUser";

/// Where the auth session is persisted.
///
/// Implementations are cheap to clone (handles over shared state) so the
/// API client can carry one into spawned futures.
pub trait SessionStore: Clone + 'static {
    /// The stored bearer token, if any.
    fn token(&self) -> Option<String>;

    /// Store the bearer token.
    fn set_token(&self, token: &str);

    /// The cached user object as JSON, if any.
    fn user_json(&self) -> Option<String>;

    /// Cache the user object as JSON.
    fn set_user_json(&self, json: &str);

    /// Drop the whole session: token and cached user.
    fn clear(&self);
}
