//! Application state for the workshop HTTP server.

use crate::auth::signing_key;
use axum::extract::FromRef;
use axum_extra::extract::cookie::Key;

/// Application state shared across all HTTP handlers.
///
/// Cloned cheaply per request. Generic over the repository so the router
/// runs against the Redis adapter in production and the mock in tests.
#[derive(Clone)]
pub struct AppState<R> {
    /// Document store adapter.
    pub repo: R,
    /// Operator-configured admin password; `None` surfaces as a
    /// configuration error on login.
    pub admin_password: Option<String>,
    /// Session cookie signing key.
    pub cookie_key: Key,
}

impl<R> AppState<R> {
    /// Build state from a repository and the auth configuration.
    #[must_use]
    pub fn new(repo: R, admin_password: Option<String>, session_secret: &str) -> Self {
        Self {
            repo,
            admin_password,
            cookie_key: signing_key(session_secret),
        }
    }
}

// Lets the signed cookie jar extract its key from the application state
impl<R: Clone> FromRef<AppState<R>> for Key {
    fn from_ref(state: &AppState<R>) -> Self {
        state.cookie_key.clone()
    }
}
