//! Admin session cookie codec.
//!
//! The session is opaque key-value state serialized into a signed cookie.
//! Only the signature lives server-side (as the derived key); a cookie that
//! fails signature verification never reaches this module, and a payload
//! that fails to parse is treated as no session at all.

use axum_extra::extract::cookie::{Cookie, Key, SameSite};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha512};

/// Name of the admin session cookie.
pub const SESSION_COOKIE: &str = "admin-session";

/// Per-request session payload stored in the signed cookie.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionData {
    /// Set after a successful admin login. The gate requires exactly `true`.
    #[serde(rename = "isAdmin", default)]
    pub is_admin: bool,
}

/// Derive the cookie signing key from the configured session secret.
///
/// Cookie keys require 64 bytes of material; SHA-512 expands a secret of
/// any length to exactly that.
#[must_use]
pub fn signing_key(secret: &str) -> Key {
    let digest = Sha512::digest(secret.as_bytes());
    Key::from(digest.as_slice())
}

/// Build the session cookie carrying a payload.
///
/// # Errors
///
/// Returns an error if the payload fails to serialize; callers surface
/// this as a session persistence failure.
pub fn session_cookie(data: &SessionData) -> Result<Cookie<'static>, serde_json::Error> {
    let payload = serde_json::to_string(data)?;
    Ok(Cookie::build((SESSION_COOKIE, payload))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build())
}

/// Cookie that clears the session when added to a response jar.
#[must_use]
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}

/// Parse a verified cookie value back into session state.
///
/// An unparseable payload yields the default (unauthorized) session.
#[must_use]
pub fn parse_session(value: &str) -> SessionData {
    serde_json::from_str(value).unwrap_or_default()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_cookie_round_trip() {
        let cookie = session_cookie(&SessionData { is_admin: true }).unwrap();
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(parse_session(cookie.value()), SessionData { is_admin: true });
    }

    #[test]
    fn test_cookie_attributes() {
        let cookie = session_cookie(&SessionData::default()).unwrap();
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_garbage_payload_is_unauthorized() {
        assert_eq!(parse_session("not-json"), SessionData::default());
        assert_eq!(parse_session(""), SessionData::default());
        assert_eq!(parse_session("{\"isAdmin\":\"yes\"}"), SessionData::default());
    }

    #[test]
    fn test_flag_must_be_exactly_true() {
        assert!(!parse_session("{\"isAdmin\":false}").is_admin);
        assert!(!parse_session("{}").is_admin);
        assert!(parse_session("{\"isAdmin\":true}").is_admin);
    }

    #[test]
    fn test_signing_key_is_deterministic() {
        // Same secret, same key material; different secrets diverge
        assert_eq!(
            signing_key("secret").signing(),
            signing_key("secret").signing()
        );
        assert_ne!(
            signing_key("secret").signing(),
            signing_key("other-secret").signing()
        );
    }
}
