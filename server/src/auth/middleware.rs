//! Admin gate extractor.
//!
//! Protected routes take [`RequireAdmin`] as a handler parameter. The
//! extractor decodes the signed session cookie and halts the request with
//! `401 {"error":"Unauthorized"}` before the handler body runs unless the
//! session's authorization flag is exactly `true`.
//!
//! # Usage
//!
//! ```rust,ignore
//! async fn stats(
//!     _admin: RequireAdmin,
//!     State(state): State<AppState<R>>,
//! ) -> Result<Json<AdminStats>, AppError> {
//!     // only reached with a valid admin session
//! }
//! ```

use crate::auth::session::{SESSION_COOKIE, SessionData, parse_session};
use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::SignedCookieJar;
use axum_extra::extract::cookie::Key;
use workshop_web::AppError;

/// Proof of an authorized admin session.
///
/// Carries the decoded session payload; most handlers only need the proof
/// and bind it as `_admin`.
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin {
    /// The decoded session payload.
    pub session: SessionData,
}

#[async_trait]
impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
    Key: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let jar = SignedCookieJar::<Key>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::internal("Failed to read session cookie"))?;

        // A missing, tampered, or unparseable cookie is simply no session
        let session = jar
            .get(SESSION_COOKIE)
            .map(|cookie| parse_session(cookie.value()))
            .unwrap_or_default();

        if session.is_admin {
            Ok(Self { session })
        } else {
            Err(AppError::unauthorized("Unauthorized"))
        }
    }
}
