//! Admin login and logout handlers.

use crate::auth::session::{SessionData, removal_cookie, session_cookie};
use crate::providers::Repository;
use crate::server::AppState;
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use axum_extra::extract::SignedCookieJar;
use serde::{Deserialize, Serialize};
use workshop_web::{AppError, ClientIp};

/// Login request body.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    /// Operator password.
    #[serde(default)]
    pub password: String,
}

/// Response after a successful login.
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    /// Always `true` on success.
    pub success: bool,
}

/// Response carrying a human-readable message.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    /// Success message.
    pub message: String,
}

/// Authenticate the admin and mark the session as authorized.
///
/// # Endpoint
///
/// ```text
/// POST /api/admin/login
/// Content-Type: application/json
///
/// {"password": "..."}
/// ```
///
/// # Errors
///
/// - `400` — missing or empty password
/// - `401` — wrong password
/// - `500` — no admin password configured, or the session cookie could
///   not be produced
pub async fn login<R>(
    State(state): State<AppState<R>>,
    client_ip: ClientIp,
    jar: SignedCookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(SignedCookieJar, Json<LoginResponse>), AppError>
where
    R: Repository + Clone + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    if request.password.is_empty() {
        return Err(AppError::bad_request("password is required"));
    }

    let Some(admin_password) = state.admin_password.as_deref() else {
        return Err(AppError::internal("Admin password not configured"));
    };

    if request.password != admin_password {
        tracing::warn!(client_ip = %client_ip.0, "Failed admin login attempt");
        return Err(AppError::unauthorized("Invalid password"));
    }

    let cookie = session_cookie(&SessionData { is_admin: true })
        .map_err(|e| AppError::internal("Failed to save session").with_source(e.into()))?;

    tracing::info!(client_ip = %client_ip.0, "Admin login");
    Ok((jar.add(cookie), Json(LoginResponse { success: true })))
}

/// Clear the caller's session.
///
/// # Endpoint
///
/// ```text
/// POST /api/admin/logout
/// ```
pub async fn logout(jar: SignedCookieJar) -> (SignedCookieJar, Json<MessageResponse>) {
    (
        jar.remove(removal_cookie()),
        Json(MessageResponse {
            message: "Logged out successfully".to_string(),
        }),
    )
}
