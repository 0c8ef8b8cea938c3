//! Attendee registration and management endpoints.

use crate::auth::RequireAdmin;
use crate::auth::handlers::MessageResponse;
use crate::models::Attendee;
use crate::providers::Repository;
use crate::server::AppState;
use crate::utils::is_valid_email;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use workshop_web::AppError;

/// Registration request body. All three fields are mandatory.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Contact email; must be syntactically valid.
    #[serde(default)]
    pub email: String,
    /// Free-text role or title.
    #[serde(default)]
    pub designation: String,
}

/// Attendee count response.
#[derive(Debug, Clone, Serialize)]
pub struct CountResponse {
    /// Cardinality of the attendee set.
    pub count: usize,
}

/// Register a new attendee.
///
/// Public endpoint. The server assigns the creation timestamp; any
/// client-supplied timestamp is ignored.
///
/// # Endpoint
///
/// ```text
/// POST /api/attendees
/// {"name": "...", "email": "...", "designation": "..."}
/// ```
///
/// # Errors
///
/// - `400` — missing name, missing or malformed email, missing designation
/// - `500` — store failure
pub async fn register<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Attendee>), AppError>
where
    R: Repository + Clone + Send + Sync + 'static,
{
    let Json(request) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    if request.name.is_empty() {
        return Err(AppError::bad_request("name is required"));
    }
    if request.email.is_empty() {
        return Err(AppError::bad_request("email is required"));
    }
    if !is_valid_email(&request.email) {
        return Err(AppError::bad_request("email is not a valid address"));
    }
    if request.designation.is_empty() {
        return Err(AppError::bad_request("designation is required"));
    }

    let attendee = Attendee {
        id: String::new(),
        name: request.name,
        email: request.email,
        designation: request.designation,
        created_at: Utc::now(),
    };

    let created = state
        .repo
        .create_attendee(attendee)
        .await
        .map_err(|e| AppError::internal("Failed to register attendee").with_source(e.into()))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// List all attendees, newest first. Admin only.
///
/// # Errors
///
/// - `401` — no admin session
/// - `500` — store failure
pub async fn list<R>(
    _admin: RequireAdmin,
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<Attendee>>, AppError>
where
    R: Repository + Clone + Send + Sync + 'static,
{
    let attendees = state
        .repo
        .all_attendees()
        .await
        .map_err(|e| AppError::internal("Failed to fetch attendees").with_source(e.into()))?;

    Ok(Json(attendees))
}

/// Return the attendee count.
///
/// Public endpoint; does not transfer the attendee records.
///
/// # Errors
///
/// - `500` — store failure
pub async fn count<R>(State(state): State<AppState<R>>) -> Result<Json<CountResponse>, AppError>
where
    R: Repository + Clone + Send + Sync + 'static,
{
    let count = state
        .repo
        .attendee_count()
        .await
        .map_err(|e| AppError::internal("Failed to get count").with_source(e.into()))?;

    Ok(Json(CountResponse { count }))
}

/// Delete an attendee by id. Admin only, idempotent.
///
/// # Errors
///
/// - `401` — no admin session
/// - `500` — store failure
pub async fn remove<R>(
    _admin: RequireAdmin,
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, AppError>
where
    R: Repository + Clone + Send + Sync + 'static,
{
    state
        .repo
        .delete_attendee(&id)
        .await
        .map_err(|e| AppError::internal("Failed to delete attendee").with_source(e.into()))?;

    Ok(Json(MessageResponse {
        message: "Attendee deleted successfully".to_string(),
    }))
}
