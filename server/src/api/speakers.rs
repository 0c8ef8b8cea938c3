//! Speaker management endpoints.

use crate::auth::RequireAdmin;
use crate::auth::handlers::MessageResponse;
use crate::models::Speaker;
use crate::providers::Repository;
use crate::server::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use workshop_web::AppError;

/// List all speakers.
///
/// Public endpoint. Always an array, never null.
///
/// # Errors
///
/// - `500` — store failure
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<Json<Vec<Speaker>>, AppError>
where
    R: Repository + Clone + Send + Sync + 'static,
{
    let speakers = state
        .repo
        .all_speakers()
        .await
        .map_err(|e| AppError::internal("Failed to fetch speakers").with_source(e.into()))?;

    Ok(Json(speakers))
}

/// Create a speaker. Admin only; no field is mandatory.
///
/// # Errors
///
/// - `400` — malformed body
/// - `401` — no admin session
/// - `500` — store failure
pub async fn create<R>(
    _admin: RequireAdmin,
    State(state): State<AppState<R>>,
    payload: Result<Json<Speaker>, JsonRejection>,
) -> Result<(StatusCode, Json<Speaker>), AppError>
where
    R: Repository + Clone + Send + Sync + 'static,
{
    let Json(speaker) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let created = state
        .repo
        .create_speaker(speaker)
        .await
        .map_err(|e| AppError::internal("Failed to create speaker").with_source(e.into()))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a speaker. Admin only.
///
/// Applies the partial-overwrite policy: `name` and `bio` always replace
/// the stored values, the optional fields only when non-empty.
///
/// # Errors
///
/// - `400` — malformed body
/// - `401` — no admin session
/// - `500` — store failure (including an unknown id)
pub async fn update<R>(
    _admin: RequireAdmin,
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<Speaker>, JsonRejection>,
) -> Result<Json<Speaker>, AppError>
where
    R: Repository + Clone + Send + Sync + 'static,
{
    let Json(mut speaker) =
        payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    state
        .repo
        .update_speaker(&id, speaker.clone())
        .await
        .map_err(|e| AppError::internal("Failed to update speaker").with_source(e.into()))?;

    // Echo the request body with the path id, like the create response
    speaker.id = id;
    Ok(Json(speaker))
}

/// Delete a speaker by id. Admin only, idempotent.
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
        .delete_speaker(&id)
        .await
        .map_err(|e| AppError::internal("Failed to delete speaker").with_source(e.into()))?;

    Ok(Json(MessageResponse {
        message: "Speaker deleted successfully".to_string(),
    }))
}
