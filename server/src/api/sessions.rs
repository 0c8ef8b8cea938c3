//! Session management endpoints, including the denormalized listing.

use crate::auth::RequireAdmin;
use crate::auth::handlers::MessageResponse;
use crate::models::{Session, SessionWithSpeakers, Speaker};
use crate::providers::Repository;
use crate::server::AppState;
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::collections::HashMap;
use workshop_web::AppError;

/// List all sessions with their speaker details resolved.
///
/// Public endpoint. Always an array, never null. The speaker lookup is
/// best-effort: when it fails or returns nothing the sessions are still
/// returned, just without `speakerDetails` — a denormalization failure
/// never fails the request.
///
/// # Errors
///
/// - `500` — session scan failure
pub async fn list<R>(
    State(state): State<AppState<R>>,
) -> Result<Json<Vec<SessionWithSpeakers>>, AppError>
where
    R: Repository + Clone + Send + Sync + 'static,
{
    let sessions = state
        .repo
        .all_sessions()
        .await
        .map_err(|e| AppError::internal("Failed to fetch sessions").with_source(e.into()))?;

    if sessions.is_empty() {
        return Ok(Json(Vec::new()));
    }

    let speakers = match state.repo.all_speakers().await {
        Ok(speakers) => speakers,
        Err(error) => {
            tracing::warn!(
                error = %error,
                "Speaker lookup failed during session listing; returning sessions without details"
            );
            Vec::new()
        }
    };

    Ok(Json(attach_speaker_details(sessions, &speakers)))
}

/// Resolve each session's speaker references against the fetched speakers.
///
/// References that do not resolve are silently omitted.
fn attach_speaker_details(
    sessions: Vec<Session>,
    speakers: &[Speaker],
) -> Vec<SessionWithSpeakers> {
    let speaker_map: HashMap<&str, &Speaker> = speakers
        .iter()
        .map(|speaker| (speaker.id.as_str(), speaker))
        .collect();

    sessions
        .into_iter()
        .map(|session| {
            let speaker_details = session
                .speakers
                .iter()
                .filter_map(|id| speaker_map.get(id.as_str()).map(|&s| s.clone()))
                .collect();
            SessionWithSpeakers {
                session,
                speaker_details,
            }
        })
        .collect()
}

/// Create a session. Admin only; no field is mandatory.
///
/// # Errors
///
/// - `400` — malformed body
/// - `401` — no admin session
/// - `500` — store failure
pub async fn create<R>(
    _admin: RequireAdmin,
    State(state): State<AppState<R>>,
    payload: Result<Json<Session>, JsonRejection>,
) -> Result<(StatusCode, Json<Session>), AppError>
where
    R: Repository + Clone + Send + Sync + 'static,
{
    let Json(session) = payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    let created = state
        .repo
        .create_session(session)
        .await
        .map_err(|e| AppError::internal("Failed to create session").with_source(e.into()))?;

    Ok((StatusCode::CREATED, Json(created)))
}

/// Update a session. Admin only.
///
/// Full-record overwrite: every field, including empty ones, replaces the
/// stored record (unlike the speaker partial update).
///
/// # Errors
///
/// - `400` — malformed body
/// - `401` — no admin session
/// - `500` — store failure
pub async fn update<R>(
    _admin: RequireAdmin,
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    payload: Result<Json<Session>, JsonRejection>,
) -> Result<Json<Session>, AppError>
where
    R: Repository + Clone + Send + Sync + 'static,
{
    let Json(mut session) =
        payload.map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

    state
        .repo
        .update_session(&id, session.clone())
        .await
        .map_err(|e| AppError::internal("Failed to update session").with_source(e.into()))?;

    session.id = id;
    Ok(Json(session))
}

/// Delete a session by id. Admin only, idempotent.
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
        .delete_session(&id)
        .await
        .map_err(|e| AppError::internal("Failed to delete session").with_source(e.into()))?;

    Ok(Json(MessageResponse {
        message: "Session deleted successfully".to_string(),
    }))
}
