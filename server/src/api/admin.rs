//! Admin dashboard endpoints.

use crate::auth::RequireAdmin;
use crate::models::AdminStats;
use crate::providers::Repository;
use crate::server::AppState;
use axum::{Json, extract::State};
use workshop_web::AppError;

/// Return the designation breakdown for the dashboard. Admin only.
///
/// # Endpoint
///
/// ```text
/// GET /api/admin/stats
/// ```
///
/// # Response
///
/// ```json
/// {"designationBreakdown": [{"designation": "Engineer", "count": 2}]}
/// ```
///
/// # Errors
///
/// - `401` — no admin session
/// - `500` — store failure
pub async fn stats<R>(
    _admin: RequireAdmin,
    State(state): State<AppState<R>>,
) -> Result<Json<AdminStats>, AppError>
where
    R: Repository + Clone + Send + Sync + 'static,
{
    let breakdown = state
        .repo
        .designation_breakdown()
        .await
        .map_err(|e| AppError::internal("Failed to get stats").with_source(e.into()))?;

    Ok(Json(AdminStats {
        designation_breakdown: breakdown,
    }))
}
