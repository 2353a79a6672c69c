use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use shared::{CompanionListResponse, CompanionQuery, RecentSessionsQuery, RecentSessionsResponse};
use std::sync::Arc;
use tracing::error;

use crate::AppState;

/// GET /api/companions - One page of companions, optionally filtered by subject or topic
pub async fn list_companions(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<CompanionQuery>,
) -> Result<Json<CompanionListResponse>, StatusCode> {
    let query = query.normalized();

    let companions = app_state
        .store
        .all_companions(&query)
        .await
        .map_err(|e| {
            error!("Failed to list companions: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(CompanionListResponse { companions }))
}

/// GET /api/sessions/recent - Most recently completed sessions
pub async fn recent_sessions(
    State(app_state): State<Arc<AppState>>,
    Query(query): Query<RecentSessionsQuery>,
) -> Result<Json<RecentSessionsResponse>, StatusCode> {
    let sessions = app_state
        .store
        .recent_sessions(query.clamped_limit())
        .await
        .map_err(|e| {
            error!("Failed to list recent sessions: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

    Ok(Json(RecentSessionsResponse { sessions }))
}
