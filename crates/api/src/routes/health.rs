use axum::extract::State;
use axum::{routing::get, Json, Router};
use cograde_core::types::Timestamp;
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status: `ok`, or `degraded` when the database
    /// ping fails.
    pub status: &'static str,
    /// Current server time, RFC 3339.
    pub timestamp: Timestamp,
}

/// GET /health -- returns service status and the current server time.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = cograde_db::health_check(&state.pool).await.is_ok();

    let status = if db_healthy { "ok" } else { "degraded" };

    Json(HealthResponse {
        status,
        timestamp: chrono::Utc::now(),
    })
}

/// Mount health check routes (root-level, not under `/todos`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
