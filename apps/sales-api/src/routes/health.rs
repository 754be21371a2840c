//! Health endpoint.

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: bool,
}

/// GET /health - liveness probe plus a database round-trip.
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let database = state.db.health_check().await;
    Json(HealthResponse {
        status: if database { "ok" } else { "degraded" },
        database,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(check))
}
