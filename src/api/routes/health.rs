//! Health Routes
//!
//! Health check endpoints for monitoring and Kubernetes probes.
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (ready to serve traffic)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::api::dto::{HealthResponse, RecordCounts};
use crate::api::state::AppState;

/// GET /health/live
///
/// Kubernetes liveness probe.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// Kubernetes readiness probe. Ledgers are in memory, so the server is ready
/// as soon as it is listening.
pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
///
/// Full health status with record counts.
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let records = state
        .with_planner(|planner| RecordCounts {
            guests: planner.guests.len(),
            tasks: planner.tasks.len(),
            vendors: planner.vendors.len(),
            expenses: planner.expenses.len(),
        })
        .await;

    Json(HealthResponse {
        status: "healthy".to_string(),
        records,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
