//! Stats Routes
//!
//! Aggregates recomputed from the current ledger contents.
//!
//! - GET /api/v1/guests/stats   - RSVP head counts
//! - GET /api/v1/tasks/stats    - Completion progress
//! - GET /api/v1/vendors/stats  - Booking costs and deposits
//! - GET /api/v1/expenses/stats - Budget totals and category breakdown

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::planner::{BudgetStats, GuestStats, TaskStats, VendorStats};

/// GET /api/v1/guests/stats
pub async fn guest_stats(State(state): State<Arc<AppState>>) -> Json<GuestStats> {
    Json(state.guests.read().await.stats())
}

/// GET /api/v1/tasks/stats
pub async fn task_stats(State(state): State<Arc<AppState>>) -> Json<TaskStats> {
    Json(state.tasks.read().await.stats())
}

/// GET /api/v1/vendors/stats
pub async fn vendor_stats(State(state): State<Arc<AppState>>) -> Json<VendorStats> {
    Json(state.vendors.read().await.stats())
}

/// GET /api/v1/expenses/stats
///
/// Measured against the current total budget.
pub async fn budget_stats(State(state): State<Arc<AppState>>) -> Json<BudgetStats> {
    let expenses = state.expenses.read().await;
    let total_budget = *state.total_budget.read().await;
    Json(expenses.stats(total_budget))
}
