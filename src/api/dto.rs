//! Data Transfer Objects
//!
//! Request and response types for the API endpoints that are not planner
//! records themselves. Records, drafts and flags are serialized as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::planner::BudgetStats;

// ============================================
// RECORD DTOs
// ============================================

/// List query parameters
///
/// `q` and `filter` are not combined; when both are given the search wins.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    /// Case-insensitive search term
    #[serde(default)]
    pub q: Option<String>,
    /// Categorical filter (`all`, a status, or a category name)
    #[serde(default)]
    pub filter: Option<String>,
    /// Tasks only: return display order instead of insertion order
    #[serde(default)]
    pub sorted: bool,
}

/// Record list response
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    pub total: usize,
    pub records: Vec<T>,
}

/// Category list response
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

// ============================================
// BUDGET DTOs
// ============================================

/// Set total budget request
#[derive(Debug, Deserialize)]
pub struct BudgetRequest {
    pub total_budget: f64,
}

/// Budget response
#[derive(Debug, Serialize)]
pub struct BudgetResponse {
    pub total_budget: f64,
    pub wedding_date: NaiveDate,
    pub stats: BudgetStats,
}

// ============================================
// VIEW DTOs
// ============================================

/// One entry of the navigation menu
#[derive(Debug, Serialize)]
pub struct ViewInfo {
    pub view: crate::dashboard::View,
    pub title: String,
    pub path: String,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy
    pub status: String,
    /// Record count per ledger
    pub records: RecordCounts,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Application version
    pub version: String,
}

#[derive(Debug, Serialize)]
pub struct RecordCounts {
    pub guests: usize,
    pub tasks: usize,
    pub vendors: usize,
    pub expenses: usize,
}
