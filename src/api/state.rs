//! Application State
//!
//! Shared state accessible by all API handlers.
//! Each ledger sits behind its own lock; no request ever needs two write
//! locks, so ledgers stay independent of each other.

use chrono::NaiveDate;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::RwLock;

use crate::config::ApiConfig;
use crate::ledger::Ledger;
use crate::planner::{Expense, Guest, Planner, PlannerRef, Task, Vendor};

/// Shared application state for all handlers
pub struct AppState {
    pub guests: RwLock<Ledger<Guest>>,
    pub tasks: RwLock<Ledger<Task>>,
    pub vendors: RwLock<Ledger<Vendor>>,
    pub expenses: RwLock<Ledger<Expense>>,
    /// Budget the expense totals are measured against
    pub total_budget: RwLock<f64>,
    pub wedding_date: NaiveDate,
    /// API configuration
    pub config: Arc<ApiConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Take ownership of a planner's ledgers
    pub fn from_planner(planner: Planner, config: ApiConfig) -> Self {
        let total_budget = planner.total_budget();
        let wedding_date = planner.wedding_date();

        Self {
            guests: RwLock::new(planner.guests),
            tasks: RwLock::new(planner.tasks),
            vendors: RwLock::new(planner.vendors),
            expenses: RwLock::new(planner.expenses),
            total_budget: RwLock::new(total_budget),
            wedding_date,
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// Read every ledger at once and hand the borrowed view to `f`.
    ///
    /// Locks are taken in a fixed order: guests, tasks, vendors, expenses,
    /// budget.
    pub async fn with_planner<T>(&self, f: impl FnOnce(PlannerRef<'_>) -> T) -> T {
        let guests = self.guests.read().await;
        let tasks = self.tasks.read().await;
        let vendors = self.vendors.read().await;
        let expenses = self.expenses.read().await;
        let total_budget = *self.total_budget.read().await;

        f(PlannerRef {
            guests: &guests,
            tasks: &tasks,
            vendors: &vendors,
            expenses: &expenses,
            total_budget,
            wedding_date: self.wedding_date,
        })
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_planner(Planner::seeded(), ApiConfig::default())
    }
}
