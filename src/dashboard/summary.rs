//! Dashboard summary
//!
//! One read-only snapshot over all four ledgers. Nothing here is stored;
//! every figure is recomputed from the ledgers each time.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::dashboard::countdown::Countdown;
use crate::planner::{
    BudgetStats, GuestStats, PlannerRef, Task, TaskStats, VendorStats, UPCOMING_PREVIEW_LEN,
};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub wedding_date: NaiveDate,
    pub countdown: Countdown,
    pub guests: GuestStats,
    pub tasks: TaskStats,
    pub vendors: VendorStats,
    pub budget: BudgetStats,
    /// First tasks in display order
    pub upcoming_tasks: Vec<Task>,
}

impl DashboardSummary {
    pub fn build(planner: PlannerRef<'_>, now: DateTime<Utc>) -> Self {
        Self {
            wedding_date: planner.wedding_date,
            countdown: Countdown::until(planner.wedding_date, now),
            guests: planner.guests.stats(),
            tasks: planner.tasks.stats(),
            vendors: planner.vendors.stats(),
            budget: planner.budget(),
            upcoming_tasks: planner
                .tasks
                .upcoming(UPCOMING_PREVIEW_LEN)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
