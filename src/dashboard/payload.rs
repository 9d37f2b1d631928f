//! Serialisable page contents
//!
//! What each view shows: the records of its ledger with the matching
//! aggregates, the dashboard summary, or a not-found message carrying the
//! requested path.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::dashboard::summary::DashboardSummary;
use crate::dashboard::view::View;
use crate::planner::{
    BudgetStats, Expense, Guest, GuestStats, PlannerRef, Task, TaskStats, Vendor, VendorStats,
};

pub const NOT_FOUND_MESSAGE: &str = "Oops! We couldn't find that page";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum ViewPayload {
    Dashboard(DashboardSummary),
    Guests {
        guests: Vec<Guest>,
        stats: GuestStats,
    },
    Tasks {
        /// Display order
        tasks: Vec<Task>,
        stats: TaskStats,
        categories: Vec<String>,
    },
    Vendors {
        vendors: Vec<Vendor>,
        stats: VendorStats,
        categories: Vec<String>,
    },
    Budget {
        expenses: Vec<Expense>,
        stats: BudgetStats,
    },
    NotFound {
        path: String,
        message: String,
    },
}

impl ViewPayload {
    /// Resolve `path` and build the page behind it
    pub fn for_path(path: &str, planner: PlannerRef<'_>, now: DateTime<Utc>) -> Self {
        let view = View::from_path(path);
        if view == View::NotFound {
            tracing::warn!(path, "no view for path");
        }
        Self::build(view, path, planner, now)
    }

    /// `path` is only used by `View::NotFound`
    pub fn build(view: View, path: &str, planner: PlannerRef<'_>, now: DateTime<Utc>) -> Self {
        match view {
            View::Dashboard => ViewPayload::Dashboard(DashboardSummary::build(planner, now)),
            View::Guests => ViewPayload::Guests {
                guests: planner.guests.list().to_vec(),
                stats: planner.guests.stats(),
            },
            View::Tasks => ViewPayload::Tasks {
                tasks: planner.tasks.sorted().into_iter().cloned().collect(),
                stats: planner.tasks.stats(),
                categories: planner.tasks.categories(),
            },
            View::Vendors => ViewPayload::Vendors {
                vendors: planner.vendors.list().to_vec(),
                stats: planner.vendors.stats(),
                categories: planner.vendors.categories(),
            },
            View::Budget => ViewPayload::Budget {
                expenses: planner.expenses.list().to_vec(),
                stats: planner.budget(),
            },
            View::NotFound => ViewPayload::NotFound {
                path: path.trim().to_string(),
                message: NOT_FOUND_MESSAGE.to_string(),
            },
        }
    }

    pub fn view(&self) -> View {
        match self {
            ViewPayload::Dashboard(_) => View::Dashboard,
            ViewPayload::Guests { .. } => View::Guests,
            ViewPayload::Tasks { .. } => View::Tasks,
            ViewPayload::Vendors { .. } => View::Vendors,
            ViewPayload::Budget { .. } => View::Budget,
            ViewPayload::NotFound { .. } => View::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::Planner;

    #[test]
    fn test_payload_for_each_view() {
        let planner = Planner::seeded();
        let now = Utc::now();

        for view in View::all() {
            let payload = ViewPayload::build(*view, "", planner.ledgers(), now);
            assert_eq!(payload.view(), *view);
        }
    }

    #[test]
    fn test_tasks_payload_is_sorted() {
        let planner = Planner::seeded();
        let payload = ViewPayload::for_path("/tasks", planner.ledgers(), Utc::now());

        match payload {
            ViewPayload::Tasks { tasks, categories, .. } => {
                assert!(tasks.last().unwrap().completed);
                assert_eq!(categories.len(), 7);
            }
            other => panic!("unexpected payload {other:?}"),
        }
    }

    #[test]
    fn test_not_found_payload() {
        let planner = Planner::seeded();
        let payload = ViewPayload::for_path("/settings", planner.ledgers(), Utc::now());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["view"], "not_found");
        assert_eq!(json["path"], "/settings");
        assert_eq!(json["message"], NOT_FOUND_MESSAGE);
    }

    #[test]
    fn test_dashboard_payload_is_tagged() {
        let planner = Planner::seeded();
        let payload = ViewPayload::for_path("/", planner.ledgers(), Utc::now());

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["view"], "dashboard");
        assert_eq!(json["guests"]["total_invited"], 4);
    }
}
