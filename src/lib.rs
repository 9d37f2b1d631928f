//! # WeDay
//!
//! Wedding planning ledgers: guests, tasks, vendors and budget expenses,
//! kept in memory and summarised on a dashboard.
//!
//! ## Features
//!
//! - **Generic ledger**: one CRUD collection type for every record kind
//! - **Aggregates**: RSVP head counts, task progress, vendor costs, budget breakdown
//! - **Views**: dashboard summary, per-page payloads and a not-found fallback
//! - **HTTP API**: JSON endpoints with Axum
//! - **CLI**: render any view as a table or JSON
//!
//! ## Modules
//!
//! - [`ledger`]: Generic record collection, ids and filtering
//! - [`planner`]: The four record kinds, their aggregates and seed data
//! - [`dashboard`]: Navigation, countdown and view payloads
//! - [`api`]: REST API server with Axum
//! - [`config`]: TOML configuration and logging setup
//!
//! ## Quick Start
//!
//! ```rust
//! use weday::ledger::Selection;
//! use weday::planner::{ExpenseDraft, Planner, TaskFilter};
//!
//! let mut planner = Planner::seeded();
//!
//! // Add an expense and check the budget
//! planner.expenses.add(ExpenseDraft::new("Rings", "Jewelry", 1500.0));
//! let budget = planner.budget();
//! assert_eq!(budget.total_actual, 23500.0);
//!
//! // What is still left to do?
//! let incomplete = Selection::filter(TaskFilter::Incomplete);
//! assert_eq!(planner.tasks.select(&incomplete).count(), 7);
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod ledger;
pub mod planner;

// Re-export top-level types for convenience
pub use ledger::{FilteredView, Ledger, Record, RecordId, Selection};

pub use planner::{
    BudgetStats, Expense, ExpenseDraft, Guest, GuestDraft, GuestStats, GuestStatus, ParseError,
    Planner, PlannerRef, Priority, Task, TaskDraft, TaskStats, Vendor, VendorDraft, VendorStats,
};

pub use dashboard::{Countdown, DashboardSummary, View, ViewPayload};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{ApiConfig, Config, ConfigError, LoggingConfig, PlannerConfig};
